//! UI Components
//!
//! Reusable Leptos components.

mod answer_options;
mod games_tab;
mod learning_quiz;
mod learning_tab;
mod pet_habitat;
mod pet_tab;
mod recycling_info_tab;
mod scan_tab;
mod stat_bar;
mod tab_bar;
mod theme_toggle;

pub use answer_options::AnswerOptions;
pub use games_tab::GamesTab;
pub use learning_quiz::LearningQuiz;
pub use learning_tab::LearningTab;
pub use pet_habitat::PetHabitat;
pub use pet_tab::PetTab;
pub use recycling_info_tab::RecyclingInfoTab;
pub use scan_tab::ScanTab;
pub use stat_bar::StatBar;
pub use tab_bar::TabBar;
pub use theme_toggle::ThemeToggle;
