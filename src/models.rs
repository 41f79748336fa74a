//! Frontend Models
//!
//! Data structures shared by the tabs and persisted to local storage.

use serde::{Deserialize, Serialize};

/// Upper bound for life / happiness / energy
pub const STAT_MAX: u32 = 100;

/// Pet statistics (stored as camelCase JSON under `petStats`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PetStats {
    pub life: u32,
    pub happiness: u32,
    pub energy: u32,
    pub level: u32,
    pub attack: u32,
    pub defense: u32,
    pub eco_points: u32,
    pub items_recycled: u32,
}

impl Default for PetStats {
    fn default() -> Self {
        Self {
            life: 75,
            happiness: 60,
            energy: 60,
            level: 2,
            attack: 35,
            defense: 30,
            eco_points: 120,
            items_recycled: 8,
        }
    }
}

impl PetStats {
    /// Clamp bounded stats into range (used after loading untrusted blobs)
    pub fn normalized(mut self) -> Self {
        self.life = self.life.min(STAT_MAX);
        self.happiness = self.happiness.min(STAT_MAX);
        self.energy = self.energy.min(STAT_MAX);
        self.level = self.level.max(1);
        self
    }
}

/// Pet location inside its habitat, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PetPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for PetPosition {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

impl PetPosition {
    pub fn new(x: f64, y: f64) -> Self {
        let clamp = |v: f64| if v.is_finite() { v.clamp(0.0, 100.0) } else { 50.0 };
        Self { x: clamp(x), y: clamp(y) }
    }
}

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
            Theme::System => "🖥️",
        }
    }

    /// Whether the dark class should be set
    pub fn resolve(&self, system_prefers_dark: bool) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => system_prefers_dark,
        }
    }
}

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Scan,
    Pet,
    Games,
    Learning,
    Recycling,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Scan, Tab::Pet, Tab::Games, Tab::Learning, Tab::Recycling];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Scan => "Scan",
            Tab::Pet => "My Pet",
            Tab::Games => "Games",
            Tab::Learning => "Learning",
            Tab::Recycling => "Recycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Scan => "📷",
            Tab::Pet => "❤️",
            Tab::Games => "🎮",
            Tab::Learning => "📖",
            Tab::Recycling => "♻️",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_serialize_camel_case() {
        let json = serde_json::to_value(PetStats::default()).unwrap();
        assert_eq!(json["ecoPoints"], 120);
        assert_eq!(json["itemsRecycled"], 8);
        assert!(json.get("eco_points").is_none());
    }

    #[test]
    fn test_partial_blob_uses_defaults() {
        let stats: PetStats = serde_json::from_str(r#"{"life": 40, "ecoPoints": 7}"#).unwrap();
        assert_eq!(stats.life, 40);
        assert_eq!(stats.eco_points, 7);
        assert_eq!(stats.happiness, 60);
        assert_eq!(stats.attack, 35);
    }

    #[test]
    fn test_normalized_clamps_bounded_stats() {
        let stats = PetStats { life: 250, happiness: 101, energy: 100, level: 0, ..PetStats::default() }.normalized();
        assert_eq!(stats.life, 100);
        assert_eq!(stats.happiness, 100);
        assert_eq!(stats.energy, 100);
        assert_eq!(stats.level, 1);
    }

    #[test]
    fn test_position_clamps() {
        assert_eq!(PetPosition::new(-4.0, 130.0), PetPosition { x: 0.0, y: 100.0 });
        assert_eq!(PetPosition::new(f64::NAN, 10.0).x, 50.0);
    }

    #[test]
    fn test_theme_round_trip_and_resolve() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_str(theme.as_str()), theme);
        }
        assert_eq!(Theme::from_str("sepia"), Theme::System);
        assert!(Theme::System.resolve(true));
        assert!(!Theme::Light.resolve(true));
        assert!(Theme::Dark.resolve(false));
    }
}
