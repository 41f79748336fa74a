//! Pet Stat Updates
//!
//! Every action is a fixed delta table applied with clamping.

use crate::models::{PetStats, STAT_MAX};

/// Eco points needed per level
pub const ECO_POINTS_PER_LEVEL: u32 = 100;

/// Discrete things the player can do that change stats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetAction {
    Feed,
    Play,
    Rest,
    Battle,
    /// Reward for a correct quiz / boss answer
    CorrectAnswer,
}

/// Per-action changes; bounded stats use signed deltas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Deltas {
    life: i32,
    happiness: i32,
    energy: i32,
    attack: u32,
    defense: u32,
    eco_points: u32,
    items_recycled: u32,
}

impl PetAction {
    fn deltas(&self) -> Deltas {
        match self {
            PetAction::Feed => Deltas { life: 10, happiness: 5, eco_points: 5, ..Deltas::default() },
            PetAction::Play => Deltas { happiness: 15, energy: -10, ..Deltas::default() },
            PetAction::Rest => Deltas { life: 5, energy: 25, ..Deltas::default() },
            PetAction::Battle => Deltas { happiness: 10, energy: -15, attack: 2, defense: 1, ..Deltas::default() },
            PetAction::CorrectAnswer => Deltas {
                happiness: 5,
                energy: -3,
                attack: 1,
                defense: 1,
                eco_points: 15,
                items_recycled: 1,
                ..Deltas::default()
            },
        }
    }

    /// Short reaction shown after the action
    pub fn reaction(&self) -> Reaction {
        match self {
            PetAction::Feed | PetAction::Rest | PetAction::CorrectAnswer => Reaction::Happy,
            PetAction::Play | PetAction::Battle => Reaction::Excited,
        }
    }
}

/// clamp(current + delta, 0, 100)
pub fn clamp_stat(current: u32, delta: i32) -> u32 {
    (current as i64 + delta as i64).clamp(0, STAT_MAX as i64) as u32
}

/// Level implied by eco points; never lowers the current level
pub fn level_for(current_level: u32, eco_points: u32) -> u32 {
    current_level.max(1 + eco_points / ECO_POINTS_PER_LEVEL)
}

impl PetStats {
    /// Apply one action, returning the new stats
    pub fn apply(self, action: PetAction) -> Self {
        let d = action.deltas();
        let eco_points = self.eco_points.saturating_add(d.eco_points);
        Self {
            life: clamp_stat(self.life, d.life),
            happiness: clamp_stat(self.happiness, d.happiness),
            energy: clamp_stat(self.energy, d.energy),
            level: level_for(self.level, eco_points),
            attack: self.attack.saturating_add(d.attack),
            defense: self.defense.saturating_add(d.defense),
            eco_points,
            items_recycled: self.items_recycled.saturating_add(d.items_recycled),
        }
    }

    pub fn mood(&self) -> Mood {
        // Thresholds doubled: average < 30 / > 80 with half points kept
        let sum = self.happiness + self.life;
        if sum < 60 {
            Mood::Sad
        } else if sum > 160 {
            Mood::Happy
        } else if self.energy < 20 {
            Mood::Sleeping
        } else {
            Mood::Idle
        }
    }
}

/// Resting mood derived from stats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Idle,
    Happy,
    Sad,
    Sleeping,
}

impl Mood {
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Idle => "Content",
            Mood::Happy => "Thriving",
            Mood::Sad => "Gloomy",
            Mood::Sleeping => "Sleepy",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Idle => "🦎",
            Mood::Happy => "😄",
            Mood::Sad => "😢",
            Mood::Sleeping => "😴",
        }
    }
}

/// Transient reaction after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Happy,
    Excited,
}

impl Reaction {
    pub fn class(&self) -> &'static str {
        match self {
            Reaction::Happy => "pet-avatar happy",
            Reaction::Excited => "pet-avatar excited",
        }
    }
}

/// Unlockable badges, computed from stats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Achievement {
    FirstBattle,
    Recycler,
    EcoHero,
}

impl Achievement {
    pub const ALL: [Achievement; 3] = [Achievement::FirstBattle, Achievement::Recycler, Achievement::EcoHero];

    pub fn title(&self) -> &'static str {
        match self {
            Achievement::FirstBattle => "First Battle",
            Achievement::Recycler => "Recycler",
            Achievement::EcoHero => "Eco Hero",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Achievement::FirstBattle => "🏆",
            Achievement::Recycler => "♻️",
            Achievement::EcoHero => "⭐",
        }
    }

    pub fn unlocked(&self, stats: &PetStats) -> bool {
        match self {
            Achievement::FirstBattle => stats.attack >= 30,
            Achievement::Recycler => stats.items_recycled >= 10,
            Achievement::EcoHero => stats.eco_points >= 250,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIONS: [PetAction; 5] = [
        PetAction::Feed,
        PetAction::Play,
        PetAction::Rest,
        PetAction::Battle,
        PetAction::CorrectAnswer,
    ];

    fn in_range(stats: &PetStats) -> bool {
        stats.life <= STAT_MAX && stats.happiness <= STAT_MAX && stats.energy <= STAT_MAX
    }

    #[test]
    fn test_feed_matches_table() {
        let stats = PetStats::default().apply(PetAction::Feed);
        assert_eq!(stats.life, 85);
        assert_eq!(stats.happiness, 65);
        assert_eq!(stats.eco_points, 125);
        assert_eq!(stats.energy, 60);
    }

    #[test]
    fn test_battle_drains_energy_and_grows_attack() {
        let stats = PetStats::default().apply(PetAction::Battle);
        assert_eq!(stats.energy, 45);
        assert_eq!(stats.attack, 37);
        assert_eq!(stats.defense, 31);
        assert_eq!(stats.happiness, 70);
    }

    #[test]
    fn test_correct_answer_reward() {
        let stats = PetStats::default().apply(PetAction::CorrectAnswer);
        assert_eq!(stats.eco_points, 135);
        assert_eq!(stats.items_recycled, 9);
        assert_eq!(stats.energy, 57);
    }

    #[test]
    fn test_stats_stay_in_range_for_long_sequences() {
        let mut stats = PetStats::default();
        for i in 0..1_000 {
            stats = stats.apply(ACTIONS[(i * 7 + i / 3) % ACTIONS.len()]);
            assert!(in_range(&stats), "out of range after step {}: {:?}", i, stats);
        }
        for _ in 0..50 {
            stats = stats.apply(PetAction::Battle);
            assert!(in_range(&stats));
        }
        assert_eq!(stats.energy, 0);
    }

    #[test]
    fn test_clamp_stat_edges() {
        assert_eq!(clamp_stat(95, 10), 100);
        assert_eq!(clamp_stat(5, -15), 0);
        assert_eq!(clamp_stat(0, 0), 0);
    }

    #[test]
    fn test_level_is_monotonic() {
        assert_eq!(level_for(2, 120), 2);
        assert_eq!(level_for(2, 310), 4);
        assert_eq!(level_for(7, 0), 7);

        let mut stats = PetStats::default();
        let mut last = stats.level;
        for _ in 0..40 {
            stats = stats.apply(PetAction::CorrectAnswer);
            assert!(stats.level >= last);
            last = stats.level;
        }
        assert_eq!(stats.eco_points, 720);
        assert_eq!(stats.level, 8);
    }

    #[test]
    fn test_mood_thresholds() {
        let base = PetStats::default();
        assert_eq!(PetStats { happiness: 10, life: 20, ..base }.mood(), Mood::Sad);
        assert_eq!(PetStats { happiness: 90, life: 90, ..base }.mood(), Mood::Happy);
        assert_eq!(PetStats { energy: 10, ..base }.mood(), Mood::Sleeping);
        assert_eq!(base.mood(), Mood::Idle);
    }

    #[test]
    fn test_mood_uses_exact_average() {
        let base = PetStats::default();
        // averages 80.5 and 29.5
        assert_eq!(PetStats { happiness: 81, life: 80, ..base }.mood(), Mood::Happy);
        assert_eq!(PetStats { happiness: 29, life: 30, ..base }.mood(), Mood::Sad);
        assert_eq!(PetStats { happiness: 80, life: 80, ..base }.mood(), Mood::Idle);
        assert_eq!(PetStats { happiness: 30, life: 30, ..base }.mood(), Mood::Idle);
    }

    #[test]
    fn test_default_achievements() {
        let stats = PetStats::default();
        assert!(Achievement::FirstBattle.unlocked(&stats));
        assert!(!Achievement::Recycler.unlocked(&stats));
        assert!(!Achievement::EcoHero.unlocked(&stats));
    }
}
