//! Boss Battle
//!
//! Melbourne map with e-waste "bosses". Picking a district starts a patrol:
//! a quiz over that district's bosses where each question asks for the
//! boss's recycling stream.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::{AnswerOutcome, Progress, Question, QuizSession};

/// Number of wrong options offered next to the correct type
pub const DISTRACTORS: usize = 3;

/// Recycling streams, each personified as a boss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EwasteType {
    Batteries,
    SmallAppliances,
    MobilePhones,
    ComputersLaptops,
    TvsMonitors,
    CablesChargers,
    PowerTools,
    PrintersScanners,
    TabletsPhones,
}

/// Presentation for a boss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossVisual {
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tip: &'static str,
}

impl EwasteType {
    pub const ALL: [EwasteType; 9] = [
        EwasteType::Batteries,
        EwasteType::SmallAppliances,
        EwasteType::MobilePhones,
        EwasteType::ComputersLaptops,
        EwasteType::TvsMonitors,
        EwasteType::CablesChargers,
        EwasteType::PowerTools,
        EwasteType::PrintersScanners,
        EwasteType::TabletsPhones,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EwasteType::Batteries => "Batteries",
            EwasteType::SmallAppliances => "Small Appliances",
            EwasteType::MobilePhones => "Mobile Phones",
            EwasteType::ComputersLaptops => "Computers & Laptops",
            EwasteType::TvsMonitors => "TVs & Monitors",
            EwasteType::CablesChargers => "Cables & Chargers",
            EwasteType::PowerTools => "Power Tools",
            EwasteType::PrintersScanners => "Printers & Scanners",
            EwasteType::TabletsPhones => "Tablets & Phones",
        }
    }

    pub fn visual(&self) -> BossVisual {
        match self {
            EwasteType::Batteries => BossVisual {
                emoji: "🔋",
                title: "Voltaic Hydra",
                description: "Overcharged cells spark in every direction, waiting to unleash a shockwave.",
                tip: "Look for high-density energy storage near checkout counters and device kiosks.",
            },
            EwasteType::SmallAppliances => BossVisual {
                emoji: "🔌",
                title: "Countertop Golem",
                description: "A heap of blenders and toasters fuses into a clattering construct.",
                tip: "Compact gadgets with short cords often gather around kitchen waste areas.",
            },
            EwasteType::MobilePhones => BossVisual {
                emoji: "📱",
                title: "Signal Wraith",
                description: "Screens flicker as abandoned phones merge into a whispering spirit.",
                tip: "Retail floors and lockers are prime zones for lost handheld devices.",
            },
            EwasteType::ComputersLaptops => BossVisual {
                emoji: "💻",
                title: "Server Titan",
                description: "Towering stacks of processors glow with recycled power cores.",
                tip: "Watch for cooling vents, power bricks, and cables clustering under desks.",
            },
            EwasteType::TvsMonitors => BossVisual {
                emoji: "📺",
                title: "Pixel Leviathan",
                description: "Cracked displays stitch together into a beast of static and light.",
                tip: "Large glass screens usually lurk near lounges and entertainment hubs.",
            },
            EwasteType::CablesChargers => BossVisual {
                emoji: "🔗",
                title: "Current Coil Basilisk",
                description: "Loops of insulated lines braid together, ready to ensnare careless trainers.",
                tip: "Check communal storage tubs where accessories pile up between uses.",
            },
            EwasteType::PowerTools => BossVisual {
                emoji: "🛠️",
                title: "Workshop Colossus",
                description: "Rusty drills and saws pound together in a relentless rhythm.",
                tip: "Heavy gear with removable batteries lives in garages and sheds.",
            },
            EwasteType::PrintersScanners => BossVisual {
                emoji: "🖨️",
                title: "Paperstorm Chimera",
                description: "Toner clouds swirl around a multi-headed printer beast.",
                tip: "Shared offices stash bulky printers near copy stations and spare paper.",
            },
            EwasteType::TabletsPhones => BossVisual {
                emoji: "📲",
                title: "Glasslight Mirage",
                description: "Shimmering frames refract the skyline, masking the creature's true form.",
                tip: "Charging carts and classrooms keep spare tablets close at hand.",
            },
        }
    }
}

/// Map district
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub bosses: &'static [EwasteType],
}

pub const LOCATIONS: &[Location] = &[
    Location { id: "north", name: "Supermarket", emoji: "🛒", bosses: &[EwasteType::Batteries, EwasteType::CablesChargers] },
    Location { id: "east", name: "Kitchen", emoji: "🍽️", bosses: &[EwasteType::SmallAppliances, EwasteType::CablesChargers] },
    Location { id: "central", name: "Office", emoji: "🏢", bosses: &[EwasteType::ComputersLaptops, EwasteType::PrintersScanners] },
    Location { id: "river", name: "Living Room", emoji: "🛋️", bosses: &[EwasteType::TvsMonitors, EwasteType::CablesChargers] },
    Location { id: "south", name: "Garage", emoji: "🛠️", bosses: &[EwasteType::PowerTools, EwasteType::Batteries] },
    Location { id: "west", name: "School", emoji: "🏫", bosses: &[EwasteType::TabletsPhones, EwasteType::CablesChargers] },
];

pub fn location(id: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|loc| loc.id == id)
}

/// Build the question for one boss: its type plus distinct distractors, shuffled
pub fn boss_question<R: Rng + ?Sized>(boss: EwasteType, rng: &mut R) -> Question {
    let others: Vec<EwasteType> = EwasteType::ALL.iter().copied().filter(|t| *t != boss).collect();
    let mut choices: Vec<EwasteType> = others.choose_multiple(rng, DISTRACTORS).copied().collect();
    choices.push(boss);
    choices.shuffle(rng);
    let correct = choices.iter().position(|t| *t == boss).unwrap_or(0);
    Question {
        prompt: format!("Which recycling stream does the {} belong to?", boss.visual().title),
        options: choices.iter().map(|t| t.label().to_string()).collect(),
        correct,
    }
}

/// Screens of the battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BossPhase {
    #[default]
    Intro,
    Map,
    Encounter,
    Result,
    /// Patrol finished
    Summary,
}

/// Patrol through one district
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patrol {
    pub location: &'static Location,
    /// Boss behind each question in the session bank
    bosses: Vec<EwasteType>,
    pub session: QuizSession,
}

impl Patrol {
    pub fn new<R: Rng + ?Sized>(location: &'static Location, rounds: usize, rng: &mut R) -> Self {
        let mut bosses = location.bosses.to_vec();
        bosses.shuffle(rng);
        let bank = bosses.iter().map(|b| boss_question(*b, rng)).collect();
        Self { location, bosses, session: QuizSession::new(bank, rounds) }
    }

    pub fn current_boss(&self) -> Option<EwasteType> {
        if self.session.is_completed() {
            return None;
        }
        self.bosses.get(self.session.index()).copied()
    }
}

/// Boss battle state machine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BossBattle {
    phase: BossPhase,
    patrol: Option<Patrol>,
    rounds: usize,
}

impl BossBattle {
    pub fn new(rounds: usize) -> Self {
        Self { phase: BossPhase::Intro, patrol: None, rounds }
    }

    pub fn phase(&self) -> BossPhase {
        self.phase
    }

    pub fn patrol(&self) -> Option<&Patrol> {
        self.patrol.as_ref()
    }

    pub fn selected_location(&self) -> Option<&'static str> {
        self.patrol.as_ref().map(|p| p.location.id)
    }

    /// Intro → Map, clearing any previous patrol
    pub fn open_map(&mut self) {
        self.patrol = None;
        self.phase = BossPhase::Map;
    }

    pub fn back_to_intro(&mut self) {
        self.patrol = None;
        self.phase = BossPhase::Intro;
    }

    /// Start a patrol at `id`. Unknown ids leave the state unchanged.
    pub fn pick_location<R: Rng + ?Sized>(&mut self, id: &str, rng: &mut R) -> bool {
        let Some(loc) = location(id) else {
            log::warn!("[BOSS] unknown location {}", id);
            return false;
        };
        self.patrol = Some(Patrol::new(loc, self.rounds, rng));
        self.phase = BossPhase::Encounter;
        true
    }

    /// Answer the current encounter; moves to the result screen
    pub fn answer(&mut self, choice: usize) -> Option<AnswerOutcome> {
        if self.phase != BossPhase::Encounter {
            return None;
        }
        let outcome = self.patrol.as_mut()?.session.answer(choice)?;
        self.phase = BossPhase::Result;
        Some(outcome)
    }

    /// Result → next encounter, or the summary when the patrol is over
    pub fn next_boss(&mut self) -> Option<Progress> {
        if self.phase != BossPhase::Result {
            return None;
        }
        let progress = self.patrol.as_mut()?.session.advance();
        self.phase = match progress {
            Progress::Completed => BossPhase::Summary,
            Progress::NextQuestion | Progress::NextRound => BossPhase::Encounter,
        };
        Some(progress)
    }

    /// Leave the encounter without answering
    pub fn back_to_map(&mut self) {
        self.open_map();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_boss_question_has_one_correct_distinct_option() {
        let mut rng = StdRng::seed_from_u64(7);
        for boss in EwasteType::ALL {
            let q = boss_question(boss, &mut rng);
            assert_eq!(q.options.len(), DISTRACTORS + 1);
            assert_eq!(q.correct_option(), Some(boss.label()));
            let unique: HashSet<&String> = q.options.iter().collect();
            assert_eq!(unique.len(), q.options.len());
        }
    }

    #[test]
    fn test_locations_are_well_formed() {
        let ids: HashSet<&str> = LOCATIONS.iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), LOCATIONS.len());
        assert!(LOCATIONS.iter().all(|l| !l.bosses.is_empty()));
        assert_eq!(location("central").map(|l| l.name), Some("Office"));
        assert!(location("moon").is_none());
    }

    #[test]
    fn test_full_patrol_reaches_summary() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut battle = BossBattle::new(2);
        battle.open_map();
        assert!(battle.pick_location("south", &mut rng));
        assert_eq!(battle.phase(), BossPhase::Encounter);

        let mut correct = 0;
        let mut steps = 0;
        while battle.phase() != BossPhase::Summary {
            let patrol = battle.patrol().unwrap();
            let boss = patrol.current_boss().unwrap();
            assert!(patrol.location.bosses.contains(&boss));
            let q = patrol.session.current().unwrap().clone();
            // answer right on even steps only
            let choice = if steps % 2 == 0 { q.correct } else { (q.correct + 1) % q.options.len() };
            if battle.answer(choice).unwrap().is_correct() {
                correct += 1;
            }
            assert_eq!(battle.phase(), BossPhase::Result);
            battle.next_boss();
            steps += 1;
        }

        assert_eq!(steps, 4);
        assert_eq!(battle.patrol().unwrap().session.score(), correct);
        assert_eq!(correct, 2);
    }

    #[test]
    fn test_phase_only_moves_on_accepted_actions() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut battle = BossBattle::new(1);
        battle.open_map();
        battle.pick_location("central", &mut rng);

        assert!(battle.answer(0).is_some());
        assert_eq!(battle.phase(), BossPhase::Result);
        assert_eq!(battle.answer(1), None);
        assert_eq!(battle.phase(), BossPhase::Result);

        assert!(battle.next_boss().is_some());
        assert_ne!(battle.phase(), BossPhase::Result);
        assert_eq!(battle.next_boss(), None);
    }

    #[test]
    fn test_answer_outside_encounter_is_ignored() {
        let mut battle = BossBattle::new(1);
        assert_eq!(battle.answer(0), None);
        assert_eq!(battle.next_boss(), None);
        assert_eq!(battle.phase(), BossPhase::Intro);
    }

    #[test]
    fn test_unknown_location_keeps_map() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut battle = BossBattle::new(1);
        battle.open_map();
        assert!(!battle.pick_location("nowhere", &mut rng));
        assert_eq!(battle.phase(), BossPhase::Map);
        assert!(battle.patrol().is_none());
    }

    #[test]
    fn test_back_to_map_clears_patrol() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut battle = BossBattle::new(1);
        battle.pick_location("north", &mut rng);
        battle.back_to_map();
        assert_eq!(battle.phase(), BossPhase::Map);
        assert_eq!(battle.selected_location(), None);
    }
}
