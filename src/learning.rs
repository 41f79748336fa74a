//! Learning Content
//!
//! Static e-waste cards and the fixed learning quiz bank.

use crate::quiz::Question;

/// Number of tips shown in a card's quick preview
pub const TIP_PREVIEW: usize = 2;

/// Learning card; `body` is Markdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearningCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub category: &'static str,
    pub body: &'static str,
    pub tips: &'static [&'static str],
}

impl LearningCard {
    pub fn tip_preview(&self) -> &'static [&'static str] {
        let tips = self.tips;
        &tips[..tips.len().min(TIP_PREVIEW)]
    }
}

pub const CARDS: &[LearningCard] = &[
    LearningCard {
        id: "melbourne-ewaste",
        title: "E-Waste in Melbourne",
        description: "Understanding e-waste management in Melbourne",
        emoji: "🏙️",
        category: "Overview",
        body: "Melbourne has a **comprehensive** e-waste recycling program that helps residents properly dispose of electronic items. \
The city provides multiple collection points and regular collection services so electronic waste is handled responsibly.",
        tips: &[
            "Check your local council's e-waste collection schedule",
            "Use designated e-waste drop-off points",
            "Remove personal data before disposal",
            "Keep e-waste separate from regular recycling",
        ],
    },
    LearningCard {
        id: "collection-points",
        title: "Collection Points",
        description: "Where to drop off your e-waste in Melbourne",
        emoji: "📍",
        category: "Locations",
        body: "Melbourne has numerous e-waste collection points across the city:\n\n\
- permanent facilities\n\
- mobile collection services\n\
- special collection events\n\n\
Most collection points accept a wide range of electronic items.",
        tips: &[
            "Find your nearest collection point online",
            "Check operating hours before visiting",
            "Some items may have size restrictions",
            "Bring ID for verification if required",
        ],
    },
    LearningCard {
        id: "accepted-items",
        title: "Accepted Items",
        description: "What electronic items can be recycled",
        emoji: "📱",
        category: "Items",
        body: "Most electronic items are accepted at Melbourne's e-waste collection points. This includes *computers*, *phones*, *TVs*, \
small appliances, and other electronic devices. Some items may have specific requirements or restrictions.",
        tips: &[
            "Remove batteries from devices when possible",
            "Keep items in original packaging if available",
            "Check for size limits on large items",
            "Some items may require special handling",
        ],
    },
    LearningCard {
        id: "preparation",
        title: "Preparation Guide",
        description: "How to prepare your e-waste for recycling",
        emoji: "🔧",
        category: "Preparation",
        body: "Proper preparation of e-waste is crucial for safe and effective recycling:\n\n\
1. Remove personal data\n\
2. Clean the device\n\
3. Follow the guidelines for that type of electronics",
        tips: &[
            "Back up important data before disposal",
            "Factory reset all devices",
            "Remove SIM cards and memory cards",
            "Clean devices of dust and debris",
        ],
    },
    LearningCard {
        id: "environmental-impact",
        title: "Environmental Impact",
        description: "Why e-waste recycling matters for the environment",
        emoji: "🌱",
        category: "Impact",
        body: "E-waste recycling prevents %r%hazardous materials%r% from entering landfills, %g%recovers valuable resources%g%, \
and reduces the need for mining new materials. Melbourne's program helps protect **local ecosystems**.",
        tips: &[
            "Recycling prevents toxic materials from leaching",
            "Recovered materials reduce mining needs",
            "Proper disposal protects local waterways",
            "Energy is saved through material recovery",
        ],
    },
    LearningCard {
        id: "future-trends",
        title: "Future Trends",
        description: "The future of e-waste management in Melbourne",
        emoji: "🚀",
        category: "Future",
        body: "Melbourne keeps improving its e-waste program. New technologies, expanded collection services, \
and public awareness are building a more sustainable approach to electronic waste.",
        tips: &[
            "Stay updated on new collection methods",
            "Participate in community recycling programs",
            "Support sustainable electronics purchasing",
            "Educate others about e-waste importance",
        ],
    },
];

pub fn card(id: &str) -> Option<&'static LearningCard> {
    CARDS.iter().find(|c| c.id == id)
}

/// Unique categories in first-appearance order
pub fn categories(cards: &[LearningCard]) -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for c in cards {
        if !seen.contains(&c.category) {
            seen.push(c.category);
        }
    }
    seen
}

/// Fixed question bank for the learning quiz
pub fn quiz_bank() -> Vec<Question> {
    vec![
        Question::new(
            "What should you do before recycling an old phone?",
            &["Throw it in the kerbside bin", "Back up and wipe your data", "Charge it to full", "Remove the screen"],
            1,
        ),
        Question::new(
            "Where should e-waste go in Melbourne?",
            &["General waste bin", "Yellow recycling bin", "A designated e-waste drop-off point", "Garden waste bin"],
            2,
        ),
        Question::new(
            "A battery looks swollen. What is the safe option?",
            &["Keep charging it", "Puncture it to release pressure", "Bin it with food scraps", "Stop charging and take it to a staffed facility"],
            3,
        ),
        Question::new(
            "Which part of a phone holds recoverable precious metals?",
            &["Logic board", "Protective case", "Box insert", "Screen protector"],
            0,
        ),
        Question::new(
            "Why keep e-waste out of landfill?",
            &["It is too heavy", "Hazardous materials can leach into soil and water", "It attracts pests", "Landfills reject plastic"],
            1,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_preserve_first_appearance() {
        let cats = categories(CARDS);
        assert_eq!(cats, vec!["Overview", "Locations", "Items", "Preparation", "Impact", "Future"]);

        let dup = [CARDS[1], CARDS[0], CARDS[1]];
        assert_eq!(categories(&dup), vec!["Locations", "Overview"]);
    }

    #[test]
    fn test_tip_preview_is_short() {
        for c in CARDS {
            assert_eq!(c.tip_preview().len(), TIP_PREVIEW);
            assert_eq!(c.tip_preview()[0], c.tips[0]);
        }
    }

    #[test]
    fn test_card_lookup() {
        assert_eq!(card("preparation").map(|c| c.emoji), Some("🔧"));
        assert!(card("missing").is_none());
    }

    #[test]
    fn test_quiz_bank_answers_in_range() {
        for q in quiz_bank() {
            assert!(q.correct < q.options.len(), "bad answer index for {:?}", q.prompt);
        }
    }
}
