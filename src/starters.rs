//! Starter content shown on an empty conversation

use serde::Serialize;

pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "Which sectors should I invest in right now?",
    "How should I split funds between trading and investing?",
    "What allocation suits a moderate risk profile?",
    "How do I manage risk in my portfolio?",
];

/// A short topic summary card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicCard {
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const TOPIC_CARDS: &[TopicCard] = &[
    TopicCard {
        icon: "📈",
        label: "Growth Sectors",
        description: "Tech, Renewables, Digital Infra",
    },
    TopicCard {
        icon: "🛡️",
        label: "Defensive Sectors",
        description: "FMCG, Healthcare, Utilities",
    },
    TopicCard {
        icon: "⚖️",
        label: "Moderate Allocation",
        description: "40-60% Equity / 40-60% Debt",
    },
];

#[derive(Debug, Serialize)]
pub struct Starters {
    pub questions: &'static [&'static str],
    pub topics: &'static [TopicCard],
}

pub fn starters() -> Starters {
    Starters {
        questions: SUGGESTED_QUESTIONS,
        topics: TOPIC_CARDS,
    }
}
