//! Scripted role-play scenarios set around Singapore.

use maya_core::random::{self, RandomSource};
use maya_core::ResponsePair;
use serde::Serialize;

use crate::error::ChatError;
use crate::matcher::PhraseMatcher;

/// Phrase that ends an active scenario.
pub const END_PHRASE: &str = "end roleplay";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub key: &'static str,
    pub title: &'static str,
    pub bot_role: &'static str,
    pub user_role: &'static str,
    pub starter: &'static str,
    pub vocabulary: &'static [&'static str],
    pub replies: &'static [&'static str],
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "kopitiam",
        title: "Di Kopitiam (At Coffee Shop)",
        bot_role: "uncle/auntie kopitiam (kopitiam owner)",
        user_role: "pelanggan (customer)",
        starter: "Selamat datang! Nak makan apa? Chicken rice ada!",
        vocabulary: &[
            "chicken rice", "laksa", "bak chor mee", "kopi", "teh", "milo", "sedap", "berapa",
            "murah",
        ],
        replies: &[
            "Shiok right? Nak tambah apa lagi? Good right? Want to add anything else?",
            "Kopi or teh? Coffee or tea?",
            "Uncle recommend laksa, very sedap! Uncle recommends laksa, very delicious!",
            "Altogether $8.50 lah. Pay cash or card?",
            "Aiyah, must try our bak chor mee next time!",
        ],
    },
    Scenario {
        key: "shopping",
        title: "Shopping di Orchard (Shopping at Orchard)",
        bot_role: "sales assistant",
        user_role: "pembeli (buyer)",
        starter: "Good afternoon! Can I help you? Ada apa yang anda cari?",
        vocabulary: &[
            "beli", "harga", "mahal", "murah", "baju", "kasut", "beg", "credit card", "sale",
        ],
        replies: &[
            "This one very popular, many people buy!",
            "Got discount now, 30% off leh!",
            "Size S, M, L ada. Want to try?",
            "Can pay by card or cash, up to you.",
            "Thank you ah, come again!",
        ],
    },
    Scenario {
        key: "mrt",
        title: "Naik MRT (Taking MRT)",
        bot_role: "orang tempatan (local person)",
        user_role: "pelancong (tourist)",
        starter: "Ya, boleh saya tolong? Nak pergi mana station?",
        vocabulary: &[
            "mrt", "station", "belok", "kiri", "kanan", "dekat", "jauh", "interchange", "exit",
        ],
        replies: &[
            "Take red line to City Hall, then change to green line.",
            "About 20 minutes journey lah, not far.",
            "Exit A, you will see the shopping mall.",
            "Buy EZ-link card, more convenient!",
            "No problem, welcome to Singapore!",
        ],
    },
    Scenario {
        key: "void_deck",
        title: "Di Void Deck HDB (At HDB Void Deck)",
        bot_role: "jiran (neighbor)",
        user_role: "penduduk baru (new resident)",
        starter: "Eh, you baru pindah ke sini? Welcome to our block!",
        vocabulary: &[
            "hdb", "void deck", "jiran", "pindah", "blok", "tingkat", "lift", "welcome", "kampong",
        ],
        replies: &[
            "Wah, which unit? I stay 10th floor.",
            "This block very nice one, got playground downstairs.",
            "Weekend got market nearby, very convenient.",
            "Uncle aunty here all very friendly one!",
            "Any problem just ask lah, we all neighbors.",
        ],
    },
];

pub fn scenarios() -> &'static [Scenario] {
    SCENARIOS
}

pub fn scenario(key: &str) -> Result<&'static Scenario, ChatError> {
    SCENARIOS
        .iter()
        .find(|s| s.key == key)
        .ok_or_else(|| ChatError::UnknownScenario(key.to_string()))
}

pub fn end_reply() -> ResponsePair {
    ResponsePair::new("Bagus! Role-play tamat.", "Good! Role-play finished.")
}

/// What one line of role-play input produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleplayTurn {
    Reply(ResponsePair),
    Ended(ResponsePair),
}

/// Turn handler for one scenario.
#[derive(Debug, Clone)]
pub struct RoleplaySession {
    scenario: &'static Scenario,
    end: PhraseMatcher,
}

impl RoleplaySession {
    pub fn start(key: &str) -> Result<Self, ChatError> {
        Ok(Self {
            scenario: scenario(key)?,
            end: PhraseMatcher::new(&[END_PHRASE]),
        })
    }

    pub fn scenario(&self) -> &'static Scenario {
        self.scenario
    }

    /// Opening line of the scenario. Scenario lines are code-switched, so the
    /// translation is the native text.
    pub fn opening(&self) -> ResponsePair {
        ResponsePair::new(self.scenario.starter, self.scenario.starter)
    }

    pub fn reply(&self, text: &str, rng: &mut dyn RandomSource) -> Result<RoleplayTurn, ChatError> {
        if self.end.is_match(text) {
            return Ok(RoleplayTurn::Ended(end_reply()));
        }
        let line = random::choose(rng, self.scenario.replies)
            .ok_or_else(|| ChatError::EmptyPool(format!("roleplay {}", self.scenario.key)))?;
        Ok(RoleplayTurn::Reply(ResponsePair::new(*line, *line)))
    }
}
