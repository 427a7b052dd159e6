use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Basic,
    Difficult,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Basic, Level::Difficult, Level::Hard];

    pub fn name(&self) -> &'static str {
        match self {
            Level::Basic => "Basic",
            Level::Difficult => "Difficult",
            Level::Hard => "Hard",
        }
    }
}

/// One flashcard: the gapped phrase shown to the player, the missing words
/// they must supply, and a picture hint for the flipped side of the card.
/// The image is only a path; whether and how it gets rendered is up to the
/// front end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdiomCard {
    pub phrase: String,
    pub answer: String,
    pub image: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRecord {
    pub answer: String,
    pub correct: bool,
}
