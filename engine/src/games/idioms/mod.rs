mod deck;
mod game_state;
mod types;

pub use deck::IdiomDeck;
pub use game_state::{GuessReport, IdiomsGameState};
pub use types::{AnswerRecord, IdiomCard, Level};
