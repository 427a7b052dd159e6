use super::deck::IdiomDeck;
use super::types::{AnswerRecord, IdiomCard, Level};
use crate::games::SessionRng;

pub struct GuessReport {
    pub correct: bool,
    pub answer: String,
    pub level_complete: bool,
}

/// One run through a level's cards in shuffled order. The history doubles
/// as the cursor: the next card is always `cards[history.len()]`.
#[derive(Debug)]
pub struct IdiomsGameState {
    level: Level,
    cards: Vec<IdiomCard>,
    score: u32,
    history: Vec<AnswerRecord>,
}

impl IdiomsGameState {
    pub fn new(deck: &IdiomDeck, level: Level, rng: &mut SessionRng) -> Result<Self, String> {
        let mut cards = deck.cards(level).to_vec();
        if cards.is_empty() {
            return Err(format!("No idioms available for level {}", level.name()));
        }
        rng.shuffle(&mut cards);

        Ok(Self {
            level,
            cards,
            score: 0,
            history: Vec::new(),
        })
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn answered(&self) -> usize {
        self.history.len()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.history.len()
    }

    pub fn progress(&self) -> f32 {
        self.history.len() as f32 / self.cards.len() as f32
    }

    pub fn is_complete(&self) -> bool {
        self.history.len() == self.cards.len()
    }

    pub fn current_card(&self) -> Option<&IdiomCard> {
        self.cards.get(self.history.len())
    }

    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    /// Checks the guess against the current card (case-insensitive, outer
    /// whitespace ignored), records the result and advances to the next
    /// card.
    pub fn check_answer(&mut self, guess: &str) -> Result<GuessReport, String> {
        let card = match self.current_card() {
            Some(card) => card,
            None => return Err("Level is already complete".to_string()),
        };

        let correct = normalize(guess) == normalize(&card.answer);
        let answer = card.answer.clone();

        if correct {
            self.score += 1;
        }
        self.history.push(AnswerRecord {
            answer: answer.clone(),
            correct,
        });

        Ok(GuessReport {
            correct,
            answer,
            level_complete: self.is_complete(),
        })
    }

    /// Reshuffles the same cards and clears score and history.
    pub fn restart(&mut self, rng: &mut SessionRng) {
        rng.shuffle(&mut self.cards);
        self.score = 0;
        self.history.clear();
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
