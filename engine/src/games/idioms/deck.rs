use super::types::{IdiomCard, Level};
use crate::config::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Card lists per difficulty level. Ships with a built-in deck and can be
/// replaced wholesale from a YAML file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdiomDeck {
    pub basic: Vec<IdiomCard>,
    pub difficult: Vec<IdiomCard>,
    pub hard: Vec<IdiomCard>,
}

impl IdiomDeck {
    pub fn cards(&self, level: Level) -> &[IdiomCard] {
        match level {
            Level::Basic => &self.basic,
            Level::Difficult => &self.difficult,
            Level::Hard => &self.hard,
        }
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read deck file {}: {}", path.display(), e))?;
        let deck: IdiomDeck = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse deck file {}: {}", path.display(), e))?;
        deck.validate()?;
        Ok(deck)
    }
}

impl Validate for IdiomDeck {
    fn validate(&self) -> Result<(), String> {
        for level in Level::ALL {
            let cards = self.cards(level);
            if cards.is_empty() {
                return Err(format!("Deck has no cards for level {}", level.name()));
            }
            for card in cards {
                if card.phrase.trim().is_empty() {
                    return Err(format!("Empty phrase in level {}", level.name()));
                }
                if card.answer.trim().is_empty() {
                    return Err(format!(
                        "Empty answer for phrase \"{}\" in level {}",
                        card.phrase,
                        level.name()
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for IdiomDeck {
    fn default() -> Self {
        Self {
            basic: vec![
                card("It's raining ___", "cats and dogs", "images/cats_and_dogs.jpg"),
                card("Break the ___", "ice", "images/ice.jpg"),
                card("Piece of ___", "cake", "images/cake.jpg"),
                card("Let the ___ out of the bag", "cat", "images/cat.jpg"),
                card("Hit the ___", "sack", "images/bed.jpg"),
            ],
            difficult: vec![
                card("Bite the ___", "bullet", "images/bullet.jpg"),
                card("Burn the ___", "midnight oil", "images/candle.jpg"),
                card("Cry over spilled ___", "milk", "images/milk.jpg"),
                card("A blessing in ___", "disguise", "images/mask.jpg"),
                card("Hit the nail on the ___", "head", "images/hammer.jpg"),
            ],
            hard: vec![
                card("Kick the ___", "bucket", "images/bucket.jpg"),
                card("Burn your bridges ___", "behind you", "images/fire.jpg"),
                card("The ball is in your ___", "court", "images/tennis_court.jpg"),
                card("Barking up the wrong ___", "tree", "images/tree.jpg"),
                card("Add fuel to the ___", "fire", "images/fire.jpg"),
            ],
        }
    }
}

fn card(phrase: &str, answer: &str, image: &str) -> IdiomCard {
    IdiomCard {
        phrase: phrase.to_string(),
        answer: answer.to_string(),
        image: image.into(),
    }
}
