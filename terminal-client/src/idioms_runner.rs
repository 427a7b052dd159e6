use engine::games::SessionRng;
use engine::games::idioms::{IdiomDeck, IdiomsGameState, Level};
use engine::log;

use crate::prompt;

pub fn run(deck: &IdiomDeck, rng: &mut SessionRng) -> Result<(), String> {
    let level = match pick_level()? {
        Some(level) => level,
        None => return Ok(()),
    };

    let mut game = IdiomsGameState::new(deck, level, rng)?;
    log!("Idiom flashcards started at level {}", level.name());

    println!();
    println!("Fill in the missing words. Commands: f = flip card for the image hint, b = back.");

    loop {
        while let Some(card) = game.current_card() {
            println!();
            println!(
                "Card {}/{} | Score: {}",
                game.answered() + 1,
                game.total(),
                game.score()
            );
            println!("  {}", card.phrase);

            let guess = prompt("Your guess: ")?;
            match guess.as_str() {
                "b" => return Ok(()),
                "f" => {
                    show_image_hint(card.image.as_path());
                    continue;
                }
                _ => {}
            }

            let report = game.check_answer(&guess)?;
            if report.correct {
                println!("Correct! +1 point");
            } else {
                println!("Incorrect. The answer is: {}", report.answer);
            }
        }

        println!();
        println!("Level complete! Score: {}/{}", game.score(), game.total());
        println!("Recap:");
        for record in game.history() {
            let result = if record.correct { "correct" } else { "incorrect" };
            println!("  {} - {}", record.answer, result);
        }
        log!(
            "Idiom flashcards finished: {}/{} at level {}",
            game.score(),
            game.total(),
            level.name()
        );

        if prompt("Play this level again? (y/n): ")? != "y" {
            return Ok(());
        }
        game.restart(rng);
    }
}

fn pick_level() -> Result<Option<Level>, String> {
    println!();
    println!("Choose a level:");
    for (i, level) in Level::ALL.iter().enumerate() {
        println!("  [{}] {}", i + 1, level.name());
    }
    println!("  [b] Back");

    loop {
        match prompt("Level: ")?.as_str() {
            "1" => return Ok(Some(Level::Basic)),
            "2" => return Ok(Some(Level::Difficult)),
            "3" => return Ok(Some(Level::Hard)),
            "b" => return Ok(None),
            other => println!("Unknown choice: {}", other),
        }
    }
}

fn show_image_hint(path: &std::path::Path) {
    if path.exists() {
        println!("  [image hint: {}]", path.display());
    } else {
        println!("  [image not found]");
    }
}
