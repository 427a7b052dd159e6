use engine::games::SessionRng;
use engine::games::tictactoe::{Difficulty, GameStatus, Mark, TicTacToeGameState};
use engine::log;

use crate::config::ClientConfig;
use crate::prompt;

pub fn run(config: &ClientConfig, rng: &mut SessionRng) -> Result<(), String> {
    let mut state = TicTacToeGameState::new(config.human_mark, config.difficulty, rng)?;
    log!(
        "Tic-tac-toe started: human plays {}, difficulty {}",
        state.human_mark.symbol(),
        state.difficulty.name()
    );

    println!();
    println!("Cells are numbered 1-9, left to right, top to bottom.");
    println!("Commands: n = new game, s = switch sides, d = toggle difficulty, b = back.");

    loop {
        print_board(&state);
        print_status(&state);

        let input = prompt("Your move: ")?;
        match input.as_str() {
            "b" => break,
            "n" => {
                state.reset(rng);
                continue;
            }
            "s" => {
                state.switch_sides(rng);
                println!("You now play {}.", state.human_mark.symbol());
                continue;
            }
            "d" => {
                state.toggle_difficulty(rng);
                println!("Difficulty is now {}.", state.difficulty.name());
                continue;
            }
            _ => {}
        }

        let cell: usize = match input.parse::<usize>() {
            Ok(n) if (1..=9).contains(&n) => n - 1,
            _ => {
                println!("Enter a cell number 1-9 or a command.");
                continue;
            }
        };

        if let Err(message) = state.play_human_move(cell, rng) {
            println!("{}", message);
        }
    }

    log!(
        "Tic-tac-toe finished: you {} / AI {} / draws {}",
        state.scoreboard.human_wins,
        state.scoreboard.ai_wins,
        state.scoreboard.draws
    );
    Ok(())
}

fn print_board(state: &TicTacToeGameState) {
    println!();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                match state.board.get(index) {
                    Mark::Empty => (index + 1).to_string(),
                    mark => mark.symbol().to_string(),
                }
            })
            .collect();
        println!(" {} | {} | {}", cells[0], cells[1], cells[2]);
        if row < 2 {
            println!("---+---+---");
        }
    }
    println!();
}

fn print_status(state: &TicTacToeGameState) {
    match state.status {
        GameStatus::InProgress => {
            let difficulty_hint = match state.difficulty {
                Difficulty::Easy => "easy",
                Difficulty::Hard => "hard, perfect play",
            };
            println!(
                "You are {} (AI: {}). Scoreboard: you {} / AI {} / draws {}.",
                state.human_mark.symbol(),
                difficulty_hint,
                state.scoreboard.human_wins,
                state.scoreboard.ai_wins,
                state.scoreboard.draws
            );
        }
        GameStatus::Draw => println!("It's a draw! (n = play again)"),
        _ => match state.status.winner() {
            Some(winner) if winner == state.human_mark => println!("You win! (n = play again)"),
            _ => println!("AI wins! (n = play again)"),
        },
    }
}
