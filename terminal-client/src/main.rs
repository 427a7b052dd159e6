mod config;
mod idioms_runner;
mod tictactoe_runner;

use clap::Parser;
use engine::games::SessionRng;
use engine::games::idioms::IdiomDeck;
use engine::log;
use engine::logger;

use config::{ClientConfig, DEFAULT_CONFIG_FILE, get_config_manager};

#[derive(Parser)]
#[command(name = "classroom_games")]
struct Args {
    /// Path to the YAML client config; defaults are used when absent.
    #[arg(long)]
    config: Option<String>,

    /// Fixed RNG seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_FILE);
    let config: ClientConfig = get_config_manager(config_path).get_config()?;

    let deck = match &config.deck_path {
        Some(path) => IdiomDeck::from_yaml_file(path)?,
        None => IdiomDeck::default(),
    };

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session started with seed {}", rng.seed());

    loop {
        println!();
        println!("=== Classroom Games ===");
        println!("  [1] Tic-Tac-Toe");
        println!("  [2] Idiom Flashcards");
        println!("  [q] Quit");

        match prompt("Pick a game: ")?.as_str() {
            "1" => tictactoe_runner::run(&config, &mut rng)?,
            "2" => idioms_runner::run(&deck, &mut rng)?,
            "q" => break,
            other => println!("Unknown choice: {}", other),
        }
    }

    log!("Session finished");
    Ok(())
}

pub fn prompt(message: &str) -> Result<String, String> {
    use std::io::Write;

    print!("{}", message);
    std::io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {}", e))?;

    let mut line = String::new();
    let bytes = std::io::stdin()
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    if bytes == 0 {
        return Err("Input closed".to_string());
    }
    Ok(line.trim().to_string())
}
