mod commands;
mod config;
mod render;
mod runner;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tictactoe_common::config::Validate;
use tictactoe_common::games::tictactoe::{Difficulty, TicTacToeGame, TicTacToeSettings};
use tictactoe_common::logger;

use config::get_config_manager;
use runner::GameRunner;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a bot in the terminal")]
struct Args {
    /// easy, medium or hard; overrides the config file
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the bot's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the bot answers, in milliseconds
    #[arg(long)]
    bot_delay_ms: Option<u64>,

    /// Config file path; defaults to a file next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

/// Flags apply to this run only; the config file changes only from in-game commands.
fn resolve_settings(stored: TicTacToeSettings, args: &Args) -> Result<TicTacToeSettings, String> {
    let mut settings = stored;
    if let Some(difficulty) = args.difficulty {
        settings.difficulty = difficulty;
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if let Some(delay) = args.bot_delay_ms {
        settings.bot_delay_ms = delay;
    }
    settings.validate()?;
    Ok(settings)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let config = config_manager.get_config()?;

    let prefix = args.use_log_prefix.then(|| "Client".to_string());
    logger::init_logger(prefix, args.verbose || config.verbose_log);

    let settings = resolve_settings(config.tictactoe, &args)?;

    let game = TicTacToeGame::from_settings(&settings);
    let runner = GameRunner::new(
        game,
        Duration::from_millis(settings.bot_delay_ms),
        Some(config_manager),
    );
    runner.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_flags_{}.yaml", random_number))
    }

    #[test]
    fn test_flags_override_stored_settings() {
        let args = Args::parse_from([
            "tictactoe_client",
            "--difficulty",
            "hard",
            "--seed",
            "9",
            "--bot-delay-ms",
            "0",
        ]);
        let settings = resolve_settings(TicTacToeSettings::default(), &args).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.bot_delay_ms, 0);
    }

    #[test]
    fn test_difficulty_flag_is_not_written_to_config() {
        let path = temp_config_path();
        let manager = get_config_manager(Some(path.clone()));
        manager.set_config(&config::Config::default()).unwrap();

        let args = Args::parse_from(["tictactoe_client", "--difficulty", "easy"]);
        let stored = manager.get_config().unwrap().tictactoe;
        let settings = resolve_settings(stored, &args).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Easy);

        let reloaded = get_config_manager(Some(path.clone())).get_config().unwrap();
        assert_eq!(reloaded.tictactoe.difficulty, Difficulty::Medium);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_invalid_delay_flag_is_rejected() {
        let args = Args::parse_from(["tictactoe_client", "--bot-delay-ms", "60000"]);
        assert!(resolve_settings(TicTacToeSettings::default(), &args).is_err());
    }
}
