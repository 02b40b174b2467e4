use std::time::Duration;

use tictactoe_common::games::tictactoe::{Difficulty, GameOutcome, TicTacToeGame};
use tictactoe_common::{log, log_debug};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{Command, HELP_TEXT, parse_command};
use crate::config::ClientConfigManager;
use crate::render::{render_board, render_scores};

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Drives one game session from stdin. Illegal input is reported and
/// otherwise ignored; only `quit` or end of input stops the loop.
pub struct GameRunner {
    game: TicTacToeGame,
    bot_delay: Duration,
    config_manager: Option<ClientConfigManager>,
}

impl GameRunner {
    pub fn new(
        game: TicTacToeGame,
        bot_delay: Duration,
        config_manager: Option<ClientConfigManager>,
    ) -> Self {
        Self {
            game,
            bot_delay,
            config_manager,
        }
    }

    pub async fn run(mut self) -> std::io::Result<()> {
        println!("Tic-tac-toe, difficulty {}. Type 'help' for commands.", self.game.difficulty());
        self.show();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(message) => {
                    println!("{}", message);
                    continue;
                }
            };
            if self.handle(command).await == Flow::Quit {
                break;
            }
        }

        println!("{}", render_scores(&self.game.scores()));
        Ok(())
    }

    pub async fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Place(index) => self.play_cell(index).await,
            Command::Restart => {
                self.game.restart();
                self.show();
            }
            Command::SetDifficulty(difficulty) => self.change_difficulty(difficulty),
            Command::Scores => println!("{}", render_scores(&self.game.scores())),
            Command::Help => println!("{}", HELP_TEXT),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    async fn play_cell(&mut self, index: usize) {
        match self.game.make_human_move(index) {
            Ok(GameOutcome::Ongoing) => {}
            Ok(_) => {
                self.show();
                return;
            }
            Err(e) => {
                log_debug!("Ignored move at cell {}: {}", index, e);
                println!("{}", e);
                return;
            }
        }

        self.show();
        if !self.bot_delay.is_zero() {
            tokio::time::sleep(self.bot_delay).await;
        }

        match self.game.request_bot_move() {
            Ok((bot_index, _)) => println!("Bot took cell {}", bot_index),
            Err(e) => log!("Bot could not move: {}", e),
        }
        self.show();
    }

    fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.game.set_difficulty(difficulty);
        println!("Difficulty: {}", difficulty);

        if let Some(manager) = &self.config_manager
            && let Err(e) = manager.update_config(|config| config.tictactoe.difficulty = difficulty)
        {
            log!("Failed to save difficulty: {}", e);
        }
        self.show();
    }

    fn show(&self) {
        println!();
        println!("{}", render_board(self.game.cells(), self.game.highlighted_pattern()));
        println!("{}", self.game.status_message());
        if self.game.outcome().is_terminal() {
            println!("{}", render_scores(&self.game.scores()));
            println!("Type 'r' to play again.");
        }
    }

    #[cfg(test)]
    fn game(&self) -> &TicTacToeGame {
        &self.game
    }
}
