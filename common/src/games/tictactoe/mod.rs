mod board;
mod bot_controller;
mod error;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotDecision, BotInput, MoveRule, calculate_move, calculate_random_move, calculate_smart_move,
    decide,
};
pub use error::{MoveError, ParseDifficultyError};
pub use game_state::{Scoreboard, TicTacToeGame, evaluate_outcome};
pub use settings::{DEFAULT_BOT_DELAY_MS, MAX_BOT_DELAY_MS, TicTacToeSettings};
pub use types::{
    BOARD_SIZE, CENTER, CORNERS, Difficulty, GameOutcome, Mark, Player, SIDES, TurnState,
    WIN_PATTERNS, WinPattern,
};
pub use win_detector::{check_win, find_winning_pattern, is_winner};
