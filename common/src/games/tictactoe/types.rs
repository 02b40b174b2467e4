use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseDifficultyError;

pub const BOARD_SIZE: usize = 9;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];
pub const SIDES: [usize; 4] = [1, 3, 5, 7];

/// Three cell indices that win when they all carry the same mark.
pub type WinPattern = [usize; 3];

/// Rows, then columns, then diagonals. Highlighting relies on this order.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The human always plays X and moves first; the bot always plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Bot,
}

impl Player {
    pub fn mark(self) -> Mark {
        match self {
            Player::Human => Mark::X,
            Player::Bot => Mark::O,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Bot,
            Player::Bot => Player::Human,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn key(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|level| level.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Ongoing,
    HumanWin,
    BotWin,
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::Ongoing
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::HumanWin => Some(Player::Human),
            GameOutcome::BotWin => Some(Player::Bot),
            GameOutcome::Ongoing | GameOutcome::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingHuman,
    AwaitingBot,
    Finished(GameOutcome),
}

impl TurnState {
    pub fn to_move(self) -> Option<Player> {
        match self {
            TurnState::AwaitingHuman => Some(Player::Human),
            TurnState::AwaitingBot => Some(Player::Bot),
            TurnState::Finished(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_map_to_fixed_marks() {
        assert_eq!(Player::Human.mark(), Mark::X);
        assert_eq!(Player::Bot.mark(), Mark::O);
        assert_eq!(Player::Human.opponent(), Player::Bot);
    }

    #[test]
    fn test_empty_mark_has_no_opponent() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_difficulty_parses_case_insensitively() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" Hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!("MEDIUM".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_default_difficulty_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_win_patterns_are_rows_columns_diagonals() {
        assert_eq!(WIN_PATTERNS[0], [0, 1, 2]);
        assert_eq!(WIN_PATTERNS[3], [0, 3, 6]);
        assert_eq!(WIN_PATTERNS[7], [2, 4, 6]);
    }

    #[test]
    fn test_only_ongoing_is_not_terminal() {
        assert!(!GameOutcome::Ongoing.is_terminal());
        assert!(GameOutcome::Draw.is_terminal());
        assert_eq!(GameOutcome::BotWin.winner(), Some(Player::Bot));
        assert_eq!(GameOutcome::Draw.winner(), None);
    }
}
