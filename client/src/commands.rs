use tictactoe_common::games::tictactoe::{BOARD_SIZE, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Restart,
    SetDifficulty(Difficulty),
    Scores,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  0-8                 mark a cell
  r, restart          start a new game
  d, difficulty LEVEL switch to easy, medium or hard (starts a new game)
  s, scores           show the score
  h, help             show this help
  q, quit             leave";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty command".to_string());
    };

    if let Ok(index) = head.parse::<usize>() {
        if index >= BOARD_SIZE {
            return Err(format!("Cell must be between 0 and {}", BOARD_SIZE - 1));
        }
        return Ok(Command::Place(index));
    }

    match head.to_ascii_lowercase().as_str() {
        "r" | "restart" => Ok(Command::Restart),
        "s" | "scores" => Ok(Command::Scores),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "d" | "difficulty" => {
            let level = parts
                .next()
                .ok_or_else(|| "Specify a difficulty: easy, medium or hard".to_string())?;
            level
                .parse::<Difficulty>()
                .map(Command::SetDifficulty)
                .map_err(|e| e.to_string())
        }
        other => Err(format!("Unknown command '{}', type 'help'", other)),
    }
}
