use crate::games::{MoveRng, SessionRng};
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::MoveError;
use super::settings::TicTacToeSettings;
use super::types::{BOARD_SIZE, Difficulty, GameOutcome, Mark, Player, TurnState, WinPattern};
use super::win_detector::check_win;

/// Win/draw tally kept across restarts. One counter moves per finished game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player: u32,
    pub bot: u32,
    pub draws: u32,
}

impl Scoreboard {
    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::HumanWin => self.player += 1,
            GameOutcome::BotWin => self.bot += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Ongoing => {}
        }
    }
}

/// Human win, then bot win, then draw.
pub fn evaluate_outcome(board: &Board) -> GameOutcome {
    match check_win(board.cells()) {
        Some(mark) if mark == Player::Human.mark() => GameOutcome::HumanWin,
        Some(mark) if mark == Player::Bot.mark() => GameOutcome::BotWin,
        _ if board.is_full() => GameOutcome::Draw,
        _ => GameOutcome::Ongoing,
    }
}

/// One human-versus-bot session.
///
/// The human (X) always opens. After every accepted human move that leaves
/// the game open, the host calls [`request_bot_move`](Self::request_bot_move);
/// any pause before doing so is up to the host. Refused moves return an
/// error and leave the session exactly as it was.
pub struct TicTacToeGame<R: MoveRng = SessionRng> {
    board: Board,
    state: TurnState,
    difficulty: Difficulty,
    scores: Scoreboard,
    last_move: Option<usize>,
    rng: R,
}

impl TicTacToeGame<SessionRng> {
    pub fn from_settings(settings: &TicTacToeSettings) -> Self {
        let rng = settings
            .seed
            .map(SessionRng::new)
            .unwrap_or_else(SessionRng::from_random);
        log!(
            "New game: difficulty {}, seed {}",
            settings.difficulty,
            rng.seed()
        );
        Self::new(settings.difficulty, rng)
    }
}

impl<R: MoveRng> TicTacToeGame<R> {
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        Self {
            board: Board::new(),
            state: TurnState::AwaitingHuman,
            difficulty,
            scores: Scoreboard::default(),
            last_move: None,
            rng,
        }
    }

    pub fn make_human_move(&mut self, index: usize) -> Result<GameOutcome, MoveError> {
        if self.state != TurnState::AwaitingHuman {
            return Err(MoveError::InvalidTurn);
        }
        self.board.place(index, Player::Human.mark())?;
        Ok(self.finish_turn(Player::Human, index))
    }

    pub fn request_bot_move(&mut self) -> Result<(usize, GameOutcome), MoveError> {
        if self.state != TurnState::AwaitingBot {
            return Err(MoveError::InvalidTurn);
        }
        let input = BotInput::for_bot(self.board);
        let index = calculate_move(self.difficulty, &input, &mut self.rng)
            .ok_or(MoveError::NoMovesLeft)?;
        self.board.place(index, Player::Bot.mark())?;
        Ok((index, self.finish_turn(Player::Bot, index)))
    }

    fn finish_turn(&mut self, mover: Player, index: usize) -> GameOutcome {
        self.last_move = Some(index);
        let outcome = evaluate_outcome(&self.board);

        self.state = if outcome.is_terminal() {
            self.scores.record(outcome);
            log!("Game over: {:?} after {:?} took cell {}", outcome, mover, index);
            TurnState::Finished(outcome)
        } else {
            match mover.opponent() {
                Player::Human => TurnState::AwaitingHuman,
                Player::Bot => TurnState::AwaitingBot,
            }
        };
        outcome
    }

    /// Clears the board; difficulty and scores are kept.
    pub fn restart(&mut self) {
        self.board.reset();
        self.state = TurnState::AwaitingHuman;
        self.last_move = None;
    }

    /// Changing difficulty always starts a fresh game, even mid-play.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        log!("Difficulty set to {}", difficulty);
        self.difficulty = difficulty;
        self.restart();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        self.board.cells()
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.state {
            TurnState::Finished(outcome) => outcome,
            TurnState::AwaitingHuman | TurnState::AwaitingBot => GameOutcome::Ongoing,
        }
    }

    pub fn current_player(&self) -> Option<Player> {
        self.state.to_move()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_pattern(&self, mark: Mark) -> Option<WinPattern> {
        self.board.winning_pattern(mark)
    }

    /// Cells to highlight once someone has won.
    pub fn highlighted_pattern(&self) -> Option<WinPattern> {
        self.outcome()
            .winner()
            .and_then(|winner| self.winning_pattern(winner.mark()))
    }

    pub fn status_message(&self) -> &'static str {
        match self.state {
            TurnState::AwaitingHuman => "Your move (X)",
            TurnState::AwaitingBot => "Bot is thinking...",
            TurnState::Finished(GameOutcome::HumanWin) => "You won!",
            TurnState::Finished(GameOutcome::BotWin) => "Bot won!",
            TurnState::Finished(GameOutcome::Draw) => "Draw!",
            // Finished always carries a terminal outcome.
            TurnState::Finished(_) => "Game over",
        }
    }
}
