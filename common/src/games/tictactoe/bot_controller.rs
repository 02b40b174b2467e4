use crate::games::MoveRng;
use crate::log_debug;
use super::board::Board;
use super::types::{CENTER, CORNERS, Difficulty, Mark, Player, SIDES};

pub struct BotInput {
    pub board: Board,
    pub mark: Mark,
}

impl BotInput {
    pub fn for_bot(board: Board) -> Self {
        Self {
            board,
            mark: Player::Bot.mark(),
        }
    }
}

/// Which rule of the heuristic produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRule {
    Win,
    Block,
    Center,
    Corner,
    Side,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotDecision {
    pub index: usize,
    pub rule: MoveRule,
}

/// Picks a cell for the bot, or `None` when the board has no empty cell.
pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut impl MoveRng,
) -> Option<usize> {
    decide(difficulty, input, rng).map(|decision| decision.index)
}

pub fn decide(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut impl MoveRng,
) -> Option<BotDecision> {
    let decision = match difficulty {
        Difficulty::Easy => random_decision(input, rng),
        // One flip per call; the medium bot is not fixed to a style for the game.
        Difficulty::Medium => {
            if rng.coin_flip() {
                smart_decision(input, rng)
            } else {
                random_decision(input, rng)
            }
        }
        Difficulty::Hard => smart_decision(input, rng),
    };

    if let Some(d) = decision {
        log_debug!("{} bot picked cell {} by {:?} rule", difficulty, d.index, d.rule);
    }
    decision
}

pub fn calculate_random_move(input: &BotInput, rng: &mut impl MoveRng) -> Option<usize> {
    random_decision(input, rng).map(|decision| decision.index)
}

pub fn calculate_smart_move(input: &BotInput, rng: &mut impl MoveRng) -> Option<usize> {
    smart_decision(input, rng).map(|decision| decision.index)
}

fn random_decision(input: &BotInput, rng: &mut impl MoveRng) -> Option<BotDecision> {
    let available = input.board.empty_indices();
    pick_from(&available, rng).map(|index| BotDecision {
        index,
        rule: MoveRule::Random,
    })
}

/// Greedy one-ply cascade: win, block, center, corner, side.
fn smart_decision(input: &BotInput, rng: &mut impl MoveRng) -> Option<BotDecision> {
    let board = &input.board;
    let decision = |index, rule| Some(BotDecision { index, rule });

    if let Some(index) = find_winning_move(board, input.mark) {
        return decision(index, MoveRule::Win);
    }

    if let Some(index) = input
        .mark
        .opponent()
        .and_then(|opponent| find_winning_move(board, opponent))
    {
        return decision(index, MoveRule::Block);
    }

    if board.is_empty_at(CENTER) {
        return decision(CENTER, MoveRule::Center);
    }

    if let Some(index) = pick_empty(board, &CORNERS, rng) {
        return decision(index, MoveRule::Corner);
    }

    if let Some(index) = pick_empty(board, &SIDES, rng) {
        return decision(index, MoveRule::Side);
    }

    None
}

/// Lowest empty index where `mark` would complete a line.
fn find_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    board.empty_indices().into_iter().find(|&index| {
        board
            .with_move(index, mark)
            .is_some_and(|next| next.winner_for(mark))
    })
}

fn pick_empty(board: &Board, candidates: &[usize], rng: &mut impl MoveRng) -> Option<usize> {
    let empty: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&index| board.is_empty_at(index))
        .collect();
    pick_from(&empty, rng)
}

fn pick_from(options: &[usize], rng: &mut impl MoveRng) -> Option<usize> {
    if options.is_empty() {
        return None;
    }
    options.get(rng.pick_index(options.len())).copied()
}
