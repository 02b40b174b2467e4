use tictactoe_common::games::tictactoe::{BOARD_SIZE, Mark, Scoreboard, WinPattern};

/// Text grid; free cells show their index, winning cells are bracketed.
pub fn render_board(cells: &[Mark; BOARD_SIZE], highlight: Option<WinPattern>) -> String {
    let rows: Vec<String> = cells
        .chunks(3)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, &mark)| {
                    let index = row * 3 + col;
                    let symbol = match mark {
                        Mark::Empty => char::from_digit(index as u32, 10).unwrap_or('?'),
                        mark => mark.symbol(),
                    };
                    if highlight.is_some_and(|pattern| pattern.contains(&index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn render_scores(scores: &Scoreboard) -> String {
    format!(
        "You: {}  Bot: {}  Draws: {}",
        scores.player, scores.bot, scores.draws
    )
}
