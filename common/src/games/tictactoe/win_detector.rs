use super::types::{BOARD_SIZE, Mark, WIN_PATTERNS, WinPattern};

pub fn is_winner(cells: &[Mark; BOARD_SIZE], mark: Mark) -> bool {
    find_winning_pattern(cells, mark).is_some()
}

/// First pattern, in [`WIN_PATTERNS`] order, fully covered by `mark`.
pub fn find_winning_pattern(cells: &[Mark; BOARD_SIZE], mark: Mark) -> Option<WinPattern> {
    if mark == Mark::Empty {
        return None;
    }
    WIN_PATTERNS
        .into_iter()
        .find(|pattern| pattern.iter().all(|&index| cells[index] == mark))
}

/// X is checked before O.
pub fn check_win(cells: &[Mark; BOARD_SIZE]) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| is_winner(cells, mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_detects_every_pattern() {
        for pattern in WIN_PATTERNS {
            let mut cells = [E; BOARD_SIZE];
            for index in pattern {
                cells[index] = O;
            }
            assert!(is_winner(&cells, O), "pattern {:?}", pattern);
            assert!(!is_winner(&cells, X));
            assert_eq!(find_winning_pattern(&cells, O), Some(pattern));
        }
    }

    #[test]
    fn test_empty_mark_never_wins() {
        let cells = [E; BOARD_SIZE];
        assert!(!is_winner(&cells, E));
        assert_eq!(check_win(&cells), None);
    }

    #[test]
    fn test_first_pattern_in_order_is_reported() {
        // Top row and left column both complete.
        let cells = [X, X, X, X, O, O, X, O, O];
        assert_eq!(find_winning_pattern(&cells, X), Some([0, 1, 2]));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let cells = [X, X, E, O, O, E, E, E, E];
        assert_eq!(check_win(&cells), None);
    }

    #[test]
    fn test_x_is_reported_before_o() {
        let cells = [X, X, X, O, O, O, E, E, E];
        assert_eq!(check_win(&cells), Some(X));
    }
}
