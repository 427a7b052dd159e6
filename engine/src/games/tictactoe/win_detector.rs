use super::board::Board;
use super::types::{GameStatus, Mark};

#[rustfmt::skip]
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    [0, 4, 8], [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    for line in WIN_LINES {
        let mark = board.get(line[0]);
        if mark != Mark::Empty && mark == board.get(line[1]) && mark == board.get(line[2]) {
            return Some(mark);
        }
    }
    None
}

pub fn evaluate_outcome(board: &Board) -> GameStatus {
    if let Some(winner) = check_win(board) {
        return match winner {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => unreachable!(),
        };
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_empty_board_is_in_progress() {
        assert_eq!(evaluate_outcome(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_row_win() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            E, E, E,
            X, X, X,
            O, O, E,
        ]);

        assert_eq!(check_win(&board), Some(X));
        assert_eq!(evaluate_outcome(&board), GameStatus::XWon);
    }

    #[test]
    fn test_column_win() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, O, E,
            X, O, E,
            E, O, E,
        ]);

        assert_eq!(evaluate_outcome(&board), GameStatus::OWon);
    }

    #[test]
    fn test_main_diagonal_win() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, O, E,
            O, X, E,
            E, E, X,
        ]);

        assert_eq!(evaluate_outcome(&board), GameStatus::XWon);
    }

    #[test]
    fn test_anti_diagonal_win() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, X, O,
            E, O, E,
            O, E, E,
        ]);

        assert_eq!(evaluate_outcome(&board), GameStatus::OWon);
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, O, X,
            X, O, O,
            O, X, X,
        ]);

        assert_eq!(check_win(&board), None);
        assert_eq!(evaluate_outcome(&board), GameStatus::Draw);
    }

    #[test]
    fn test_partial_board_without_winner_is_in_progress() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, O, E,
            E, X, E,
            E, E, O,
        ]);

        assert_eq!(evaluate_outcome(&board), GameStatus::InProgress);
    }
}
