use super::types::Mark;

pub const BOARD_CELLS: usize = 9;

/// 3x3 grid stored row-major, cells indexed 0-8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_CELLS],
        }
    }

    pub fn from_cells(cells: [Mark; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    let mut moves = Vec::new();
    for (index, &cell) in board.cells().iter().enumerate() {
        if cell == Mark::Empty {
            moves.push(index);
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_nine_moves() {
        let board = Board::new();

        assert_eq!(get_available_moves(&board), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_available_moves_skip_occupied_cells_in_order() {
        let mut board = Board::new();
        board.set(4, Mark::X);
        board.set(0, Mark::O);
        board.set(8, Mark::X);

        assert_eq!(get_available_moves(&board), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            Mark::X, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
            Mark::O, Mark::X, Mark::X,
        ]);

        assert!(board.is_full());
        assert!(get_available_moves(&board).is_empty());
    }

    #[test]
    fn test_set_and_clear_cell() {
        let mut board = Board::new();
        board.set(3, Mark::O);
        assert_eq!(board.get(3), Mark::O);

        board.set(3, Mark::Empty);
        assert_eq!(board, Board::new());
    }
}
