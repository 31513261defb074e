use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIZE, CELL_COUNT, Mark};

pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// A 3x3 board snapshot in row-major order. `Board` is `Copy`, so a
/// hypothetical move is a fresh value and never touches the original.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Copy of this board with `mark` written at `index`.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = Some(mark);
        next
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_none())
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.is_empty_cell(index)
}

impl FromStr for Board {
    type Err = String;

    /// Accepts nine cell characters (`X`, `O`, and `_`, `.` or `-` for
    /// empty); whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; CELL_COUNT];
        let mut count = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            if count == CELL_COUNT {
                return Err(format!("Board has more than {} cells", CELL_COUNT));
            }
            cells[count] = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '_' | '.' | '-' => None,
                other => return Err(format!("Invalid cell character '{}'", other)),
            };
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(format!("Board must have {} cells, got {}", CELL_COUNT, count));
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = cell.map(|mark| mark.symbol()).unwrap_or('_');
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_ignores_separators() {
        let board: Board = "XO_ | _X_ | __O".parse().unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(1), Some(Mark::O));
        assert_eq!(board.get(2), None);
        assert_eq!(board.get(4), Some(Mark::X));
        assert_eq!(board.get(8), Some(Mark::O));
    }

    #[test]
    fn test_parse_board_rejects_wrong_length() {
        assert!("XO_".parse::<Board>().is_err());
        assert!("XO_XO_XO_X".parse::<Board>().is_err());
        assert!("XO_XO_XOZ".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let board: Board = "XO_ _X_ __O".parse().unwrap();
        assert_eq!(board.to_string(), "XO_\n_X_\n__O");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_available_moves_are_ascending() {
        let board: Board = "X_O _X_ O__".parse().unwrap();
        assert_eq!(get_available_moves(&board), vec![1, 3, 5, 7, 8]);
        assert_eq!(board.empty_count(), 5);
        assert!(!board.is_full());
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(CENTER, Mark::O);
        assert_eq!(board.get(CENTER), None);
        assert_eq!(next.get(CENTER), Some(Mark::O));
    }

    #[test]
    fn test_is_valid_move() {
        let board: Board = "X________".parse().unwrap();
        assert!(!is_valid_move(&board, 0));
        assert!(is_valid_move(&board, 1));
        assert!(!is_valid_move(&board, 9));
    }
}
