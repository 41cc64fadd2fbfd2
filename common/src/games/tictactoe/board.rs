use super::types::Mark;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Nine cells in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Panics if `index` is outside the board.
    pub fn get(&self, index: usize) -> Mark {
        assert_index(index);
        self.cells[index]
    }

    /// Panics if `index` is outside the board.
    pub fn set(&mut self, index: usize, mark: Mark) {
        assert_index(index);
        self.cells[index] = mark;
    }

    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index) == Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn available_moves(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&index| self.cells[index] == Mark::Empty).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn assert_index(index: usize) {
    assert!(
        index < CELL_COUNT,
        "cell index {} out of range 0..{}",
        index,
        CELL_COUNT
    );
}
