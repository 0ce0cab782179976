use std::ops::{Index, IndexMut};

use super::action::Direction;

/// A position on the board, `row` first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by delta
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        self.moved_by(d_row, d_col)
    }
}

/// What occupies a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
    SnakeHead,
    SnakeBody,
    Food,
}

impl Cell {
    pub fn is_alive(&self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub fn is_snake(&self) -> bool {
        matches!(self, Cell::SnakeHead | Cell::SnakeBody)
    }
}

/// Square board of cells stored row-major.
///
/// Indexing with a `Position` outside the board panics: an out-of-range
/// position means movement or collision logic upstream is broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead board of `size` x `size`
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells on the board
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        let n = self.size as i32;
        pos.row >= 0 && pos.row < n && pos.col >= 0 && pos.col < n
    }

    /// Checked access, `None` outside the board
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos).then(|| self.cells[self.offset(pos)])
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self[pos] = cell;
    }

    /// Row-major offset of `pos`
    pub fn offset(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos:?} outside {n}x{n} grid",
            n = self.size
        );
        pos.row as usize * self.size + pos.col as usize
    }

    /// Inverse of [`Grid::offset`]
    pub fn position_at(&self, offset: usize) -> Position {
        Position::new((offset / self.size) as i32, (offset % self.size) as i32)
    }

    /// Cell at a row-major offset
    pub fn cell_at(&self, offset: usize) -> Cell {
        self.cells[offset]
    }

    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// All (position, cell) pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (self.position_at(i), cell))
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[self.offset(pos)]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Cell {
        let offset = self.offset(pos);
        &mut self.cells[offset]
    }
}
