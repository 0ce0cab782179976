/// Heading the snake can move in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.reverse() == other
    }

    /// The heading pointing the other way
    pub fn reverse(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the delta (d_row, d_col) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Input for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Turn to a new heading (ignored if it is a reversal)
    Move(Direction),
    /// Keep the current heading
    Continue,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

impl From<Option<Direction>> for Action {
    fn from(direction: Option<Direction>) -> Self {
        direction.map(Action::Move).unwrap_or(Action::Continue)
    }
}
