use super::action::Direction;
use super::grid::{Grid, Position};
use super::state::CollisionType;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given head position, heading and length.
    /// The body trails behind the head, opposite to `direction`.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let back = direction.reverse();
        let mut body = Vec::with_capacity(length + 1);
        let mut segment = head;

        for _ in 0..length {
            body.push(segment);
            segment = segment.moved_in_direction(back);
        }

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Option<Position> {
        self.body.first().copied()
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        self.body.get(1..).unwrap_or(&[])
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Change heading unless the new one would reverse the snake.
    /// Returns whether the turn was accepted.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Prepend a new head one step along the current heading.
    ///
    /// The tail is kept; [`Snake::trim_tail`] decides whether it goes.
    pub fn advance_head(&mut self) -> Option<Position> {
        let new_head = self.head()?.moved_in_direction(self.direction);
        self.body.insert(0, new_head);
        Some(new_head)
    }

    /// Wall or self collision of the (moved, untrimmed) snake's head.
    /// Wall takes precedence.
    pub fn check_collision(&self, grid: &Grid) -> Option<CollisionType> {
        let head = self.head()?;

        if !grid.contains(head) {
            return Some(CollisionType::Wall);
        }

        if self.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Cut the snake at the first segment (head to tail) sitting on a live
    /// cell of `grid`, discarding that segment and everything behind it.
    ///
    /// Returns how many segments were lost.
    pub fn truncate_at_live(&mut self, grid: &Grid) -> usize {
        let before = self.body.len();
        if let Some(index) = self.body.iter().position(|&seg| grid[seg].is_alive()) {
            self.body.truncate(index);
        }
        before - self.body.len()
    }

    /// Consume one tick of pending growth, or drop the tail.
    ///
    /// The head is never dropped here. Returns the remaining growth.
    pub fn trim_tail(&mut self, queued_growth: usize) -> usize {
        if queued_growth > 0 {
            return queued_growth - 1;
        }
        if self.body.len() > 1 {
            self.body.pop();
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Cell;

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Up, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Some(Position::new(5, 5)));
        assert_eq!(snake.body[1], Position::new(6, 5));
        assert_eq!(snake.body[2], Position::new(7, 5));
    }

    #[test]
    fn test_snake_movement() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        // Move without growing
        snake.advance_head();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.trim_tail(0), 0);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Some(Position::new(5, 6)));

        // Move with growing
        snake.advance_head();
        assert_eq!(snake.trim_tail(2), 1);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Some(Position::new(5, 7)));
    }

    #[test]
    fn test_reversal_is_ignored() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let mut snake = Snake::new(Position::new(5, 5), dir, 3);
            assert!(!snake.turn(dir.reverse()));
            assert_eq!(snake.direction, dir);
        }

        let mut snake = Snake::new(Position::new(5, 5), Direction::Up, 3);
        assert!(snake.turn(Direction::Left));
        assert_eq!(snake.direction, Direction::Left);
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(!snake.collides_with_body(Position::new(5, 5))); // head
        assert!(snake.collides_with_body(Position::new(5, 4))); // body
        assert!(!snake.collides_with_body(Position::new(9, 9))); // empty
    }

    #[test]
    fn test_wall_collision() {
        let grid = Grid::new(10);
        let mut snake = Snake::new(Position::new(0, 5), Direction::Up, 3);
        snake.advance_head();
        assert_eq!(snake.check_collision(&grid), Some(CollisionType::Wall));
    }

    #[test]
    fn test_self_collision_counts_untrimmed_tail() {
        let grid = Grid::new(10);
        // Head at (5,5), a 2x2 loop closes onto the tail.
        let mut snake = Snake {
            body: vec![
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(6, 6),
                Position::new(6, 5),
            ],
            direction: Direction::Down,
        };
        snake.advance_head();
        assert_eq!(
            snake.check_collision(&grid),
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_truncate_at_first_live_segment() {
        let mut grid = Grid::new(10);
        let mut snake = Snake::new(Position::new(2, 5), Direction::Up, 6);
        grid.set(Position::new(5, 5), Cell::Alive); // index 3
        grid.set(Position::new(6, 5), Cell::Alive); // index 4

        assert_eq!(snake.truncate_at_live(&grid), 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.body.last(), Some(&Position::new(4, 5)));
    }

    #[test]
    fn test_truncate_at_head_empties_snake() {
        let mut grid = Grid::new(10);
        let mut snake = Snake::new(Position::new(2, 5), Direction::Up, 4);
        grid.set(Position::new(2, 5), Cell::Alive);

        assert_eq!(snake.truncate_at_live(&grid), 4);
        assert!(snake.is_empty());
        assert_eq!(snake.head(), None);
    }

    #[test]
    fn test_no_truncation_without_live_cells() {
        let mut grid = Grid::new(10);
        grid.set(Position::new(2, 5), Cell::Food);
        let mut snake = Snake::new(Position::new(2, 5), Direction::Up, 4);
        assert_eq!(snake.truncate_at_live(&grid), 0);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_trim_never_drops_head() {
        let mut snake = Snake::new(Position::new(2, 5), Direction::Up, 1);
        assert_eq!(snake.trim_tail(0), 0);
        assert_eq!(snake.len(), 1);
    }
}
