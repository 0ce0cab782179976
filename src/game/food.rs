use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use super::grid::{Cell, Grid, Position};

/// Places and replenishes food on empty cells
#[derive(Debug, Clone)]
pub struct FoodManager {
    rng: StdRng,
}

impl FoodManager {
    /// Seeded for reproducible placement, or from entropy when `seed` is `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Pick a dead cell, starting from a random cell and scanning row-major
    /// with wrap-around. The chosen cell is marked `Food` in `grid`.
    ///
    /// # Panics
    ///
    /// If the board has no dead cell left.
    pub fn spawn(&mut self, grid: &mut Grid) -> Position {
        let capacity = grid.capacity();
        let start = self.rng.gen_range(0..capacity);

        let offset = (0..capacity)
            .map(|step| (start + step) % capacity)
            .find(|&offset| grid.cell_at(offset) == Cell::Dead)
            .unwrap_or_else(|| panic!("no dead cell left for food on a {capacity}-cell grid"));

        let pos = grid.position_at(offset);
        grid[pos] = Cell::Food;
        pos
    }

    /// Mark each food on `grid` where the cell is still dead
    pub fn place(grid: &mut Grid, foods: &[Position]) {
        for &food in foods {
            if grid[food] == Cell::Dead {
                grid[food] = Cell::Food;
            }
        }
    }

    /// Replace consumed food and top the set up to `target`.
    ///
    /// A food counts as consumed when its cell no longer reads `Food`.
    /// Returns the number consumed and the new food set.
    pub fn replenish(
        &mut self,
        grid: &mut Grid,
        foods: &[Position],
        target: usize,
    ) -> (usize, Vec<Position>) {
        let mut consumed = 0;
        let mut new_foods = Vec::with_capacity(target.max(foods.len()));

        for &food in foods {
            if grid[food] == Cell::Food {
                new_foods.push(food);
            } else {
                consumed += 1;
                new_foods.push(self.spawn(grid));
            }
        }

        while new_foods.len() < target {
            new_foods.push(self.spawn(grid));
        }

        trace!(consumed, count = new_foods.len(), "food replenished");
        (consumed, new_foods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_lands_on_dead_cell() {
        let mut manager = FoodManager::new(Some(7));
        let mut grid = Grid::new(10);
        for (pos, _) in grid.clone().iter().filter(|(p, _)| p.row < 9) {
            grid.set(pos, Cell::Alive);
        }

        for _ in 0..10 {
            let food = manager.spawn(&mut grid);
            assert_eq!(food.row, 9);
            assert_eq!(grid[food], Cell::Food);
        }
        assert_eq!(grid.count(Cell::Dead), 0);
    }

    #[test]
    #[should_panic(expected = "no dead cell")]
    fn test_spawn_on_full_grid_panics() {
        let mut manager = FoodManager::new(Some(1));
        let mut grid = Grid::new(2);
        for (pos, _) in grid.clone().iter() {
            grid.set(pos, Cell::Alive);
        }
        manager.spawn(&mut grid);
    }

    #[test]
    fn test_same_seed_same_placement() {
        let mut a = FoodManager::new(Some(42));
        let mut b = FoodManager::new(Some(42));
        let (_, foods_a) = a.replenish(&mut Grid::new(50), &[], 5);
        let (_, foods_b) = b.replenish(&mut Grid::new(50), &[], 5);
        assert_eq!(foods_a, foods_b);
    }

    #[test]
    fn test_replenish_tops_up_to_target() {
        let mut manager = FoodManager::new(Some(3));
        let mut grid = Grid::new(20);

        let (consumed, foods) = manager.replenish(&mut grid, &[], 4);
        assert_eq!(consumed, 0);
        assert_eq!(foods.len(), 4);
        assert_eq!(grid.count(Cell::Food), 4);
        for food in &foods {
            assert_eq!(grid[*food], Cell::Food);
        }
    }

    #[test]
    fn test_replenish_replaces_eaten_food() {
        let mut manager = FoodManager::new(Some(9));
        let mut grid = Grid::new(20);
        let (_, foods) = manager.replenish(&mut grid, &[], 3);

        // Head lands on the second food.
        grid.set(foods[1], Cell::SnakeHead);

        let (consumed, new_foods) = manager.replenish(&mut grid, &foods, 3);
        assert_eq!(consumed, 1);
        assert_eq!(new_foods.len(), 3);
        assert_eq!(new_foods[0], foods[0]);
        assert_eq!(new_foods[2], foods[2]);
        assert_ne!(new_foods[1], foods[1]);
        for food in &new_foods {
            assert_eq!(grid[*food], Cell::Food);
        }
    }

    #[test]
    fn test_place_skips_occupied_cells() {
        let mut grid = Grid::new(5);
        let alive = Position::new(1, 1);
        let dead = Position::new(2, 2);
        grid.set(alive, Cell::Alive);

        FoodManager::place(&mut grid, &[alive, dead]);
        assert_eq!(grid[alive], Cell::Alive);
        assert_eq!(grid[dead], Cell::Food);
    }
}
