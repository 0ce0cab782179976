//! Game of Life generation step on a bounded (non-wrapping) board.

use super::grid::{Cell, Grid, Position};

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count `Alive` cells among the 8 neighbours of `pos`.
///
/// Cells beyond the edge count as dead. Snake and food cells are not alive.
pub fn live_neighbors(grid: &Grid, pos: Position) -> usize {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|(dr, dc)| {
            grid.get(pos.moved_by(*dr, *dc))
                .is_some_and(|cell| cell.is_alive())
        })
        .count()
}

/// Compute the next generation.
///
/// The returned grid holds only `Dead` and `Alive`; snake and food markings
/// are merged on top of it by the session engine.
pub fn advance(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.size());

    for (pos, cell) in grid.iter() {
        let neighbors = live_neighbors(grid, pos);

        let next_alive = match (cell.is_alive(), neighbors) {
            (true, 2) | (true, 3) => true, // Survival
            (false, 3) => true,            // Birth
            _ => false,                    // Death
        };

        if next_alive {
            next[pos] = Cell::Alive;
        }
    }

    next
}
