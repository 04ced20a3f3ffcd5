//! Grid Components
//!
//! The grid resource owns cell occupancy; agents carry a `Position` that
//! mirrors where the grid placed them. All neighborhood queries use Moore
//! (8-connected) adjacency, deduplicated and excluding the center cell,
//! on either a bounded or a toroidal board.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Component: an agent's current cell
///
/// A spatial reference only; the `Grid` resource is the authority on
/// which entities occupy which cell.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub cell: GridPos,
}

impl Position {
    pub fn new(cell: GridPos) -> Self {
        Self { cell }
    }
}

/// Resource: the board and its occupancy store
///
/// Dense row-major backing: one `Vec<Entity>` per cell. Many agents may
/// share a cell.
#[derive(Resource, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    torus: bool,
    cells: Vec<Vec<Entity>>,
}

impl Grid {
    pub fn new(width: u32, height: u32, torus: bool) -> Self {
        let cell_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            torus,
            cells: vec![Vec::new(); cell_count],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn torus(&self) -> bool {
        self.torus
    }

    fn index(&self, pos: GridPos) -> usize {
        debug_assert!(pos.x < self.width && pos.y < self.height);
        (pos.y as usize) * (self.width as usize) + (pos.x as usize)
    }

    /// Moore neighborhood of a cell: up to 8 distinct cells, never
    /// including the cell itself. On a bounded board edge cells have
    /// fewer neighbors; on a torus coordinates wrap, and cells reachable
    /// through more than one offset appear once.
    pub fn neighborhood(&self, pos: GridPos) -> Vec<GridPos> {
        let mut cells = Vec::with_capacity(8);
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = i64::from(pos.x) + dx;
                let ny = i64::from(pos.y) + dy;
                let neighbor = if self.torus {
                    GridPos {
                        x: nx.rem_euclid(i64::from(self.width)) as u32,
                        y: ny.rem_euclid(i64::from(self.height)) as u32,
                    }
                } else {
                    if nx < 0 || ny < 0 || nx >= i64::from(self.width) || ny >= i64::from(self.height)
                    {
                        continue;
                    }
                    GridPos {
                        x: nx as u32,
                        y: ny as u32,
                    }
                };
                if neighbor == pos || cells.contains(&neighbor) {
                    continue;
                }
                cells.push(neighbor);
            }
        }
        cells
    }

    /// Pick a neighboring cell uniformly at random, or None when the cell
    /// has no distinct neighbors (a 1x1 board).
    pub fn random_neighbor(&self, pos: GridPos, rng: &mut SmallRng) -> Option<GridPos> {
        self.neighborhood(pos).choose(rng).copied()
    }

    /// Pick any cell uniformly at random.
    pub fn random_cell(&self, rng: &mut SmallRng) -> GridPos {
        GridPos {
            x: rng.gen_range(0..self.width),
            y: rng.gen_range(0..self.height),
        }
    }

    /// Entities currently occupying a cell.
    pub fn occupants(&self, pos: GridPos) -> &[Entity] {
        let index = self.index(pos);
        &self.cells[index]
    }

    /// Register an entity at a cell (initial placement).
    pub fn place(&mut self, entity: Entity, pos: GridPos) {
        let index = self.index(pos);
        self.cells[index].push(entity);
    }

    /// Move an entity between cells, updating both occupant sets.
    pub fn relocate(&mut self, entity: Entity, from: GridPos, to: GridPos) {
        let from_index = self.index(from);
        if let Some(slot) = self.cells[from_index].iter().position(|&e| e == entity) {
            self.cells[from_index].swap_remove(slot);
        }
        let to_index = self.index(to);
        self.cells[to_index].push(entity);
    }

    /// Total number of entities placed on the grid.
    pub fn occupant_count(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn entity(index: u32) -> Entity {
        Entity::from_raw(index)
    }

    #[test]
    fn test_bounded_neighborhood_sizes() {
        let grid = Grid::new(3, 3, false);

        // Interior cell sees all 8 neighbors
        assert_eq!(grid.neighborhood(GridPos::new(1, 1)).len(), 8);
        // Corner cell sees 3
        assert_eq!(grid.neighborhood(GridPos::new(0, 0)).len(), 3);
        // Edge cell sees 5
        assert_eq!(grid.neighborhood(GridPos::new(1, 0)).len(), 5);
    }

    #[test]
    fn test_torus_neighborhood_wraps() {
        let grid = Grid::new(3, 3, true);

        // Every cell on a 3x3 torus has the full 8 neighbors
        let corner = grid.neighborhood(GridPos::new(0, 0));
        assert_eq!(corner.len(), 8);
        assert!(corner.contains(&GridPos::new(2, 2)));
    }

    #[test]
    fn test_small_torus_deduplicates() {
        // On a 2x2 torus both horizontal offsets reach the same cell
        let grid = Grid::new(2, 2, true);
        let neighbors = grid.neighborhood(GridPos::new(0, 0));
        assert_eq!(neighbors.len(), 3);
        assert!(!neighbors.contains(&GridPos::new(0, 0)));
    }

    #[test]
    fn test_single_cell_has_no_neighbors() {
        for torus in [false, true] {
            let grid = Grid::new(1, 1, torus);
            assert!(grid.neighborhood(GridPos::new(0, 0)).is_empty());

            let mut rng = SmallRng::seed_from_u64(1);
            assert!(grid.random_neighbor(GridPos::new(0, 0), &mut rng).is_none());
        }
    }

    #[test]
    fn test_place_and_relocate() {
        let mut grid = Grid::new(4, 4, false);
        let a = entity(1);
        let b = entity(2);

        grid.place(a, GridPos::new(0, 0));
        grid.place(b, GridPos::new(0, 0));
        assert_eq!(grid.occupants(GridPos::new(0, 0)).len(), 2);

        grid.relocate(a, GridPos::new(0, 0), GridPos::new(1, 1));
        assert_eq!(grid.occupants(GridPos::new(0, 0)), &[b]);
        assert_eq!(grid.occupants(GridPos::new(1, 1)), &[a]);
        assert_eq!(grid.occupant_count(), 2);
    }

    #[test]
    fn test_random_cell_in_bounds() {
        let grid = Grid::new(5, 7, true);
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..100 {
            let pos = grid.random_cell(&mut rng);
            assert!(pos.x < 5);
            assert!(pos.y < 7);
        }
    }
}
