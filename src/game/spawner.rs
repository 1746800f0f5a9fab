use rand::Rng;
use tracing::{debug, warn};

use super::{
    config::GameConfig,
    grid::{Cell, CollisionGrid},
    state::Position,
    surface::{IconKind, RenderSurface},
};

/// Places bombs on free squares of the grid
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    icon_size: usize,
    max_attempts: u32,
}

impl ObstacleSpawner {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            icon_size: config.icon_size,
            max_attempts: config.max_spawn_attempts,
        }
    }

    /// Sample top-left corners until one has a fully empty square under it.
    ///
    /// Corners are drawn from `[1, dim - icon_size]` on both axes. Gives up
    /// after `max_attempts` samples.
    pub fn find_empty_region<R: Rng>(&self, grid: &CollisionGrid, rng: &mut R) -> Option<Position> {
        let max_x = grid.width().checked_sub(self.icon_size)?;
        let max_y = grid.height().checked_sub(self.icon_size)?;
        if max_x < 1 || max_y < 1 {
            return None;
        }

        for _ in 0..self.max_attempts {
            let x = rng.gen_range(1..=max_x) as i32;
            let y = rng.gen_range(1..=max_y) as i32;
            let origin = Position::new(x, y);

            if grid.is_region_empty(origin, self.icon_size) {
                return Some(origin);
            }
        }

        None
    }

    /// Run one spawner cycle: find a free square, mark it and draw the bomb.
    pub fn spawn<R: Rng, S: RenderSurface>(
        &self,
        grid: &mut CollisionGrid,
        rng: &mut R,
        surface: &mut S,
    ) -> Option<Position> {
        let Some(origin) = self.find_empty_region(grid, rng) else {
            warn!(
                attempts = self.max_attempts,
                "grid full, skip spawn this cycle"
            );
            return None;
        };

        grid.mark_region(origin, self.icon_size, Cell::Bomb);
        surface.draw_icon(IconKind::Bomb, origin, self.icon_size);
        debug!(x = origin.x, y = origin.y, "bomb placed");

        Some(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::surface::RenderDirective;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spawn_marks_and_draws() {
        let config = GameConfig::small();
        let spawner = ObstacleSpawner::new(&config);
        let mut grid = CollisionGrid::new(config.grid_width, config.grid_height);
        let mut rng = StdRng::seed_from_u64(7);
        let mut directives: Vec<RenderDirective> = Vec::new();

        let origin = spawner.spawn(&mut grid, &mut rng, &mut directives).unwrap();

        assert_eq!(grid.count(Cell::Bomb), 24 * 24);
        assert_eq!(grid.cell(origin), Some(Cell::Bomb));
        assert_eq!(
            directives,
            vec![RenderDirective::Icon {
                kind: IconKind::Bomb,
                at: origin,
                size: 24
            }]
        );
    }

    #[test]
    fn test_sample_range() {
        let config = GameConfig::default();
        let spawner = ObstacleSpawner::new(&config);
        let grid = CollisionGrid::new(400, 400);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..1000 {
            let origin = spawner.find_empty_region(&grid, &mut rng).unwrap();
            assert!((1..=376).contains(&origin.x));
            assert!((1..=376).contains(&origin.y));
        }
    }

    #[test]
    fn test_never_overlaps_occupied_cells() {
        let config = GameConfig::default();
        let spawner = ObstacleSpawner::new(&config);
        let mut rng = StdRng::seed_from_u64(42);

        for trial in 0..1000u64 {
            let mut grid = CollisionGrid::new(400, 400);

            // sparse: a few bombs and a short trail
            for _ in 0..5 {
                spawner.spawn(&mut grid, &mut rng, &mut Vec::<RenderDirective>::new());
            }
            let row = (trial % 400) as i32;
            for x in 100..300 {
                grid.mark_point(Position::new(x, row), Cell::Line);
            }

            let origin = spawner.find_empty_region(&grid, &mut rng).unwrap();
            for y in origin.y..origin.y + 24 {
                for x in origin.x..origin.x + 24 {
                    assert_eq!(grid.cell(Position::new(x, y)), Some(Cell::Empty));
                }
            }
        }
    }

    #[test]
    fn test_full_grid_skips_cycle() {
        let config = GameConfig {
            max_spawn_attempts: 50,
            ..GameConfig::small()
        };
        let spawner = ObstacleSpawner::new(&config);
        let mut grid = CollisionGrid::new(64, 64);
        grid.mark_region(Position::new(0, 0), 64, Cell::Line);
        let mut rng = StdRng::seed_from_u64(3);
        let mut directives: Vec<RenderDirective> = Vec::new();

        assert_eq!(spawner.spawn(&mut grid, &mut rng, &mut directives), None);
        assert!(directives.is_empty());
        assert_eq!(grid.count(Cell::Bomb), 0);
    }
}
