use super::state::Position;

/// Value held by a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Line,
    Bomb,
}

/// Occupancy map shared by the advancer and the bomb spawner.
///
/// Cells only ever go from `Empty` to `Line` or `Bomb`; nothing clears them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CollisionGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Check if a position is within the grid bounds
    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Cell value, or `None` outside the grid
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Non-empty cells and anything outside the grid count as occupied
    pub fn is_occupied(&self, pos: Position) -> bool {
        !matches!(self.cell(pos), Some(Cell::Empty))
    }

    /// Mark a single cell. Positions outside the grid are ignored.
    pub fn mark_point(&mut self, pos: Position, value: Cell) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = value;
        }
    }

    /// Mark the `size`x`size` square whose top-left corner is `origin`,
    /// clamped to the grid.
    pub fn mark_region(&mut self, origin: Position, size: usize, value: Cell) {
        let Some((xs, ys)) = self.clamped_span(origin, size) else {
            return;
        };
        for y in ys {
            let row = y * self.width;
            self.cells[row + xs.start..row + xs.end].fill(value);
        }
    }

    /// True when the whole square lies inside the grid and is empty
    pub fn is_region_empty(&self, origin: Position, size: usize) -> bool {
        let size = size as i32;
        let far = origin.moved_by(size - 1, size - 1);
        if size == 0 || !self.in_bounds(origin) || !self.in_bounds(far) {
            return false;
        }
        let (x0, y0) = (origin.x as usize, origin.y as usize);
        (y0..=far.y as usize).all(|y| {
            let row = y * self.width;
            self.cells[row + x0..=row + far.x as usize]
                .iter()
                .all(|c| *c == Cell::Empty)
        })
    }

    /// Number of cells holding `value`
    pub fn count(&self, value: Cell) -> usize {
        self.cells.iter().filter(|c| **c == value).count()
    }

    fn clamped_span(
        &self,
        origin: Position,
        size: usize,
    ) -> Option<(std::ops::Range<usize>, std::ops::Range<usize>)> {
        let clamp = |start: i32, limit: usize| {
            let end = i64::from(start) + size as i64;
            let lo = i64::from(start).clamp(0, limit as i64) as usize;
            let hi = end.clamp(0, limit as i64) as usize;
            (lo < hi).then_some(lo..hi)
        };
        Some((clamp(origin.x, self.width)?, clamp(origin.y, self.height)?))
    }
}
