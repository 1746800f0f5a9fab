use crate::game::{IconKind, Position, RenderSurface};

/// Terminal-side render surface.
///
/// Collects the engine's directives in canvas coordinates (origin bottom-left,
/// `y` up) so the renderer can repaint the whole field every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailCanvas {
    width: f64,
    height: f64,
    border: bool,
    trail: Vec<(f64, f64)>,
    bombs: Vec<BombIcon>,
}

/// Bomb footprint in canvas coordinates, `(x, y)` being its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BombIcon {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl TrailCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
            border: false,
            trail: Vec::new(),
            bombs: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn has_border(&self) -> bool {
        self.border
    }

    pub fn trail(&self) -> &[(f64, f64)] {
        &self.trail
    }

    pub fn bombs(&self) -> &[BombIcon] {
        &self.bombs
    }

    fn to_canvas(&self, pos: Position) -> (f64, f64) {
        (f64::from(pos.x), self.height - f64::from(pos.y))
    }
}

impl RenderSurface for TrailCanvas {
    fn draw_border(&mut self) {
        self.border = true;
    }

    fn draw_line_segment(&mut self, from: Position, to: Position) {
        // segments are contiguous, so only the first one contributes its start
        if self.trail.is_empty() {
            let start = self.to_canvas(from);
            self.trail.push(start);
        }
        let end = self.to_canvas(to);
        self.trail.push(end);
    }

    fn draw_icon(&mut self, kind: IconKind, at: Position, size: usize) {
        match kind {
            IconKind::Bomb => {
                let size = size as f64;
                let (x, top) = self.to_canvas(at);
                self.bombs.push(BombIcon {
                    x,
                    y: top - size,
                    size,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_is_flipped_and_contiguous() {
        let mut canvas = TrailCanvas::new(400, 400);
        canvas.draw_line_segment(Position::new(200, 200), Position::new(201, 200));
        canvas.draw_line_segment(Position::new(201, 200), Position::new(201, 199));

        assert_eq!(
            canvas.trail(),
            &[(200.0, 200.0), (201.0, 200.0), (201.0, 201.0)]
        );
    }

    #[test]
    fn test_bomb_footprint() {
        let mut canvas = TrailCanvas::new(400, 300);
        canvas.draw_icon(IconKind::Bomb, Position::new(10, 20), 24);

        assert_eq!(
            canvas.bombs(),
            &[BombIcon {
                x: 10.0,
                y: 256.0,
                size: 24.0
            }]
        );
    }

    #[test]
    fn test_border() {
        let mut canvas = TrailCanvas::new(10, 10);
        assert!(!canvas.has_border());
        canvas.draw_border();
        assert!(canvas.has_border());
    }
}
