//! Seams between the engine and whatever presents the game.
//!
//! The engine never draws or notifies anyone directly. It issues render
//! directives to a [`RenderSurface`] and reports the end of a session to a
//! [`TerminationSink`].

use super::state::Position;

/// Icons the engine can ask a surface to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Bomb,
}

pub trait RenderSurface {
    /// Outline of the playing field
    fn draw_border(&mut self);

    /// One committed step of the line
    fn draw_line_segment(&mut self, from: Position, to: Position);

    /// Square icon with its top-left corner at `at`
    fn draw_icon(&mut self, kind: IconKind, at: Position, size: usize);
}

pub trait TerminationSink {
    /// Called once when the head collides
    fn notify_game_over(&mut self, elapsed_secs: u64);
}

/// A render directive as issued by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderDirective {
    Border,
    LineSegment { from: Position, to: Position },
    Icon { kind: IconKind, at: Position, size: usize },
}

/// Records directives in issue order
impl RenderSurface for Vec<RenderDirective> {
    fn draw_border(&mut self) {
        self.push(RenderDirective::Border);
    }

    fn draw_line_segment(&mut self, from: Position, to: Position) {
        self.push(RenderDirective::LineSegment { from, to });
    }

    fn draw_icon(&mut self, kind: IconKind, at: Position, size: usize) {
        self.push(RenderDirective::Icon { kind, at, size });
    }
}

/// Keeps the elapsed time of the game over, if any
impl TerminationSink for Option<u64> {
    fn notify_game_over(&mut self, elapsed_secs: u64) {
        *self = Some(elapsed_secs);
    }
}
