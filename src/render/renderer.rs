use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Paragraph,
        canvas::{Canvas, Points, Rectangle},
    },
};

use super::canvas::TrailCanvas;
use crate::game::GameEngine;
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        engine: &GameEngine,
        canvas: &TrailCanvas,
        metrics: &GameMetrics,
        game_over: Option<u64>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(engine, metrics);
        frame.render_widget(stats, chunks[0]);

        match game_over {
            Some(elapsed_secs) => {
                frame.render_widget(self.render_game_over(elapsed_secs, metrics), chunks[1]);
            }
            None => self.render_field(frame, chunks[1], canvas),
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, canvas: &TrailCanvas) {
        let block = if canvas.has_border() {
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Snake ")
        } else {
            Block::default()
        };

        let field = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([0.0, canvas.width()])
            .y_bounds([0.0, canvas.height()])
            .paint(|ctx| {
                for bomb in canvas.bombs() {
                    ctx.draw(&Rectangle {
                        x: bomb.x,
                        y: bomb.y,
                        width: bomb.size,
                        height: bomb.size,
                        color: Color::Yellow,
                    });
                }
                ctx.layer();
                ctx.draw(&Points {
                    coords: canvas.trail(),
                    color: Color::Red,
                });
            });

        frame.render_widget(field, area);
    }

    fn render_stats(&self, engine: &GameEngine, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                GameMetrics::format_time(engine.elapsed_secs()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}/{}", engine.snake().speed(), engine.config().max_speed),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                GameMetrics::format_time(metrics.best_time_secs),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, elapsed_secs: u64, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                format!("COLLISION - YOU LOSE IN {elapsed_secs} seconds"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Games played: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.games_played.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("A/S", Style::default().fg(Color::Cyan)),
            Span::raw(" speed up/down | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, RenderSurface};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_running_frame_shows_hud() {
        let engine = GameEngine::with_seed(GameConfig::default(), 1);
        let mut canvas = TrailCanvas::new(400, 400);
        engine.begin(&mut canvas);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        terminal
            .draw(|frame| {
                Renderer::new().render(frame, &engine, &canvas, &GameMetrics::new(), None)
            })
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Time: 00:00"));
        assert!(text.contains("Speed: 4/7"));
        assert!(text.contains(" Snake "));
    }

    #[test]
    fn test_game_over_frame() {
        let engine = GameEngine::with_seed(GameConfig::default(), 1);
        let mut canvas = TrailCanvas::new(400, 400);
        canvas.draw_border();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        terminal
            .draw(|frame| {
                Renderer::new().render(frame, &engine, &canvas, &GameMetrics::new(), Some(12))
            })
            .unwrap();

        assert!(screen_text(&terminal).contains("COLLISION - YOU LOSE IN 12 seconds"));
    }
}
