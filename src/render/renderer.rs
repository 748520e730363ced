use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::collision::CollisionKind;
use crate::game::{BoardView, MotionMode, Position};
use crate::metrics::GameMetrics;

/// Draws a [`BoardView`] into the terminal
pub struct Renderer {
    motion: MotionMode,
}

impl Renderer {
    pub fn new(motion: MotionMode) -> Self {
        Self { motion }
    }

    pub fn render(&self, frame: &mut Frame, board: &BoardView, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(board, metrics), chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if board.is_alive {
            frame.render_widget(self.render_grid(board), game_area);
        } else {
            frame.render_widget(self.render_game_over(board), game_area);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, board: &BoardView) -> Paragraph<'static> {
        let mut lines = Vec::with_capacity(board.grid_height);

        for y in 0..board.grid_height {
            let mut spans = Vec::with_capacity(board.grid_width);

            for x in 0..board.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == board.head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if board.body.contains(&pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if board.food == Some(pos) {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let title = match self.motion {
            MotionMode::Grid => " FangShift ",
            MotionMode::Smooth => " FangShift (smooth) ",
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, board: &BoardView, metrics: &GameMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(board.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Steps: ", label),
            Span::styled(board.steps.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, board: &BoardView) -> Paragraph<'static> {
        let cause = match board.collision {
            Some(CollisionKind::Wall) => "You hit the wall",
            Some(CollisionKind::SelfCollision) => "You bit yourself",
            _ => "",
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(Span::styled(cause, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    board.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
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
        let mut spans = vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
        ];
        if self.motion == MotionMode::Smooth {
            spans.push(Span::styled("Space", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(" to stop | "));
        }
        spans.push(Span::styled("Q", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" to quit"));

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn board(is_alive: bool) -> BoardView {
        BoardView {
            grid_width: 6,
            grid_height: 4,
            head: Position::new(2, 1),
            body: vec![Position::new(1, 1)],
            food: Some(Position::new(4, 2)),
            score: 7,
            steps: 12,
            is_alive,
            collision: (!is_alive).then_some(CollisionKind::Wall),
        }
    }

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
    fn test_renders_live_board() {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        let renderer = Renderer::new(MotionMode::Smooth);
        let metrics = GameMetrics::new();

        terminal
            .draw(|frame| renderer.render(frame, &board(true), &metrics))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Score:"));
        assert!(text.contains("■"));
        assert!(text.contains("Space"));
    }

    #[test]
    fn test_renders_game_over_cause() {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        let renderer = Renderer::new(MotionMode::Grid);
        let metrics = GameMetrics::new();

        terminal
            .draw(|frame| renderer.render(frame, &board(false), &metrics))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("You hit the wall"));
        assert!(!text.contains("Space"));
    }
}
