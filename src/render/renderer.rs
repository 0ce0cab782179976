use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{BodyTint, Cell, GameConfig, GameState, body_tint};
use crate::metrics::{GameMetrics, format_session_time};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        config: &GameConfig,
        metrics: &GameMetrics,
        paused: bool,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, paused), chunks[0]);

        if state.is_alive {
            let tint = body_tint(&state.session, config);
            frame.render_widget(self.render_grid(state, tint), chunks[1]);
        } else {
            frame.render_widget(self.render_game_over(state, metrics), chunks[1]);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, state: &GameState, tint: BodyTint) -> Paragraph<'_> {
        let body_color = match tint {
            BodyTint::Normal => Color::Blue,
            BodyTint::FlashA => Color::Cyan,
            BodyTint::FlashB => Color::Yellow,
        };

        let lines: Vec<Line> = state
            .grid
            .rows()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| match cell {
                        Cell::Dead => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                        Cell::Alive => Span::styled("■ ", Style::default().fg(Color::White)),
                        Cell::SnakeHead => Span::styled(
                            "■ ",
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Cell::SnakeBody => Span::styled("■ ", Style::default().fg(body_color)),
                        Cell::Food => Span::styled(
                            "● ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        ),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Gray))
                    .title(" Game of Growth "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, paused: bool) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format_session_time(state.session.elapsed),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Session: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.session.index.to_string(),
                Style::default().fg(Color::White),
            ),
        ];

        if paused {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let cause = match state.collision {
            Some(collision) => format!("{collision:?}"),
            None => String::from("-"),
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Highest score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.high_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(vec![
                Span::styled("Hit: ", Style::default().fg(Color::Gray)),
                Span::styled(cause, Style::default().fg(Color::Gray)),
                Span::raw("    "),
                Span::styled("Played: ", Style::default().fg(Color::Gray)),
                Span::styled(metrics.format_play_time(), Style::default().fg(Color::Gray)),
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

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Magenta)),
            Span::raw(" to pause | "),
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
