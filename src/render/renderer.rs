use anyhow::{Context, Result};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{FrameView, Renderer};
use crate::game::{CollisionCause, Phase, Position};

/// Draws frames into a ratatui terminal
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(backend: B) -> Result<Self> {
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self { terminal })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn draw_frame(&mut self, view: &FrameView<'_>) -> Result<()> {
        self.terminal
            .draw(|frame| render(frame, view))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

fn render(frame: &mut Frame, view: &FrameView<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Game area
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    frame.render_widget(render_stats(view), chunks[0]);

    if let Phase::GameOver(cause) = view.phase {
        frame.render_widget(render_game_over(view, cause), chunks[1]);
    } else {
        frame.render_widget(render_grid(view), chunks[1]);
    }

    frame.render_widget(render_controls(view), chunks[2]);
}

fn render_grid<'a>(view: &FrameView<'a>) -> Paragraph<'a> {
    let board = view.board;
    let cell = board.cell_size;
    let head = view.segments.first().copied();
    let mut lines = Vec::with_capacity(board.rows() as usize);

    for row in 0..board.rows() {
        let mut spans = Vec::with_capacity(board.columns() as usize);

        for col in 0..board.columns() {
            let pos = Position::from_cell(col, row, cell);

            let span = if Some(pos) == head {
                Span::styled(
                    "■ ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else if view.segments.contains(&pos) {
                Span::styled("□ ", Style::default().fg(Color::Green))
            } else if pos == view.apple {
                Span::styled(
                    "O ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(". ", Style::default().fg(Color::DarkGray))
            };

            spans.push(span);
        }

        lines.push(Line::from(spans));
    }

    let title = if view.is_paused() {
        " Snake - Paused "
    } else {
        " Snake "
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

fn render_stats<'a>(view: &FrameView<'a>) -> Paragraph<'a> {
    let mut spans = vec![
        Span::styled(
            view.level_label,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            view.score_text(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled("Best: ", Style::default().fg(Color::Yellow)),
        Span::styled(view.high_score.to_string(), Style::default().fg(Color::White)),
        Span::raw("    "),
        Span::styled("Time: ", Style::default().fg(Color::Yellow)),
        Span::styled(view.elapsed.clone(), Style::default().fg(Color::White)),
    ];

    if view.is_paused() {
        spans.push(Span::raw("    "));
        spans.push(Span::styled(
            "Paused",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn render_game_over<'a>(view: &FrameView<'a>, cause: CollisionCause) -> Paragraph<'a> {
    let reason = match cause {
        CollisionCause::Wall => "The snake hit the wall",
        CollisionCause::SelfCollision => "The snake bit itself",
    };

    let mut text = vec![Line::from("")];

    if let Some(rating) = view.rating {
        if rating.shows_banner() {
            text.push(Line::from(Span::styled(
                "Eligible for level 2",
                Style::default().fg(Color::LightMagenta),
            )));
        }
        text.push(Line::from(Span::styled(
            rating.message(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        text.push(Line::from(""));
    }

    text.extend([
        Line::from(Span::styled(
            format!("Game Over! Your Score is: {}", view.score),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(reason, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "ENTER",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "ESC",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to exit", Style::default().fg(Color::Gray)),
        ]),
    ]);

    Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    )
}

fn render_controls<'a>(view: &FrameView<'a>) -> Paragraph<'a> {
    let mut spans = vec![
        Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
        Span::raw(" or "),
        Span::styled("WASD", Style::default().fg(Color::Cyan)),
        Span::raw(" to move | "),
    ];
    if view.pausable {
        spans.push(Span::styled("SPACE", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(" to pause | "));
    }
    spans.push(Span::styled("ESC", Style::default().fg(Color::Red)));
    spans.push(Span::raw(" to quit"));

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
