//! TUI rendering with ratatui
//!
//! Draws the guess grid, the autocomplete dropdown, and the status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::catalog::CharacterProvider;
use crate::core::Verdict;
use crate::game::MAX_GUESSES;
use crate::output::formatters::{column_width, hint_glyph, pad_to};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<P: CharacterProvider>(f: &mut Frame, app: &App<'_, P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                  // Header
            Constraint::Length(MAX_GUESSES as u16 + 4), // Guess grid
            Constraint::Min(6),                     // Dropdown + messages
            Constraint::Length(3),                  // Input
            Constraint::Length(3),                  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_side_panels(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🌌 CHARACTER GUESSER - Who is it?")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Exact => Style::default().fg(Color::Black).bg(Color::Green),
        Verdict::Close => Style::default().fg(Color::Black).bg(Color::Yellow),
        Verdict::Miss => Style::default().fg(Color::DarkGray),
    }
}

fn render_grid<P: CharacterProvider>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_GUESSES + 1);

    // Column labels
    let labels: Vec<Span> = app
        .session
        .attributes()
        .iter()
        .flat_map(|&a| {
            [
                Span::styled(
                    pad_to(a.label(), column_width(a)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    lines.push(Line::from(labels));

    for record in app.session.history() {
        let mut spans = Vec::with_capacity(record.row.cells.len() * 2);
        for cell in &record.row.cells {
            let mut text = cell.value.clone();
            if let Some(hint) = cell.comparison.hint {
                text.push(' ');
                text.push_str(hint_glyph(hint));
            }
            spans.push(Span::styled(
                pad_to(&text, column_width(cell.attribute)),
                cell_style(cell.comparison.verdict),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(format!(
                " Guesses ({}/{MAX_GUESSES}) ",
                app.session.history().len()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_side_panels<P: CharacterProvider>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_suggestions(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_suggestions<P: CharacterProvider>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let style = if i == app.selected_suggestion {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(name.as_str()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Suggestions (Tab to fill) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_messages<P: CharacterProvider>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let lines: Vec<Line> = app
        .messages
        .iter()
        .map(|m| {
            let style = match m.style {
                MessageStyle::Info => Style::default().fg(Color::Gray),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(m.text.clone(), style))
        })
        .collect();

    let messages = Paragraph::new(lines).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(messages, area);
}

fn render_input<P: CharacterProvider>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let (text, style) = match app.input_mode {
        InputMode::Typing => (
            format!("> {}", app.input_buffer),
            Style::default().fg(Color::Yellow),
        ),
        InputMode::GameOver => (
            "Game over. Press 'n' for a new game, 'q' to quit".to_string(),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
    };

    let input = Paragraph::new(text).style(style).block(
        Block::default()
            .title(" Your guess ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(input, area);
}

fn render_status<P: CharacterProvider>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let won = app.stats.games_won;
    let total = app.stats.total_games;
    let status = Paragraph::new(format!(
        " Games: {total}  Won: {won}  |  Enter submit · Tab complete · ↓ next suggestion · Esc quit "
    ))
    .style(Style::default().fg(Color::DarkGray))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}
