//! TUI rendering with ratatui
//!
//! Board, input row, message log, and the countdown to the next puzzle.

use super::app::{App, MessageStyle};
use crate::core::{LetterState, LetterStatus};
use crate::events::EventSink;
use crate::game::{GameStatus, MAX_ATTEMPTS};
use crate::puzzle::{format_countdown, time_until_next_puzzle};
use crate::share::share_text;
use crate::storage::GameStore;
use chrono::NaiveDateTime;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: GameStore, E: EventSink>(f: &mut Frame, app: &App<S, E>, now: NaiveDateTime) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board
            Constraint::Length(3),  // Input row
            Constraint::Length(7),  // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4], now);

    if app.show_share {
        render_share_popup(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🚨 WORD PATROL - Daily Challenge")
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

fn cell_style(status: LetterStatus) -> Style {
    let bg = match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn board_row(row: &[LetterState; 5]) -> Line<'static> {
    let mut spans = Vec::with_capacity(10);
    for state in row {
        spans.push(Span::styled(
            format!(" {} ", state.letter),
            cell_style(state.status),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board<S: GameStore, E: EventSink>(f: &mut Frame, app: &App<S, E>, area: Rect) {
    let state = app.session.state();
    let mut lines = vec![Line::raw("")];

    for row in state.evaluated_rows() {
        lines.push(board_row(&row));
        lines.push(Line::raw(""));
    }

    // Empty slots for the remaining attempts
    let remaining = MAX_ATTEMPTS.saturating_sub(state.attempts());
    for _ in 0..remaining {
        lines.push(Line::from(
            Span::styled(
                " _   _   _   _   _ ",
                Style::default().fg(Color::DarkGray),
            ),
        ));
        lines.push(Line::raw(""));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " Attempt {}/{} ",
                    state.attempts(),
                    state.max_attempts()
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_input<S: GameStore, E: EventSink>(f: &mut Frame, app: &App<S, E>, area: Rect) {
    let state = app.session.state();

    let content = if state.status() == GameStatus::Playing {
        let mut shown = state.current_input().to_owned();
        shown.push('▌');
        Line::from(vec![
            Span::raw("Your guess: "),
            Span::styled(
                shown,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "Challenge complete",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .title(" Input ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(input, area);
}

fn render_messages<S: GameStore, E: EventSink>(f: &mut Frame, app: &App<S, E>, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Span::styled(msg.text.clone(), style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_status<S: GameStore, E: EventSink>(
    f: &mut Frame,
    app: &App<S, E>,
    area: Rect,
    now: NaiveDateTime,
) {
    let state = app.session.state();
    let countdown = format_countdown(time_until_next_puzzle(now));

    let status = Paragraph::new(format!(
        "Streak: {}  |  Wins: {}/{}  |  Next word in {}  |  Esc: quit",
        state.streak(),
        state.total_wins(),
        state.total_games_played(),
        countdown,
    ))
    .style(Style::default().fg(Color::DarkGray))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}

fn render_share_popup<S: GameStore, E: EventSink>(f: &mut Frame, app: &App<S, E>) {
    let area = centered_rect(60, 60, f.area());
    let text = share_text(app.session.state());

    let popup = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Share your result ('s' to close) ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
