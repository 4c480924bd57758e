//! TUI rendering with ratatui
//!
//! Layout and widgets for the interactive Mastermind board.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Peg, Score};
use crate::game::RoundStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Terminal cell color for a peg
const fn peg_color(peg: Peg) -> Color {
    match peg {
        Peg::Red => Color::Red,
        Peg::Blue => Color::Blue,
        Peg::Yellow => Color::Yellow,
        Peg::Green => Color::Green,
        Peg::Orange => Color::LightRed,
        Peg::Violet => Color::Magenta,
        Peg::White => Color::White,
        Peg::Black => Color::DarkGray,
        Peg::Grey => Color::Gray,
        Peg::Indigo => Color::LightBlue,
        Peg::Pink => Color::LightMagenta,
        Peg::Brown => Color::LightYellow,
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔐 MASTERMIND - Crack the Code")
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

/// Past guesses with their feedback pips, newest last
fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let slots = app.config.slots;

    let rows: Vec<ListItem> = if app.round.memory().is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No guesses yet",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        app.round
            .memory()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let mut spans = vec![Span::styled(
                    format!("{:>2}. ", i + 1),
                    Style::default().fg(Color::DarkGray),
                )];

                for &peg in record.guess.pegs() {
                    spans.push(Span::styled(
                        format!("{} ", peg.letter()),
                        Style::default()
                            .fg(peg_color(peg))
                            .add_modifier(Modifier::BOLD),
                    ));
                }

                spans.push(Span::raw("  "));
                spans.extend(score_spans(record.score, slots));

                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let board = List::new(rows).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

/// Feedback pips: filled for exact, hollow for misplaced, dots for the rest
fn score_spans(score: Score, slots: usize) -> Vec<Span<'static>> {
    let padding = slots.saturating_sub(score.exact() + score.misplaced());
    vec![
        Span::styled("●".repeat(score.exact()), Style::default().fg(Color::Green)),
        Span::styled(
            "○".repeat(score.misplaced()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("·".repeat(padding), Style::default().fg(Color::DarkGray)),
    ]
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Palette
            Constraint::Length(3), // Remaining guesses gauge
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_palette(f, app, chunks[0]);
    render_remaining(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_palette(f: &mut Frame, app: &App, area: Rect) {
    let colors: Vec<ListItem> = app
        .palette()
        .pegs()
        .iter()
        .map(|&peg| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", peg.letter()),
                    Style::default()
                        .fg(peg_color(peg))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(peg.name()),
            ]))
        })
        .collect();

    let palette = List::new(colors).block(
        Block::default()
            .title(" Colors ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(palette, area);
}

fn render_remaining(f: &mut Frame, app: &App, area: Rect) {
    let total = app.config.rounds;
    let remaining = app.round.remaining();
    let percent = if total > 0 {
        (remaining * 100 / total) as u16
    } else {
        0
    };

    let color = match remaining {
        0..=2 => Color::Red,
        3..=5 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{total}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => {
            if app.round.status() == RoundStatus::Won {
                (
                    " 🎉 CODE CRACKED! | 'n' for new round, 'q' to quit ".to_string(),
                    "",
                    Color::Green,
                )
            } else {
                (
                    " Out of guesses | 'n' for new round, 'q' to quit ".to_string(),
                    "",
                    Color::Red,
                )
            }
        }
        InputMode::Guessing => (
            format!(" Enter Guess ({} color letters) ", app.config.slots),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let setup_text = format!(
        "Slots: {} | Colors: {}",
        app.config.slots, app.config.colors
    );
    let setup = Paragraph::new(setup_text).alignment(Alignment::Center);
    f.render_widget(setup, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let guesses_text = format!("Guesses used: {}", app.round.turns_taken());
    let guesses = Paragraph::new(guesses_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::RoundOver => "n: New Round | q: Quit",
        InputMode::Guessing => "Enter: Guess | Backspace: Edit | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
