//! TUI application state and logic

use crate::core::{Code, Palette};
use crate::game::{GameConfig, Round, RoundStatus};
use crate::output::formatters::code_names;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub round: Round,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let round = Round::new(&config);

        Self {
            config,
            round,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! A secret code has been generated.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!(
                        "Type {} color letters and press Enter to guess.",
                        config.slots
                    ),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.round.palette()
    }

    /// Parse and score the buffered input as one guess
    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.clone();

        let guess = match Code::parse_guess(&input, self.config.slots, self.palette()) {
            Ok(guess) => guess,
            Err(err) => {
                // Leave the buffer so the entry can be fixed in place
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        let Ok(score) = self.round.guess(&guess) else {
            self.add_message("That guess could not be scored", MessageStyle::Error);
            return;
        };

        self.input_buffer.clear();

        match self.round.status() {
            RoundStatus::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.input_mode = InputMode::RoundOver;

                let turns = self.round.turns_taken() + 1;
                let celebration = match turns {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "🎊 CODE CRACKED! 🎊",
                };

                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
            }
            RoundStatus::Lost => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::RoundOver;

                self.add_message("Out of guesses! The round is lost.", MessageStyle::Error);
                self.add_message(
                    &format!("The secret was: {}", code_names(self.round.secret())),
                    MessageStyle::Info,
                );
                self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
            }
            RoundStatus::InProgress => {
                self.add_message(
                    &format!(
                        "{score} - {} {} left",
                        self.round.remaining(),
                        if self.round.remaining() == 1 {
                            "guess"
                        } else {
                            "guesses"
                        }
                    ),
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Start a fresh round with a new secret
    pub fn new_round(&mut self) {
        self.round = Round::new(&self.config);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(
            "New round started! A fresh secret has been generated.",
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_round();
                    }
                    _ => {
                        // Between rounds, ignore other keys
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    // 'q' abbreviates no color, so it is free to mean quit;
                    // 'n' is Brown and must stay typable
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
