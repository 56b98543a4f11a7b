//! TUI application state and logic

use crate::catalog::{CatalogError, CharacterProvider};
use crate::game::{GuessError, MAX_GUESSES, Session, Status};
use crate::suggest::{MatchMode, NameIndex};
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

/// How many dropdown entries to keep visible
pub const SUGGESTION_ROWS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a character name
    Typing,
    /// Game ended; waiting for new-game/quit
    GameOver,
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
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

/// Application state
pub struct App<'a, P: CharacterProvider> {
    provider: &'a P,
    pub session: Session<'a, P>,
    pub index: NameIndex,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub suggestions: Vec<String>,
    pub selected_suggestion: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<'a, P: CharacterProvider> App<'a, P> {
    /// Build the app with a fresh random-target session
    ///
    /// # Errors
    /// Fails when the provider cannot supply a target.
    pub fn new(provider: &'a P, mode: MatchMode) -> Result<Self, CatalogError> {
        let session = Session::new(provider)?;
        let index = NameIndex::new(provider.all_names(), mode);

        Ok(Self {
            provider,
            session,
            index,
            input_mode: InputMode::Typing,
            input_buffer: String::new(),
            suggestions: Vec::new(),
            selected_suggestion: 0,
            messages: vec![Message {
                text: "A secret character awaits. Start typing a name; Tab completes."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// Recompute the dropdown for the current input buffer
    pub fn refresh_suggestions(&mut self) {
        self.suggestions = self
            .index
            .suggest(&self.input_buffer)
            .into_iter()
            .take(SUGGESTION_ROWS)
            .map(str::to_string)
            .collect();
        self.selected_suggestion = 0;
    }

    /// Fill the input buffer with the selected suggestion, cycling selection
    pub fn accept_suggestion(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.input_buffer = self.suggestions[self.selected_suggestion].clone();
        self.selected_suggestion = (self.selected_suggestion + 1) % self.suggestions.len();
    }

    /// Move the dropdown selection down (wrapping)
    pub fn select_next_suggestion(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected_suggestion = (self.selected_suggestion + 1) % self.suggestions.len();
        }
    }

    /// Submit the current input buffer as a guess
    pub fn submit_current(&mut self) {
        let input = self.input_buffer.trim().to_string();
        if input.is_empty() {
            return;
        }

        let outcome = self.session.submit_guess(&input).map(|_| ());
        match outcome {
            Ok(()) => {
                self.input_buffer.clear();
                self.suggestions.clear();
                self.after_guess();
            }
            Err(GuessError::UnknownCharacter(name)) => {
                self.add_message(
                    &format!("No character named '{name}', check the dropdown"),
                    MessageStyle::Error,
                );
            }
            Err(GuessError::GameOver) => {
                self.input_mode = InputMode::GameOver;
            }
        }
    }

    fn after_guess(&mut self) {
        match self.session.status() {
            Status::Won => {
                let turns = self.session.history().len();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.guess_distribution[turns] += 1;
                self.input_mode = InputMode::GameOver;

                let celebration = match turns {
                    1 => "🎯 FIRST TRY! Incredible! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it on the last try! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            Status::Lost => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!("❌ Out of guesses! It was {}.", self.session.target_name()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            Status::InProgress => {
                let remaining = self.session.remaining();
                self.add_message(
                    &format!(
                        "{remaining} {} remaining",
                        if remaining == 1 { "guess" } else { "guesses" }
                    ),
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Discard the session and start over with a new random target
    pub fn new_game(&mut self) {
        match Session::new(self.provider) {
            Ok(session) => {
                self.session = session;
                self.input_mode = InputMode::Typing;
                self.input_buffer.clear();
                self.suggestions.clear();
                self.messages.clear();
                self.add_message("New game started, new secret character!", MessageStyle::Info);
            }
            Err(e) => {
                self.add_message(&format!("Cannot start a game: {e}"), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the last few messages
        if self.messages.len() > 4 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<P: CharacterProvider>(app: App<'_, P>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend, P: CharacterProvider>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, P>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // Ignore other keys between games
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Tab => {
                        app.accept_suggestion();
                    }
                    KeyCode::Down => {
                        app.select_next_suggestion();
                    }
                    KeyCode::Char(c) => {
                        app.input_buffer.push(c);
                        app.refresh_suggestions();
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                        app.refresh_suggestions();
                    }
                    KeyCode::Enter => {
                        app.submit_current();
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
