//! TUI application state and logic

use crate::error::PuzzleError;
use crate::game::{Session, SubmitOutcome};
use crate::output::formatters::moves_label;
use crate::puzzle::{GameWords, PuzzleGenerator, shortest_path};
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
pub struct App<'a> {
    pub game: &'a GameWords,
    pub generator: PuzzleGenerator<'a>,
    pub session: Session,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub show_solution: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    WinCelebration,
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
    pub total_moves: usize,
    pub par_games: usize,
}

impl<'a> App<'a> {
    /// Create the app with a freshly generated puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if no generator can be built or no puzzle is found.
    pub fn new(game: &'a GameWords) -> Result<Self, PuzzleError> {
        let generator = game.generator()?;
        let puzzle = generator.generate(&mut rand::rng())?;

        let mut app = Self {
            game,
            generator,
            session: Session::new(puzzle),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                total_games: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Typing,
            show_solution: false,
        };
        app.add_message(
            "Welcome! Change one letter at a time to reach the target.",
            MessageStyle::Info,
        );
        app.add_message("Type a word and press Enter.", MessageStyle::Info);
        Ok(app)
    }

    /// Letters per word in this game
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.session.puzzle().start().len()
    }

    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        if input.is_empty() {
            return;
        }

        match self.session.submit(&input, self.game.dictionary()) {
            Ok(SubmitOutcome::Continue) => {
                let remaining = self
                    .remaining_moves()
                    .map_or_else(|| "no route left".to_string(), moves_label);
                self.add_message(
                    &format!("{} ({remaining} to go)", input.to_uppercase()),
                    MessageStyle::Info,
                );
            }
            Ok(SubmitOutcome::Solved) => self.celebrate(),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn celebrate(&mut self) {
        let moves = self.session.moves();
        let par = self.session.puzzle().moves();

        self.stats.games_won += 1;
        self.stats.total_moves += moves;
        if moves <= par {
            self.stats.par_games += 1;
        }
        self.input_mode = InputMode::WinCelebration;

        let celebration = match moves.saturating_sub(par) {
            0 => "🏆 PERFECT! Shortest route found! 🌟",
            1 => "🔥 EXCELLENT! One over par! 🔥",
            2 => "✨ SPLENDID! ✨",
            _ => "🎊 SOLVED! 🎊",
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message(&self.session.share_text().replace('\n', " | "), MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match self.generator.generate(&mut rand::rng()) {
            Ok(puzzle) => {
                self.session = Session::new(puzzle);
                self.stats.total_games += 1;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Typing;
                self.show_solution = false;
                self.add_message("New puzzle started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn undo_last(&mut self) {
        match self.session.undo() {
            Ok(word) => self.add_message(
                &format!("Took back {}", word.text().to_uppercase()),
                MessageStyle::Info,
            ),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn show_hint(&mut self) {
        let path = shortest_path(
            self.game.graph(),
            self.session.current().text(),
            self.session.puzzle().target().text(),
            usize::MAX,
        );
        match path.as_deref() {
            Some([_, next, ..]) => {
                let text = format!("Hint: try {}", next.text().to_uppercase());
                self.add_message(&text, MessageStyle::Info);
            }
            _ => self.add_message("No route from here - try undo", MessageStyle::Error),
        }
    }

    /// Fewest moves from the current word to the target
    ///
    /// `None` when the current word is off the game graph or cannot reach
    /// the target.
    #[must_use]
    pub fn remaining_moves(&self) -> Option<usize> {
        shortest_path(
            self.game.graph(),
            self.session.current().text(),
            self.session.puzzle().target().text(),
            usize::MAX,
        )
        .map(|path| path.len() - 1)
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.word_length() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
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

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match app.input_mode {
                InputMode::WinCelebration => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('n') if ctrl => app.new_game(),
                    KeyCode::Char('u') if ctrl => app.undo_last(),
                    KeyCode::Char('r') if ctrl => app.show_solution = !app.show_solution,
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab => app.show_hint(),
                    KeyCode::Char(c) => app.push_char(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_input(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Word;
    use crate::puzzle::Puzzle;

    fn ladder_game() -> GameWords {
        let config = GameConfig {
            word_length: 3,
            min_steps: 1,
            max_steps: 3,
            ..GameConfig::default()
        };
        GameWords::build(&["cat", "cot", "cog", "dog", "dot", "cut"], &config).unwrap()
    }

    fn app_with_puzzle<'a>(game: &'a GameWords, path: &[&str]) -> App<'a> {
        let mut app = App::new(game).unwrap();
        let path = path.iter().map(|w| Word::new(*w).unwrap()).collect();
        app.session = Session::new(Puzzle::from_path(path).unwrap());
        app
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
        app.submit_input();
    }

    #[test]
    fn solving_switches_to_celebration() {
        let game = ladder_game();
        let mut app = app_with_puzzle(&game, &["cat", "cot", "cog"]);

        type_word(&mut app, "cot");
        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.remaining_moves(), Some(1));

        type_word(&mut app, "cog");
        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.par_games, 1);
    }

    #[test]
    fn invalid_word_reports_error() {
        let game = ladder_game();
        let mut app = app_with_puzzle(&game, &["cat", "cot", "cog"]);

        type_word(&mut app, "dog");
        assert_eq!(app.session.moves(), 0);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn input_is_limited_to_word_length() {
        let game = ladder_game();
        let mut app = app_with_puzzle(&game, &["cat", "cot", "cog"]);

        for c in "co7gs".chars() {
            app.push_char(c);
        }
        assert_eq!(app.input_buffer, "cog");
    }

    #[test]
    fn undo_and_hint() {
        let game = ladder_game();
        let mut app = app_with_puzzle(&game, &["cat", "cot", "cog"]);

        type_word(&mut app, "cut");
        app.undo_last();
        assert_eq!(app.session.current().text(), "cat");

        app.show_hint();
        assert_eq!(
            app.messages.last().map(|m| m.text.as_str()),
            Some("Hint: try COT")
        );
    }

    #[test]
    fn messages_are_capped() {
        let game = ladder_game();
        let mut app = App::new(&game).unwrap();
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "5");
    }
}
