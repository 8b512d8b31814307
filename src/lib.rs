//! # arith-quiz
//!
//! A ten-question arithmetic quiz for the terminal.
//!
//! The core is [`QuizSession`]: it generates addition and subtraction
//! problems for a [`Difficulty`], allows two attempts per problem, scores
//! 10 points for a first-try answer and 5 for a second-try answer, and ranks
//! the final score. Front ends drive the session and render its state.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use arith_quiz::{Difficulty, Quiz, QuizError, QuizSession};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::new(QuizSession::new()).with_difficulty(Some(Difficulty::Easy));
//!
//!     // Run the quiz in the terminal
//!     if let Some(result) = quiz.run()? {
//!         println!("{} ({})", result.score, result.rank);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod app;
mod error;
mod generator;
mod models;
pub mod plain;
mod session;
pub mod terminal;
mod ui;

use std::io::{BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Feedback};
pub use error::{QuizError, SessionError};
pub use generator::{ProblemSource, RandomProblems};
pub use models::{Difficulty, Operator, Problem, Rank, Screen};
pub use session::{
    AnswerOutcome, FIRST_ATTEMPT_POINTS, MAX_SCORE, QUESTIONS_PER_SESSION, QuestionRecord,
    QuizSession, SECOND_ATTEMPT_POINTS, SessionResult,
};

/// A quiz that can be played in the terminal UI or over plain text streams.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(session: QuizSession) -> Self {
        Self {
            app: App::new(session),
        }
    }

    /// Skip the difficulty menu for the first game.
    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.app = self.app.with_difficulty(difficulty);
        self
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits. The result of the last finished game, if any,
    /// is handed back.
    pub fn run(mut self) -> Result<Option<SessionResult>, QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut self.app)?;
        drop(guard);
        Ok(self.app.into_last_result())
    }

    /// Run the line-oriented variant over the given streams.
    pub fn run_plain<R: BufRead, W: Write>(
        self,
        input: R,
        output: &mut W,
    ) -> Result<Option<SessionResult>, QuizError> {
        let Quiz { app } = self;
        let preset = app.preset_difficulty();
        let mut session = app.into_session();
        plain::run(&mut session, preset, input, output)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code)? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> Result<bool, SessionError> {
    match app.screen {
        Screen::Welcome => handle_welcome_input(app, key),
        Screen::Menu => handle_menu_input(app, key),
        Screen::Question => handle_question_input(app, key),
        Screen::Results => Ok(handle_results_input(app, key)),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> Result<bool, SessionError> {
    match key {
        KeyCode::Enter => {
            app.begin()?;
            Ok(false)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),
        _ => Ok(false),
    }
}

fn handle_menu_input(app: &mut App, key: KeyCode) -> Result<bool, SessionError> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_difficulty(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_difficulty(),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm_difficulty()?,
        KeyCode::Char(c @ '1'..='3') => {
            let difficulty = c.to_string().parse::<Difficulty>()?;
            app.choose_difficulty(difficulty)?;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn handle_question_input(app: &mut App, key: KeyCode) -> Result<bool, SessionError> {
    match key {
        KeyCode::Enter => app.submit_answer()?,
        KeyCode::Backspace => app.pop_input(),
        KeyCode::Char(c) => app.push_input(c),
        KeyCode::Esc => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn handle_results_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.play_again();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}
