use tracing::debug;

use crate::error::SessionError;
use crate::models::{Difficulty, Screen};
use crate::session::{AnswerOutcome, QuizSession, SessionResult};

const MAX_INPUT_LENGTH: usize = 12;

/// Message shown under the question after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    WellDone,
    TryAgain,
    Revealed(i64),
    InvalidInput,
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::WellDone => "Well done!".to_string(),
            Feedback::TryAgain => "Try again!".to_string(),
            Feedback::Revealed(answer) => format!("Sorry, the correct answer is {}", answer),
            Feedback::InvalidInput => "Please enter a valid number".to_string(),
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Feedback::WellDone)
    }
}

impl From<AnswerOutcome> for Feedback {
    fn from(outcome: AnswerOutcome) -> Self {
        match outcome {
            AnswerOutcome::Correct { .. } => Feedback::WellDone,
            AnswerOutcome::IncorrectRetry => Feedback::TryAgain,
            AnswerOutcome::IncorrectFinal { correct_answer } => Feedback::Revealed(correct_answer),
        }
    }
}

/// Screen state of the terminal front end around one owned session.
pub struct App {
    pub screen: Screen,
    session: QuizSession,
    preset_difficulty: Option<Difficulty>,
    selected_difficulty: usize,
    input: String,
    feedback: Option<Feedback>,
    last_result: Option<SessionResult>,
    result_scroll: usize,
}

impl App {
    pub fn new(session: QuizSession) -> Self {
        Self {
            screen: Screen::Welcome,
            session,
            preset_difficulty: None,
            selected_difficulty: 0,
            input: String::new(),
            feedback: None,
            last_result: None,
            result_scroll: 0,
        }
    }

    /// Skip the difficulty menu on the first game.
    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.preset_difficulty = difficulty;
        if let Some(difficulty) = difficulty {
            self.selected_difficulty = Difficulty::ALL
                .iter()
                .position(|d| *d == difficulty)
                .unwrap_or(0);
        }
        self
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn selected_difficulty(&self) -> Difficulty {
        Difficulty::ALL[self.selected_difficulty]
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn last_result(&self) -> Option<&SessionResult> {
        self.last_result.as_ref()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Leave the welcome screen.
    pub fn begin(&mut self) -> Result<(), SessionError> {
        match self.preset_difficulty.take() {
            Some(difficulty) => self.choose_difficulty(difficulty),
            None => {
                self.screen = Screen::Menu;
                Ok(())
            }
        }
    }

    pub fn select_next_difficulty(&mut self) {
        self.selected_difficulty = (self.selected_difficulty + 1) % Difficulty::ALL.len();
    }

    pub fn select_previous_difficulty(&mut self) {
        let count = Difficulty::ALL.len();
        self.selected_difficulty = (self.selected_difficulty + count - 1) % count;
    }

    pub fn confirm_difficulty(&mut self) -> Result<(), SessionError> {
        self.choose_difficulty(self.selected_difficulty())
    }

    pub fn choose_difficulty(&mut self, difficulty: Difficulty) -> Result<(), SessionError> {
        self.session.start(difficulty)?;
        self.screen = Screen::Question;
        self.input.clear();
        self.feedback = None;
        self.result_scroll = 0;
        Ok(())
    }

    /// Digits anywhere, a minus sign only in front.
    pub fn push_input(&mut self, c: char) {
        let accepted = c.is_ascii_digit() || (c == '-' && self.input.is_empty());
        if accepted && self.input.len() < MAX_INPUT_LENGTH {
            self.input.push(c);
        }
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    /// Submit the typed answer.
    ///
    /// Unparsable input only produces feedback; any other session error is
    /// returned to the caller.
    pub fn submit_answer(&mut self) -> Result<(), SessionError> {
        let outcome = match self.session.submit_answer(&self.input) {
            Ok(outcome) => outcome,
            Err(SessionError::InvalidAnswer(_)) => {
                self.feedback = Some(Feedback::InvalidInput);
                self.input.clear();
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        self.feedback = Some(outcome.into());
        self.input.clear();

        if self.session.is_finished() {
            let result = self.session.result()?;
            debug!(score = result.score, rank = %result.rank, "showing results");
            self.last_result = Some(result);
            self.screen = Screen::Results;
        }
        Ok(())
    }

    pub fn play_again(&mut self) {
        self.screen = Screen::Menu;
        self.feedback = None;
        self.result_scroll = 0;
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self
            .last_result
            .as_ref()
            .map(|result| result.questions.len().saturating_sub(1))
            .unwrap_or(0);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn preset_difficulty(&self) -> Option<Difficulty> {
        self.preset_difficulty
    }

    /// Give up the app and keep only the last finished result.
    pub fn into_last_result(self) -> Option<SessionResult> {
        self.last_result
    }

    pub fn into_session(self) -> QuizSession {
        self.session
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(QuizSession::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ScriptedProblems;
    use crate::models::{Operator, Problem, Rank};

    fn app() -> App {
        let source = ScriptedProblems::repeating(Problem::new(3, Operator::Add, 5));
        App::new(QuizSession::with_source(Box::new(source)))
    }

    fn type_answer(app: &mut App, text: &str) {
        for c in text.chars() {
            app.push_input(c);
        }
    }

    #[test]
    fn test_welcome_leads_to_menu() {
        let mut app = app();
        assert_eq!(app.screen, Screen::Welcome);
        app.begin().unwrap();
        assert_eq!(app.screen, Screen::Menu);
        assert!(!app.session().is_in_progress());
    }

    #[test]
    fn test_preset_difficulty_skips_menu_once() {
        let mut app = app().with_difficulty(Some(Difficulty::Advanced));
        app.begin().unwrap();
        assert_eq!(app.screen, Screen::Question);
        assert_eq!(app.session().difficulty(), Some(Difficulty::Advanced));
        assert_eq!(app.selected_difficulty(), Difficulty::Advanced);
    }

    #[test]
    fn test_menu_selection_wraps() {
        let mut app = app();
        assert_eq!(app.selected_difficulty(), Difficulty::Easy);
        app.select_previous_difficulty();
        assert_eq!(app.selected_difficulty(), Difficulty::Advanced);
        app.select_next_difficulty();
        app.select_next_difficulty();
        assert_eq!(app.selected_difficulty(), Difficulty::Moderate);

        app.confirm_difficulty().unwrap();
        assert_eq!(app.screen, Screen::Question);
        assert_eq!(app.session().difficulty(), Some(Difficulty::Moderate));
    }

    #[test]
    fn test_input_filtering() {
        let mut app = app();
        type_answer(&mut app, "-1a2-3");
        assert_eq!(app.input(), "-123");
        app.pop_input();
        assert_eq!(app.input(), "-12");
        type_answer(&mut app, "99999999999999");
        assert_eq!(app.input().len(), MAX_INPUT_LENGTH);
    }

    #[test]
    fn test_feedback_follows_outcomes() {
        let mut app = app();
        app.choose_difficulty(Difficulty::Easy).unwrap();

        app.submit_answer().unwrap();
        assert_eq!(app.feedback(), Some(Feedback::InvalidInput));
        assert_eq!(app.session().attempt(), 1);

        type_answer(&mut app, "7");
        app.submit_answer().unwrap();
        assert_eq!(app.feedback(), Some(Feedback::TryAgain));
        assert_eq!(app.input(), "");

        type_answer(&mut app, "7");
        app.submit_answer().unwrap();
        assert_eq!(app.feedback(), Some(Feedback::Revealed(8)));
        assert_eq!(
            app.feedback().unwrap().message(),
            "Sorry, the correct answer is 8"
        );

        type_answer(&mut app, "8");
        app.submit_answer().unwrap();
        assert_eq!(app.feedback(), Some(Feedback::WellDone));
        assert_eq!(app.session().score(), 10);
        assert_eq!(app.session().question_number(), 3);
    }

    #[test]
    fn test_finishing_shows_results_and_play_again() {
        let mut app = app();
        app.choose_difficulty(Difficulty::Easy).unwrap();
        for _ in 0..10 {
            type_answer(&mut app, "8");
            app.submit_answer().unwrap();
        }

        assert_eq!(app.screen, Screen::Results);
        let result = app.last_result().unwrap();
        assert_eq!(result.score, 100);
        assert_eq!(result.rank, Rank::APlus);

        app.scroll_results_down();
        app.scroll_results_down();
        assert_eq!(app.result_scroll(), 2);
        app.scroll_results_up();
        assert_eq!(app.result_scroll(), 1);

        app.play_again();
        assert_eq!(app.screen, Screen::Menu);
        app.confirm_difficulty().unwrap();
        assert_eq!(app.session().score(), 0);
        assert_eq!(app.session().question_number(), 1);
        assert!(app.last_result().is_some());
    }

    #[test]
    fn test_submit_before_start_is_an_error() {
        let mut app = app();
        type_answer(&mut app, "8");
        let err = app.submit_answer().unwrap_err();
        assert!(matches!(err, SessionError::WrongState { .. }));
    }
}
