//! The quiz state machine.
//!
//! A [`QuizSession`] walks through [`QUESTIONS_PER_SESSION`] problems. Each
//! problem allows two attempts: a first-try answer earns
//! [`FIRST_ATTEMPT_POINTS`], a second-try answer earns
//! [`SECOND_ATTEMPT_POINTS`], and a second miss reveals the answer and moves
//! on with nothing awarded.

use serde::Serialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::SessionError;
use crate::generator::{ProblemSource, RandomProblems};
use crate::models::{Difficulty, Problem, Rank};

pub const QUESTIONS_PER_SESSION: u32 = 10;
pub const FIRST_ATTEMPT_POINTS: u32 = 10;
pub const SECOND_ATTEMPT_POINTS: u32 = 5;
pub const MAX_SCORE: u32 = QUESTIONS_PER_SESSION * FIRST_ATTEMPT_POINTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    NotStarted,
    InProgress {
        difficulty: Difficulty,
        /// 1-based number of the question being asked.
        question: u32,
        /// 1 or 2.
        attempt: u8,
        problem: Problem,
    },
    Finished {
        difficulty: Difficulty,
    },
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            SessionState::NotStarted => "not started",
            SessionState::InProgress { .. } => "in progress",
            SessionState::Finished { .. } => "finished",
        }
    }
}

/// What happened to a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Right answer; the session moved on.
    Correct { points: u32 },
    /// Wrong on the first attempt; the same problem is asked again.
    IncorrectRetry,
    /// Wrong on the second attempt; the session moved on.
    IncorrectFinal { correct_answer: i64 },
}

impl AnswerOutcome {
    /// Points this answer added to the score.
    pub fn score_delta(&self) -> u32 {
        match self {
            AnswerOutcome::Correct { points } => *points,
            AnswerOutcome::IncorrectRetry | AnswerOutcome::IncorrectFinal { .. } => 0,
        }
    }

    /// The revealed answer, only present once both attempts are spent.
    pub fn correct_answer(&self) -> Option<i64> {
        match self {
            AnswerOutcome::IncorrectFinal { correct_answer } => Some(*correct_answer),
            _ => None,
        }
    }

    /// Whether the question was resolved and the session advanced.
    pub fn resolves_question(&self) -> bool {
        !matches!(self, AnswerOutcome::IncorrectRetry)
    }
}

/// How a single question went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    pub number: u32,
    pub problem: Problem,
    pub attempts: u8,
    pub points: u32,
}

impl QuestionRecord {
    pub fn is_correct(&self) -> bool {
        self.points > 0
    }
}

/// Final score of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResult {
    pub difficulty: Difficulty,
    pub score: u32,
    pub rank: Rank,
    pub questions: Vec<QuestionRecord>,
}

/// One play-through of the quiz.
pub struct QuizSession {
    id: Uuid,
    state: SessionState,
    score: u32,
    history: Vec<QuestionRecord>,
    source: Box<dyn ProblemSource>,
}

impl QuizSession {
    /// Session drawing problems from an OS-seeded random source.
    pub fn new() -> Self {
        Self::with_source(Box::new(RandomProblems::new()))
    }

    pub fn with_source(source: Box<dyn ProblemSource>) -> Self {
        Self {
            id: Uuid::nil(),
            state: SessionState::NotStarted,
            score: 0,
            history: Vec::new(),
            source,
        }
    }

    /// Begin a play-through. Also valid after the previous one finished,
    /// in which case score and progress start over.
    pub fn start(&mut self, difficulty: Difficulty) -> Result<(), SessionError> {
        if let SessionState::InProgress { .. } = self.state {
            return Err(self.wrong_state("start a new session"));
        }

        self.id = Uuid::new_v4();
        self.score = 0;
        self.history.clear();
        info!(session = %self.id, %difficulty, "session started");

        self.advance(difficulty, 0);
        Ok(())
    }

    /// Drop all progress and go back to the not-started state.
    pub fn reset(&mut self) {
        self.state = SessionState::NotStarted;
        self.score = 0;
        self.history.clear();
    }

    /// Either ask question `answered + 1` or finish.
    fn advance(&mut self, difficulty: Difficulty, answered: u32) {
        if answered >= QUESTIONS_PER_SESSION {
            self.state = SessionState::Finished { difficulty };
            info!(
                session = %self.id,
                score = self.score,
                rank = %Rank::from_score(self.score),
                "session finished"
            );
            return;
        }

        let problem = self.source.generate(difficulty);
        self.state = SessionState::InProgress {
            difficulty,
            question: answered + 1,
            attempt: 1,
            problem,
        };
    }

    pub fn current_problem(&self) -> Result<Problem, SessionError> {
        match self.state {
            SessionState::InProgress { problem, .. } => Ok(problem),
            _ => Err(self.wrong_state("read the current problem")),
        }
    }

    /// Parse raw user input and submit it.
    ///
    /// Unparsable input fails with [`SessionError::InvalidAnswer`] and does
    /// not use up an attempt.
    pub fn submit_answer(&mut self, raw: &str) -> Result<AnswerOutcome, SessionError> {
        self.ensure_accepting_answers()?;

        let trimmed = raw.trim();
        let value = trimmed.parse::<i64>().map_err(|_| {
            warn!(session = %self.id, input = trimmed, "answer is not a number");
            SessionError::InvalidAnswer(trimmed.to_string())
        })?;

        self.submit_value(value)
    }

    pub fn submit_value(&mut self, value: i64) -> Result<AnswerOutcome, SessionError> {
        self.ensure_accepting_answers()?;
        let SessionState::InProgress {
            difficulty,
            question,
            attempt,
            problem,
        } = self.state
        else {
            return Err(self.wrong_state("submit an answer"));
        };

        let correct_answer = problem.correct_answer();
        let outcome = if value == correct_answer {
            let points = if attempt == 1 {
                FIRST_ATTEMPT_POINTS
            } else {
                SECOND_ATTEMPT_POINTS
            };
            self.resolve(difficulty, question, attempt, problem, points);
            AnswerOutcome::Correct { points }
        } else if attempt == 1 {
            self.state = SessionState::InProgress {
                difficulty,
                question,
                attempt: 2,
                problem,
            };
            AnswerOutcome::IncorrectRetry
        } else {
            self.resolve(difficulty, question, attempt, problem, 0);
            AnswerOutcome::IncorrectFinal { correct_answer }
        };

        debug!(
            session = %self.id,
            question,
            attempt,
            value,
            ?outcome,
            score = self.score,
            "answer submitted"
        );
        Ok(outcome)
    }

    fn resolve(
        &mut self,
        difficulty: Difficulty,
        question: u32,
        attempts: u8,
        problem: Problem,
        points: u32,
    ) {
        self.score += points;
        debug_assert!(self.score <= MAX_SCORE);
        self.history.push(QuestionRecord {
            number: question,
            problem,
            attempts,
            points,
        });
        self.advance(difficulty, question);
    }

    fn ensure_accepting_answers(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::InProgress { .. } => Ok(()),
            SessionState::Finished { .. } => Err(SessionError::SessionFinished),
            SessionState::NotStarted => Err(self.wrong_state("submit an answer")),
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Finished { .. })
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self.state, SessionState::InProgress { .. })
    }

    pub fn result(&self) -> Result<SessionResult, SessionError> {
        let SessionState::Finished { difficulty } = self.state else {
            return Err(SessionError::SessionNotFinished);
        };

        Ok(SessionResult {
            difficulty,
            score: self.score,
            rank: Rank::from_score(self.score),
            questions: self.history.clone(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// 1-based number of the question being asked, 0 before the start and
    /// after the finish.
    pub fn question_number(&self) -> u32 {
        match self.state {
            SessionState::InProgress { question, .. } => question,
            _ => 0,
        }
    }

    /// Attempt on the current question (1 or 2), 0 outside a question.
    pub fn attempt(&self) -> u8 {
        match self.state {
            SessionState::InProgress { attempt, .. } => attempt,
            _ => 0,
        }
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        match self.state {
            SessionState::NotStarted => None,
            SessionState::InProgress { difficulty, .. } | SessionState::Finished { difficulty } => {
                Some(difficulty)
            }
        }
    }

    /// Questions resolved so far in this play-through.
    pub fn history(&self) -> &[QuestionRecord] {
        &self.history
    }

    fn wrong_state(&self, operation: &'static str) -> SessionError {
        let state = self.state.name();
        error!(session = %self.id, operation, state, "session used out of order");
        SessionError::WrongState { operation, state }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
