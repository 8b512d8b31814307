//! Error types for the quiz core and its runners.

use std::io;

use thiserror::Error;

/// Errors raised by [`QuizSession`](crate::QuizSession) and input parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Text that does not name one of the difficulty tiers.
    #[error("unknown difficulty '{0}' (expected easy, moderate or advanced)")]
    InvalidDifficulty(String),

    /// Answer text that does not parse as a whole number.
    #[error("'{0}' is not a whole number")]
    InvalidAnswer(String),

    /// An operation was invoked outside the state it is valid in.
    #[error("cannot {operation} while the session is {state}")]
    WrongState {
        operation: &'static str,
        state: &'static str,
    },

    /// An answer was submitted after the last question was resolved.
    #[error("the session is finished and accepts no more answers")]
    SessionFinished,

    /// The result was requested before the last question was resolved.
    #[error("the session has not finished yet")]
    SessionNotFinished,
}

impl SessionError {
    /// Returns `true` if the caller can carry on after this error.
    ///
    /// `WrongState` means the caller drove the session out of order and
    /// must not be ignored.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SessionError::WrongState { .. })
    }
}

/// Error type for running a quiz front end.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The session rejected an operation the front end cannot handle.
    #[error("quiz session error: {0}")]
    Session(#[from] SessionError),

    /// IO error while talking to the terminal or the streams.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to encode the session summary.
    #[error("failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_state_is_not_recoverable() {
        let err = SessionError::WrongState {
            operation: "submit an answer",
            state: "not started",
        };
        assert!(!err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "cannot submit an answer while the session is not started"
        );

        assert!(SessionError::InvalidAnswer("abc".into()).is_recoverable());
        assert!(SessionError::SessionNotFinished.is_recoverable());
    }

    #[test]
    fn test_quiz_error_wraps_session_error() {
        let err: QuizError = SessionError::SessionFinished.into();
        assert!(matches!(err, QuizError::Session(SessionError::SessionFinished)));
    }
}
