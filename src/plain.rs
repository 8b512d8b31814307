//! Line-oriented front end over any reader and writer.
//!
//! Runs the same flow as the terminal UI without taking over the screen,
//! so the quiz can be scripted through stdin.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::app::Feedback;
use crate::error::{QuizError, SessionError};
use crate::models::Difficulty;
use crate::session::{MAX_SCORE, QUESTIONS_PER_SESSION, QuizSession, SessionResult};

/// Play until the user declines another game or input runs out.
///
/// Returns the result of the last game that was played to the end.
pub fn run<R: BufRead, W: Write>(
    session: &mut QuizSession,
    mut preset: Option<Difficulty>,
    mut input: R,
    output: &mut W,
) -> Result<Option<SessionResult>, QuizError> {
    let mut last_result = None;

    writeln!(output, "Welcome to Math Quiz")?;
    writeln!(
        output,
        "Test your skills with {} fun questions.",
        QUESTIONS_PER_SESSION
    )?;

    loop {
        let difficulty = match preset.take() {
            Some(difficulty) => difficulty,
            None => match prompt_difficulty(&mut input, output)? {
                Some(difficulty) => difficulty,
                None => break,
            },
        };

        session.start(difficulty)?;
        writeln!(output)?;

        if !play_questions(session, &mut input, output)? {
            info!(session = %session.id(), "input ended mid-game");
            break;
        }

        let result = session.result()?;
        writeln!(output)?;
        writeln!(output, "Your score: {}/{}", result.score, MAX_SCORE)?;
        writeln!(output, "Rank: {}", result.rank)?;
        last_result = Some(result);

        write!(output, "Play again? [y/N]: ")?;
        output.flush()?;
        match read_line(&mut input)? {
            Some(answer) if is_yes(&answer) => continue,
            _ => break,
        }
    }

    writeln!(output, "Goodbye!")?;
    Ok(last_result)
}

/// Returns `false` if input ran out before the last question.
fn play_questions<R: BufRead, W: Write>(
    session: &mut QuizSession,
    input: &mut R,
    output: &mut W,
) -> Result<bool, QuizError> {
    while !session.is_finished() {
        let problem = session.current_problem()?;
        write!(
            output,
            "Question {}: {} = ",
            session.question_number(),
            problem
        )?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(output)?;
            return Ok(false);
        };

        let feedback = match session.submit_answer(&line) {
            Ok(outcome) => Feedback::from(outcome),
            Err(SessionError::InvalidAnswer(_)) => Feedback::InvalidInput,
            Err(err) => return Err(err.into()),
        };
        writeln!(output, "{}", feedback.message())?;
    }
    Ok(true)
}

fn prompt_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<Difficulty>, QuizError> {
    writeln!(output)?;
    writeln!(output, "DIFFICULTY LEVEL")?;
    for (index, difficulty) in Difficulty::ALL.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, difficulty)?;
    }

    loop {
        write!(output, "Choose [1-{}]: ", Difficulty::ALL.len())?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(output)?;
            return Ok(None);
        };
        match line.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(Some(difficulty)),
            Err(err) => writeln!(output, "{}", err)?,
        }
    }
}

/// `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::generator::ScriptedProblems;
    use crate::models::{Operator, Problem, Rank};

    fn session() -> QuizSession {
        let source = ScriptedProblems::repeating(Problem::new(3, Operator::Add, 5));
        QuizSession::with_source(Box::new(source))
    }

    fn play(preset: Option<Difficulty>, script: &str) -> (Option<SessionResult>, String) {
        let mut session = session();
        let mut output = Vec::new();
        let result = run(&mut session, preset, Cursor::new(script), &mut output).unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_full_game_from_menu() {
        let script = format!("hard\n1\n{}n\n", "8\n".repeat(10));
        let (result, output) = play(None, &script);

        let result = result.unwrap();
        assert_eq!(result.score, 100);
        assert_eq!(result.rank, Rank::APlus);
        assert!(output.contains("unknown difficulty 'hard'"));
        assert!(output.contains("Question 1: 3 + 5 = Well done!"));
        assert!(output.contains("Question 10: 3 + 5 ="));
        assert!(output.contains("Your score: 100/100"));
        assert!(output.contains("Rank: A+"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_feedback_messages() {
        let mut script = String::from("abc\n7\n7\n");
        script.push_str(&"8\n".repeat(9));
        let (result, output) = play(Some(Difficulty::Easy), &script);

        assert!(output.contains("Please enter a valid number"));
        assert!(output.contains("Try again!"));
        assert!(output.contains("Sorry, the correct answer is 8"));
        assert!(!output.contains("DIFFICULTY LEVEL"));

        let result = result.unwrap();
        assert_eq!(result.score, 90);
        assert_eq!(result.rank, Rank::A);
    }

    #[test]
    fn test_play_again_returns_latest_result() {
        let mut script = "8\n".repeat(10);
        script.push_str("y\n2\n");
        script.push_str(&"0\n".repeat(20));
        let (result, output) = play(Some(Difficulty::Easy), &script);

        let result = result.unwrap();
        assert_eq!(result.difficulty, Difficulty::Moderate);
        assert_eq!(result.score, 0);
        assert_eq!(result.rank, Rank::D);
        assert!(output.contains("Your score: 100/100"));
        assert!(output.contains("Your score: 0/100"));
    }

    #[test]
    fn test_input_ending_mid_game() {
        let (result, output) = play(Some(Difficulty::Easy), "8\n8\n");
        assert!(result.is_none());
        assert!(output.contains("Question 3: 3 + 5 ="));
        assert!(!output.contains("Your score"));
    }

    #[test]
    fn test_empty_input_at_menu() {
        let (result, output) = play(None, "");
        assert!(result.is_none());
        assert!(output.contains("DIFFICULTY LEVEL"));
        assert!(output.contains("1. Easy"));
    }
}
