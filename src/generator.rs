//! Problem generation.
//!
//! [`QuizSession`](crate::QuizSession) asks a [`ProblemSource`] for a new
//! problem each time it moves to the next question. [`RandomProblems`] is the
//! real source; tests substitute a scripted one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::models::{Difficulty, Operator, Problem};

/// Anything that can hand out problems for a difficulty tier.
pub trait ProblemSource {
    fn generate(&mut self, difficulty: Difficulty) -> Problem;
}

/// Draws operands uniformly from the tier's range and picks `+` or `-`
/// with equal probability.
pub struct RandomProblems {
    rng: StdRng,
}

impl RandomProblems {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomProblems {
    fn default() -> Self {
        Self::new()
    }
}

impl ProblemSource for RandomProblems {
    fn generate(&mut self, difficulty: Difficulty) -> Problem {
        let range = difficulty.operand_range();
        let left = self.rng.random_range(range.clone());
        let right = self.rng.random_range(range);
        let operator = if self.rng.random_bool(0.5) {
            Operator::Add
        } else {
            Operator::Subtract
        };

        let problem = Problem::new(left, operator, right);
        debug!(%difficulty, %problem, "generated problem");
        problem
    }
}

/// Hands out a fixed list of problems in order, ignoring the difficulty.
#[cfg(test)]
pub(crate) struct ScriptedProblems {
    problems: Vec<Problem>,
    next: usize,
}

#[cfg(test)]
impl ScriptedProblems {
    pub(crate) fn new(problems: Vec<Problem>) -> Self {
        Self { problems, next: 0 }
    }

    /// The same problem for every question.
    pub(crate) fn repeating(problem: Problem) -> Self {
        Self::new(vec![problem])
    }
}

#[cfg(test)]
impl ProblemSource for ScriptedProblems {
    fn generate(&mut self, _difficulty: Difficulty) -> Problem {
        let problem = self.problems[self.next % self.problems.len()];
        self.next += 1;
        problem
    }
}
