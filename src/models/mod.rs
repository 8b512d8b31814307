mod difficulty;
mod problem;
mod rank;

pub use difficulty::Difficulty;
pub use problem::{Operator, Problem};
pub use rank::Rank;

/// Which screen the front end is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Menu,
    Question,
    Results,
}
