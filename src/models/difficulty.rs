use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SessionError;

/// Difficulty tier, fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Advanced,
}

impl Difficulty {
    /// All tiers in menu order.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::Advanced,
    ];

    /// Inclusive range both operands are drawn from.
    pub fn operand_range(self) -> RangeInclusive<i32> {
        match self {
            Difficulty::Easy => 0..=9,
            Difficulty::Moderate => 10..=99,
            Difficulty::Advanced => 1000..=9999,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the tier name in any case, or its menu number.
impl FromStr for Difficulty {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "easy" => Ok(Difficulty::Easy),
            "2" | "moderate" => Ok(Difficulty::Moderate),
            "3" | "advanced" => Ok(Difficulty::Advanced),
            _ => Err(SessionError::InvalidDifficulty(s.trim().to_string())),
        }
    }
}
