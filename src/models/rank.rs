use std::fmt;

use serde::{Serialize, Serializer};

/// Letter grade for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    APlus,
    A,
    B,
    C,
    D,
}

impl Rank {
    /// Thresholds are strict: 90 is an A, 91 is an A+.
    pub fn from_score(score: u32) -> Self {
        if score > 90 {
            Rank::APlus
        } else if score > 80 {
            Rank::A
        } else if score > 70 {
            Rank::B
        } else if score > 60 {
            Rank::C
        } else {
            Rank::D
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rank::APlus => "A+",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_boundaries() {
        assert_eq!(Rank::from_score(100), Rank::APlus);
        assert_eq!(Rank::from_score(91), Rank::APlus);
        assert_eq!(Rank::from_score(90), Rank::A);
        assert_eq!(Rank::from_score(81), Rank::A);
        assert_eq!(Rank::from_score(80), Rank::B);
        assert_eq!(Rank::from_score(71), Rank::B);
        assert_eq!(Rank::from_score(70), Rank::C);
        assert_eq!(Rank::from_score(61), Rank::C);
        assert_eq!(Rank::from_score(60), Rank::D);
        assert_eq!(Rank::from_score(0), Rank::D);
    }

    #[test]
    fn test_rank_text() {
        assert_eq!(Rank::APlus.to_string(), "A+");
        assert_eq!(serde_json::to_string(&Rank::B).unwrap(), "\"B\"");
    }
}
