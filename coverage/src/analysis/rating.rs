//! Letter ratings for one attacking type against a team

use super::bucket::BucketCounts;

/// Letter grade summarizing a team's defense against one attacking type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rating {
    #[cfg_attr(feature = "serde", serde(rename = "S+"))]
    SPlus,
    S,
    #[cfg_attr(feature = "serde", serde(rename = "A+"))]
    APlus,
    A,
    #[cfg_attr(feature = "serde", serde(rename = "B+"))]
    BPlus,
    B,
    #[cfg_attr(feature = "serde", serde(rename = "C+"))]
    CPlus,
    C,
    D,
    F,
    E,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::SPlus => "S+",
            Rating::S => "S",
            Rating::APlus => "A+",
            Rating::A => "A",
            Rating::BPlus => "B+",
            Rating::B => "B",
            Rating::CPlus => "C+",
            Rating::C => "C",
            Rating::D => "D",
            Rating::F => "F",
            Rating::E => "E",
        }
    }

    /// Evaluate [`RATING_RULES`] in order; the first matching rule wins
    pub fn assign(counts: &BucketCounts) -> Self {
        let net_score = counts.net_score();
        RATING_RULES
            .iter()
            .find(|rule| (rule.applies)(counts, net_score))
            .map(|rule| rule.rating)
            .unwrap_or(Rating::E)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the rating decision table
pub struct RatingRule {
    pub rating: Rating,
    pub applies: fn(&BucketCounts, i32) -> bool,
}

/// Rating decision table, highest precedence first.
///
/// The F rule sits after D, so it only fires for net scores below -6;
/// anything below -6 that is not F falls through to E.
pub static RATING_RULES: [RatingRule; 10] = [
    RatingRule {
        rating: Rating::SPlus,
        applies: |c, _| c.immune >= 2 || (c.immune >= 1 && c.resist_2x + c.resist_4x >= 2),
    },
    RatingRule {
        rating: Rating::S,
        applies: |c, _| c.immune >= 1 && c.weak_2x == 0 && c.weak_4x == 0,
    },
    RatingRule {
        rating: Rating::APlus,
        applies: |_, net| net >= 6,
    },
    RatingRule {
        rating: Rating::A,
        applies: |_, net| net >= 4,
    },
    RatingRule {
        rating: Rating::BPlus,
        applies: |_, net| net >= 2,
    },
    RatingRule {
        rating: Rating::B,
        applies: |_, net| net >= 0,
    },
    RatingRule {
        rating: Rating::CPlus,
        applies: |_, net| net >= -2,
    },
    RatingRule {
        rating: Rating::C,
        applies: |_, net| net >= -4,
    },
    RatingRule {
        rating: Rating::D,
        applies: |_, net| net >= -6,
    },
    RatingRule {
        rating: Rating::F,
        applies: |c, _| c.weak_4x >= 2 || (c.weak_4x >= 1 && c.weak_2x >= 2),
    },
];
