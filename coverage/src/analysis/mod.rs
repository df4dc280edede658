//! Team coverage scoring
//!
//! For each attacking type the team's multipliers are bucketed, scored,
//! and graded with a letter [`Rating`].

mod bucket;
mod rating;
mod team;

pub use bucket::{Bucket, BucketCounts, RiskLevel};
pub use rating::{RATING_RULES, Rating, RatingRule};
pub use team::{TypeAnalysis, analyze_defenses, analyze_team_by_type};
