//! Team selection and coverage reports.
//!
//! [`Team`] is the session-owned selection (up to six ids, no duplicates);
//! [`TeamReport`] resolves it through a roster and runs the coverage engine.

use thiserror::Error;

mod report;
mod team;

pub use report::{MemberProfile, TeamReport};
pub use team::Team;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    #[error("Team is full (max {max})")]
    Full { max: usize },

    #[error("{0} is already on the team")]
    Duplicate(String),

    #[error("{0} is not on the team")]
    NotFound(String),
}
