//! Matchup queries for individual creatures
//!
//! Multiplier computation and the weakness/resistance/immunity breakdown
//! used to render a single creature's defensive profile.

mod matchup;

pub use matchup::{
    DefensiveProfile, classify_creature_types, compute_multiplier, defense_multiplier,
    defensive_profile,
};
