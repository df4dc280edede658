//! Type chart and defensive coverage scoring for Pokemon teams.
//!
//! This crate is the pure core of the coverage analyzer: a fixed 18x18
//! effectiveness chart and the engine that scores a team against every
//! attacking type. Nothing here performs I/O or keeps state between calls.
//!
//! # Overview
//!
//! ```text
//! coverdex-roster (pokedex data → Creature)
//!        │
//!        ▼
//! coverdex-coverage (chart + scoring) ← THIS CRATE
//!        │
//!        ├─> coverdex-team (team value object + report)
//!        └─> coverdex-cli (tables)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - the 18 types with the effectiveness chart
//! - [`DefenseTypes`] - a validated 1-2 type defensive typing
//! - [`Creature`] - a roster entry
//! - [`TypeAnalysis`] - one attacking type's bucket counts, scores and [`Rating`]
//! - [`DefensiveProfile`] - a creature's weaknesses, resistances and immunities
//!
//! # Example Usage
//!
//! ```
//! use coverdex_coverage::{
//!     Creature, DefenseTypes, Rating, Type, analyze_team_by_type, compute_multiplier,
//! };
//!
//! assert_eq!(compute_multiplier(Type::Rock, &[Type::Fire, Type::Flying]).unwrap(), 4.0);
//!
//! let blissey = Creature::new("blissey", "Blissey", DefenseTypes::single(Type::Normal));
//! let analysis = analyze_team_by_type(&[blissey]);
//! let ghost = analysis.iter().find(|a| a.attack == Type::Ghost).unwrap();
//! assert_eq!(ghost.rating, Rating::S);
//! ```

pub mod analysis;
pub mod error;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use analysis::{
    Bucket, BucketCounts, Rating, RiskLevel, TypeAnalysis, analyze_defenses, analyze_team_by_type,
};
pub use error::{CoverageError, Result};
pub use query::{DefensiveProfile, classify_creature_types, compute_multiplier, defensive_profile};
pub use types::{
    Creature, DefenseTypes, FormKind, TYPE_CHART, Type, list_types, multiplier, multiplier_by_name,
};
