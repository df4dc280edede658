//! Pokedex loading and roster lookup.
//!
//! Reads a Showdown-style pokedex document (a JSON object keyed by id)
//! into validated [`Creature`](coverdex_coverage::Creature) records held
//! in a read-only [`Roster`]. Callers receive the roster by injection and
//! look creatures up through [`RosterRepository`].

use thiserror::Error;

pub mod generation;
pub mod pokedex;
mod repository;

pub use generation::{
    GENERATION_LABELS, GenerationGroup, detect_form, generation_for_num, generation_label,
};
pub use pokedex::{PokedexEntry, Skip, to_id};
pub use repository::{Roster, RosterRepository};

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read pokedex: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pokedex JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pokedex document is not a JSON object")]
    NotAnObject,
}

/// Roster loading options
#[derive(Debug, Clone)]
pub struct RosterOptions {
    /// `isNonstandard` tags that are still loaded; any other tag excludes the entry
    pub allowed_nonstandard: Vec<String>,
}

impl RosterOptions {
    pub fn accepts_nonstandard(&self, tag: &str) -> bool {
        self.allowed_nonstandard.iter().any(|allowed| allowed == tag)
    }
}

impl Default for RosterOptions {
    fn default() -> Self {
        Self {
            allowed_nonstandard: vec!["Past".to_string(), "Unobtainable".to_string()],
        }
    }
}
