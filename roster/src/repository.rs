//! Roster storage and lookup

use std::collections::HashMap;
use std::path::Path;

use coverdex_coverage::Creature;
use serde_json::Value;

use crate::generation::{GenerationGroup, group_by_generation};
use crate::pokedex::{PokedexEntry, to_id};
use crate::{RosterError, RosterOptions};

/// Read-only access to creatures by id
pub trait RosterRepository {
    fn get(&self, id: &str) -> Option<&Creature>;

    fn iter(&self) -> impl Iterator<Item = &Creature>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The full creature catalog, loaded once and never mutated
#[derive(Debug, Clone, Default)]
pub struct Roster {
    creatures: HashMap<String, Creature>,
}

impl Roster {
    /// Build from already validated creatures. Later duplicates replace earlier ones.
    pub fn from_creatures(creatures: impl IntoIterator<Item = Creature>) -> Self {
        Self {
            creatures: creatures.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }

    /// Parse a pokedex document: a JSON object keyed by creature id.
    ///
    /// Entries that are excluded or malformed are skipped and logged; only
    /// a document that is not valid JSON or not an object fails.
    pub fn from_json_str(json: &str, options: &RosterOptions) -> Result<Self, RosterError> {
        let document: Value = serde_json::from_str(json)?;
        let Value::Object(entries) = document else {
            return Err(RosterError::NotAnObject);
        };

        let total = entries.len();
        let mut creatures = HashMap::with_capacity(total);

        for (id, raw) in entries {
            let entry: PokedexEntry = match serde_json::from_value(raw) {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "Skipping unreadable pokedex entry");
                    continue;
                }
            };

            match entry.into_creature(&id, options) {
                Ok(creature) => {
                    creatures.insert(id, creature);
                }
                Err(skip) if skip.is_malformed() => {
                    tracing::warn!(id = %id, reason = %skip, "Skipping malformed creature");
                }
                Err(skip) => {
                    tracing::trace!(id = %id, reason = %skip, "Excluded pokedex entry");
                }
            }
        }

        tracing::debug!(loaded = creatures.len(), total, "Roster loaded");
        Ok(Self { creatures })
    }

    /// Read and parse a pokedex file
    pub fn load(path: impl AsRef<Path>, options: &RosterOptions) -> Result<Self, RosterError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json, options)
    }

    /// Look up by id, falling back to the normalized form of a display name
    pub fn find(&self, query: &str) -> Option<&Creature> {
        self.creatures
            .get(query)
            .or_else(|| self.creatures.get(&to_id(query)))
    }

    /// Creatures grouped into generations 1-9
    pub fn by_generation(&self) -> Vec<GenerationGroup<'_>> {
        group_by_generation(self.creatures.values())
    }

    /// Every creature ordered by display name, then id
    pub fn sorted_by_name(&self) -> Vec<&Creature> {
        let mut all: Vec<&Creature> = self.creatures.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        all
    }
}

impl RosterRepository for Roster {
    fn get(&self, id: &str) -> Option<&Creature> {
        self.creatures.get(id)
    }

    fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.values()
    }

    fn len(&self) -> usize {
        self.creatures.len()
    }
}
