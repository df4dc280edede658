//! Domain types for coverage analysis

mod creature;
mod pokemon_type;

pub use creature::{Creature, DefenseTypes, FormKind};
pub use pokemon_type::{TYPE_CHART, Type, list_types, multiplier, multiplier_by_name};
