//! Per-creature matchup helpers

use crate::error::Result;
use crate::types::{DefenseTypes, Type};

/// Combined effectiveness of `attack` against a 1-2 type defender.
///
/// The result is the product of the chart lookups, so a single type
/// contributes its own multiplier and a dual type multiplies both.
pub fn compute_multiplier(attack: Type, defense_types: &[Type]) -> Result<f32> {
    let defense = DefenseTypes::new(defense_types)?;
    Ok(defense_multiplier(attack, &defense))
}

/// Same as [`compute_multiplier`] for an already validated typing
pub fn defense_multiplier(attack: Type, defense: &DefenseTypes) -> f32 {
    defense.iter().map(|t| attack.multiplier(t)).product()
}

/// A creature's defensive profile against all 18 attacking types.
///
/// Each list keeps canonical type order. Types with a neutral (1x)
/// multiplier appear in none of them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DefensiveProfile {
    /// Attacking types dealing more than 1x
    pub weaknesses: Vec<Type>,

    /// Attacking types dealing between 0x and 1x (exclusive)
    pub resistances: Vec<Type>,

    /// Attacking types dealing 0x
    pub immunities: Vec<Type>,
}

impl DefensiveProfile {
    /// Attacking types absent from all three lists
    pub fn neutral(&self) -> Vec<Type> {
        Type::all()
            .iter()
            .copied()
            .filter(|t| {
                !self.weaknesses.contains(t)
                    && !self.resistances.contains(t)
                    && !self.immunities.contains(t)
            })
            .collect()
    }
}

/// Split the 18 attacking types into weaknesses, resistances and immunities
pub fn classify_creature_types(defense_types: &[Type]) -> Result<DefensiveProfile> {
    let defense = DefenseTypes::new(defense_types)?;
    Ok(defensive_profile(&defense))
}

/// Same as [`classify_creature_types`] for an already validated typing
pub fn defensive_profile(defense: &DefenseTypes) -> DefensiveProfile {
    let mut profile = DefensiveProfile::default();

    for &attack in Type::all() {
        let eff = defense_multiplier(attack, defense);
        if eff == 0.0 {
            profile.immunities.push(attack);
        } else if eff < 1.0 {
            profile.resistances.push(attack);
        } else if eff > 1.0 {
            profile.weaknesses.push(attack);
        }
    }

    profile
}
