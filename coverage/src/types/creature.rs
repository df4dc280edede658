//! Creature records as supplied by the roster

use crate::error::{CoverageError, Result};

use super::pokemon_type::Type;

/// A validated defensive typing: one or two distinct types, in roster order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DefenseTypes {
    primary: Type,
    secondary: Option<Type>,
}

impl DefenseTypes {
    /// Validate a type list (1 or 2 entries, no duplicate)
    pub fn new(types: &[Type]) -> Result<Self> {
        match *types {
            [primary] => Ok(Self::single(primary)),
            [primary, secondary] if primary == secondary => Err(CoverageError::InvalidCreature(
                format!("duplicate type {}", primary),
            )),
            [primary, secondary] => Ok(Self {
                primary,
                secondary: Some(secondary),
            }),
            [] => Err(CoverageError::InvalidCreature("no types".to_string())),
            _ => Err(CoverageError::InvalidCreature(format!(
                "{} types, at most 2 allowed",
                types.len()
            ))),
        }
    }

    /// Parse and validate a list of type names
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let types = names
            .iter()
            .map(|name| Type::from_name(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(&types)
    }

    pub fn single(primary: Type) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn primary(&self) -> Type {
        self.primary
    }

    pub fn secondary(&self) -> Option<Type> {
        self.secondary
    }

    pub fn is_dual(&self) -> bool {
        self.secondary.is_some()
    }

    /// The types as a slice-like vector, primary first
    pub fn to_vec(&self) -> Vec<Type> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Type> + '_ {
        std::iter::once(self.primary).chain(self.secondary)
    }
}

impl std::fmt::Display for DefenseTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}/{}", self.primary, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}

/// Form category, used only for grouping in the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FormKind {
    #[default]
    Base,
    Mega,
    Gmax,
    Alola,
    Galar,
    Hisui,
    Paldea,
    Form,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Base => "base",
            FormKind::Mega => "mega",
            FormKind::Gmax => "gmax",
            FormKind::Alola => "alola",
            FormKind::Galar => "galar",
            FormKind::Hisui => "hisui",
            FormKind::Paldea => "paldea",
            FormKind::Form => "form",
        }
    }
}

/// A selectable creature. Only `types` takes part in scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Creature {
    /// Stable roster identifier (e.g., "charizardmegax")
    pub id: String,

    /// Display name (e.g., "Charizard-Mega-X")
    pub name: String,

    /// National dex number
    pub num: u16,

    /// Generation the creature is grouped under (1-9)
    pub generation: u8,

    pub form: FormKind,

    /// Base species name, equal to `name` for base forms
    pub base_species: String,

    /// Forme suffix, empty for base forms
    pub forme: String,

    pub types: DefenseTypes,
}

impl Creature {
    /// Create a base-form creature with the given typing
    pub fn new(id: impl Into<String>, name: impl Into<String>, types: DefenseTypes) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            base_species: name.clone(),
            name,
            num: 0,
            generation: 1,
            form: FormKind::Base,
            forme: String::new(),
            types,
        }
    }
}
