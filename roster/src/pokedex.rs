//! Showdown pokedex entries → creature records

use coverdex_coverage::{Creature, DefenseTypes, FormKind};
use serde::Deserialize;

use crate::generation::{detect_form, generation_for_num};
use crate::RosterOptions;

/// One entry of the pokedex document, keyed by id in the enclosing object
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokedexEntry {
    #[serde(default)]
    pub num: i32,

    pub name: Option<String>,

    pub types: Option<Vec<String>>,

    #[serde(default)]
    pub base_species: String,

    #[serde(default)]
    pub forme: String,

    pub is_nonstandard: Option<String>,
}

/// Why an entry did not become a creature
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// No `types` field, not a real species
    NoTypes,
    /// Dex number zero or negative
    NoDexNumber,
    /// Nonstandard tag not accepted by the options
    Nonstandard(String),
    /// Types present but not a valid 1-2 type combination
    Malformed(coverdex_coverage::CoverageError),
}

impl Skip {
    /// Excluded for bad data rather than by filtering
    pub fn is_malformed(&self) -> bool {
        matches!(self, Skip::Malformed(_))
    }
}

impl std::fmt::Display for Skip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Skip::NoTypes => write!(f, "no types"),
            Skip::NoDexNumber => write!(f, "no dex number"),
            Skip::Nonstandard(tag) => write!(f, "nonstandard ({})", tag),
            Skip::Malformed(e) => write!(f, "{}", e),
        }
    }
}

impl PokedexEntry {
    /// Convert into a creature, or report why the entry is excluded
    pub fn into_creature(self, id: &str, options: &RosterOptions) -> Result<Creature, Skip> {
        let types = self.types.ok_or(Skip::NoTypes)?;

        if let Some(tag) = self.is_nonstandard
            && !options.accepts_nonstandard(&tag)
        {
            return Err(Skip::Nonstandard(tag));
        }

        let num = u16::try_from(self.num)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(Skip::NoDexNumber)?;

        let types = DefenseTypes::from_names(types.as_slice()).map_err(Skip::Malformed)?;

        let name = self.name.unwrap_or_else(|| title_case(id));
        let base_species = if self.base_species.is_empty() {
            name.clone()
        } else {
            self.base_species
        };

        let mut generation = generation_for_num(num);
        let form = detect_form(id, &self.forme);
        if let Some(form_generation) = form_generation(form) {
            generation = form_generation;
        }

        Ok(Creature {
            id: id.to_string(),
            name,
            num,
            generation,
            form,
            base_species,
            forme: self.forme,
            types,
        })
    }
}

/// Regional and battle-gimmick forms are grouped with the generation that introduced them
fn form_generation(form: FormKind) -> Option<u8> {
    match form {
        FormKind::Mega => Some(6),
        FormKind::Gmax | FormKind::Galar | FormKind::Hisui => Some(8),
        FormKind::Alola => Some(7),
        FormKind::Paldea => Some(9),
        FormKind::Base | FormKind::Form => None,
    }
}

/// Normalize a name to a roster id: lowercase ASCII letters and digits only
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn title_case(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverdex_coverage::Type;

    fn entry(json: &str) -> PokedexEntry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_base_entry() {
        let creature = entry(r#"{"num": 6, "name": "Charizard", "types": ["Fire", "Flying"]}"#)
            .into_creature("charizard", &RosterOptions::default())
            .unwrap();

        assert_eq!(creature.name, "Charizard");
        assert_eq!(creature.num, 6);
        assert_eq!(creature.generation, 1);
        assert_eq!(creature.form, FormKind::Base);
        assert_eq!(creature.base_species, "Charizard");
        assert_eq!(creature.types.to_vec(), vec![Type::Fire, Type::Flying]);
    }

    #[test]
    fn test_mega_moves_to_gen_6() {
        let creature = entry(
            r#"{"num": 6, "name": "Charizard-Mega-X", "baseSpecies": "Charizard",
                "forme": "Mega-X", "types": ["Fire", "Dragon"]}"#,
        )
        .into_creature("charizardmegax", &RosterOptions::default())
        .unwrap();

        assert_eq!(creature.form, FormKind::Mega);
        assert_eq!(creature.generation, 6);
        assert_eq!(creature.base_species, "Charizard");
    }

    #[test]
    fn test_skips_missing_types() {
        let result = entry(r#"{"num": 1, "name": "Missingno"}"#)
            .into_creature("missingno", &RosterOptions::default());
        assert_eq!(result, Err(Skip::NoTypes));
    }

    #[test]
    fn test_skips_non_positive_num() {
        let result = entry(r#"{"num": -5, "name": "Syclant", "types": ["Ice", "Bug"]}"#)
            .into_creature("syclant", &RosterOptions::default());
        assert_eq!(result, Err(Skip::NoDexNumber));
    }

    #[test]
    fn test_nonstandard_filter() {
        let options = RosterOptions::default();

        let past = entry(
            r#"{"num": 25, "name": "Pikachu-Cosplay", "forme": "Cosplay",
                "types": ["Electric"], "isNonstandard": "Past"}"#,
        )
        .into_creature("pikachucosplay", &options);
        assert!(past.is_ok());

        let cap = entry(r#"{"num": 1, "name": "X", "types": ["Ice"], "isNonstandard": "CAP"}"#)
            .into_creature("x", &options);
        assert_eq!(cap, Err(Skip::Nonstandard("CAP".to_string())));
    }

    #[test]
    fn test_malformed_types() {
        let result = entry(r#"{"num": 1, "name": "X", "types": ["Ice", "Sound"]}"#)
            .into_creature("x", &RosterOptions::default());
        assert!(matches!(result, Err(Skip::Malformed(_))));

        let result = entry(r#"{"num": 1, "name": "X", "types": []}"#)
            .into_creature("x", &RosterOptions::default());
        assert!(matches!(result, Err(Skip::Malformed(_))));
    }

    #[test]
    fn test_name_defaults_to_title_cased_id() {
        let creature = entry(r#"{"num": 137, "types": ["Normal"]}"#)
            .into_creature("porygon", &RosterOptions::default())
            .unwrap();
        assert_eq!(creature.name, "Porygon");
    }

    #[test]
    fn test_to_id() {
        assert_eq!(to_id("Mr. Mime"), "mrmime");
        assert_eq!(to_id("Charizard-Mega-X"), "charizardmegax");
        assert_eq!(to_id("Farfetch'd"), "farfetchd");
    }
}
