//! Generation and form grouping

use coverdex_coverage::{Creature, FormKind};

/// Display labels for generations 1-9
pub const GENERATION_LABELS: [&str; 9] = [
    "Gen 1 - Kanto",
    "Gen 2 - Johto",
    "Gen 3 - Hoenn",
    "Gen 4 - Sinnoh",
    "Gen 5 - Unova",
    "Gen 6 - Kalos",
    "Gen 7 - Alola",
    "Gen 8 - Galar/Hisui",
    "Gen 9 - Paldea",
];

/// Last national dex number of each generation 1-8
const GENERATION_CUTOFFS: [u16; 8] = [151, 251, 386, 493, 649, 721, 809, 905];

/// Generation a dex number belongs to (1-9)
pub fn generation_for_num(num: u16) -> u8 {
    GENERATION_CUTOFFS
        .iter()
        .position(|&last| num <= last)
        .map_or(9, |i| i as u8 + 1)
}

/// Label for a generation, `None` outside 1-9
pub fn generation_label(generation: u8) -> Option<&'static str> {
    GENERATION_LABELS.get(usize::from(generation).checked_sub(1)?).copied()
}

/// Categorize an entry by its id and forme, first match wins.
///
/// Only entries with a forme are checked, so base species whose id happens
/// to contain a marker (Meganium, Yanmega) stay [`FormKind::Base`].
pub fn detect_form(id: &str, forme: &str) -> FormKind {
    if forme.is_empty() {
        return FormKind::Base;
    }

    let id = id.to_lowercase();
    let forme = forme.to_lowercase();

    if id.contains("mega") || forme.starts_with("mega") {
        FormKind::Mega
    } else if id.contains("gmax") || forme == "gmax" {
        FormKind::Gmax
    } else if id.contains("alola") || forme == "alola" {
        FormKind::Alola
    } else if id.contains("galar") || forme == "galar" {
        FormKind::Galar
    } else if id.contains("hisui") || forme == "hisui" {
        FormKind::Hisui
    } else if id.contains("paldea") || forme == "paldea" {
        FormKind::Paldea
    } else {
        FormKind::Form
    }
}

/// Creatures of one generation, sorted by dex number then name
#[derive(Debug, Clone)]
pub struct GenerationGroup<'a> {
    pub generation: u8,
    pub label: &'static str,
    pub members: Vec<&'a Creature>,
}

/// Bucket creatures into the nine generation groups
pub fn group_by_generation<'a>(creatures: impl IntoIterator<Item = &'a Creature>) -> Vec<GenerationGroup<'a>> {
    let mut groups: Vec<GenerationGroup<'a>> = GENERATION_LABELS
        .iter()
        .enumerate()
        .map(|(i, &label)| GenerationGroup {
            generation: i as u8 + 1,
            label,
            members: Vec::new(),
        })
        .collect();

    for creature in creatures {
        // Out-of-range generations land in Gen 1
        let index = usize::from(creature.generation)
            .checked_sub(1)
            .filter(|i| *i < groups.len())
            .unwrap_or(0);
        groups[index].members.push(creature);
    }

    for group in &mut groups {
        group
            .members
            .sort_by(|a, b| a.num.cmp(&b.num).then_with(|| a.name.cmp(&b.name)));
    }

    groups
}
