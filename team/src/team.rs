//! Team selection

use coverdex_coverage::Creature;
use coverdex_roster::RosterRepository;

use crate::TeamError;

/// An ordered selection of up to six creature ids, without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Team {
    ids: Vec<String>,
}

impl Team {
    pub const MAX_SIZE: usize = 6;

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a team from ids, applying the same checks as [`Team::add`]
    pub fn from_ids<I, S>(ids: I) -> Result<Self, TeamError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut team = Self::new();
        for id in ids {
            team.add(id)?;
        }
        Ok(team)
    }

    pub fn add(&mut self, id: impl Into<String>) -> Result<(), TeamError> {
        let id = id.into();
        if self.contains(&id) {
            return Err(TeamError::Duplicate(id));
        }
        if self.ids.len() >= Self::MAX_SIZE {
            return Err(TeamError::Full { max: Self::MAX_SIZE });
        }
        self.ids.push(id);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<(), TeamError> {
        let index = self
            .ids
            .iter()
            .position(|existing| existing == id)
            .ok_or_else(|| TeamError::NotFound(id.to_string()))?;
        self.ids.remove(index);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= Self::MAX_SIZE
    }

    /// Look up every member in the roster, keeping team order.
    ///
    /// Returns the creatures found and the ids the roster does not know.
    pub fn resolve<'r, R: RosterRepository>(&self, roster: &'r R) -> (Vec<&'r Creature>, Vec<String>) {
        let mut found = Vec::with_capacity(self.ids.len());
        let mut missing = Vec::new();

        for id in &self.ids {
            match roster.get(id) {
                Some(creature) => found.push(creature),
                None => missing.push(id.clone()),
            }
        }

        (found, missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverdex_coverage::{DefenseTypes, Type};
    use coverdex_roster::Roster;

    #[test]
    fn test_add_keeps_order() {
        let team = Team::from_ids(["charizard", "blissey", "swampert"]).unwrap();
        assert_eq!(team.ids(), ["charizard", "blissey", "swampert"]);
        assert_eq!(team.len(), 3);
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut team = Team::from_ids(["charizard"]).unwrap();
        assert_eq!(
            team.add("charizard"),
            Err(TeamError::Duplicate("charizard".to_string()))
        );
        assert_eq!(team.len(), 1);
    }

    #[test]
    fn test_add_rejects_seventh() {
        let mut team = Team::from_ids(["a", "b", "c", "d", "e", "f"]).unwrap();
        assert!(team.is_full());
        assert_eq!(team.add("g"), Err(TeamError::Full { max: 6 }));
        assert_eq!(team.len(), 6);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut team = Team::from_ids(["a", "b", "c"]).unwrap();
        team.remove("b").unwrap();
        assert_eq!(team.ids(), ["a", "c"]);
        assert_eq!(team.remove("z"), Err(TeamError::NotFound("z".to_string())));

        team.clear();
        assert!(team.is_empty());
    }

    #[test]
    fn test_resolve_skips_unknown_ids() {
        let roster = Roster::from_creatures([
            Creature::new("blissey", "Blissey", DefenseTypes::single(Type::Normal)),
            Creature::new(
                "charizard",
                "Charizard",
                DefenseTypes::new(&[Type::Fire, Type::Flying]).unwrap(),
            ),
        ]);
        let team = Team::from_ids(["charizard", "missingno", "blissey"]).unwrap();

        let (found, missing) = team.resolve(&roster);
        let ids: Vec<&str> = found.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["charizard", "blissey"]);
        assert_eq!(missing, vec!["missingno".to_string()]);
    }
}
