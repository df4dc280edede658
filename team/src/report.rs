//! Coverage report for a team

use coverdex_coverage::{Creature, DefensiveProfile, TypeAnalysis, analyze_team_by_type, defensive_profile};
use coverdex_roster::RosterRepository;

use crate::Team;

/// One team member with its individual defensive profile
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MemberProfile {
    pub creature: Creature,
    pub profile: DefensiveProfile,
}

/// Everything the presentation layer shows for a team
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TeamReport {
    /// One row per attacking type, alphabetical
    pub analysis: Vec<TypeAnalysis>,

    /// Team members in team order
    pub members: Vec<MemberProfile>,

    /// Team ids the roster could not resolve
    pub missing: Vec<String>,
}

impl TeamReport {
    /// Resolve the team through the roster and score it.
    ///
    /// Unknown ids are left out of the analysis and listed in `missing`.
    pub fn build<R: RosterRepository>(team: &Team, roster: &R) -> Self {
        let (found, missing) = team.resolve(roster);
        for id in &missing {
            tracing::warn!(id = %id, "Team member not found in roster, skipping");
        }

        let creatures: Vec<Creature> = found.into_iter().cloned().collect();
        let analysis = analyze_team_by_type(&creatures);
        let members = creatures
            .into_iter()
            .map(|creature| MemberProfile {
                profile: defensive_profile(&creature.types),
                creature,
            })
            .collect();

        Self {
            analysis,
            members,
            missing,
        }
    }

    /// The analysis row for one attacking type
    pub fn row(&self, attack: coverdex_coverage::Type) -> Option<&TypeAnalysis> {
        self.analysis.iter().find(|a| a.attack == attack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverdex_coverage::{DefenseTypes, Rating, Type};
    use coverdex_roster::Roster;

    fn roster() -> Roster {
        Roster::from_creatures([
            Creature::new("blissey", "Blissey", DefenseTypes::single(Type::Normal)),
            Creature::new(
                "charizard",
                "Charizard",
                DefenseTypes::new(&[Type::Fire, Type::Flying]).unwrap(),
            ),
            Creature::new(
                "swampert",
                "Swampert",
                DefenseTypes::new(&[Type::Water, Type::Ground]).unwrap(),
            ),
        ])
    }

    #[test]
    fn test_empty_team_report() {
        let report = TeamReport::build(&Team::new(), &roster());
        assert_eq!(report.analysis.len(), 18);
        assert!(report.members.is_empty());
        assert!(report.analysis.iter().all(|a| a.rating == Rating::B));
    }

    #[test]
    fn test_report_members_and_rows() {
        let team = Team::from_ids(["charizard", "blissey"]).unwrap();
        let report = TeamReport::build(&team, &roster());

        assert_eq!(report.members.len(), 2);
        assert_eq!(report.members[0].creature.id, "charizard");
        assert_eq!(report.members[0].profile.immunities, vec![Type::Ground]);
        assert_eq!(report.members[1].profile.immunities, vec![Type::Ghost]);
        assert_eq!(report.members[1].profile.weaknesses, vec![Type::Fighting]);

        let rock = report.row(Type::Rock).unwrap();
        assert_eq!(rock.counts.weak_4x, 1);
        assert_eq!(rock.counts.neutral, 1);

        // Charizard is immune to Ground; Blissey takes it neutrally
        let ground = report.row(Type::Ground).unwrap();
        assert_eq!(ground.rating, Rating::S);
    }

    #[test]
    fn test_missing_ids_are_reported() {
        let team = Team::from_ids(["swampert", "pikachu"]).unwrap();
        let report = TeamReport::build(&team, &roster());

        assert_eq!(report.missing, vec!["pikachu".to_string()]);
        assert_eq!(report.members.len(), 1);
        for row in &report.analysis {
            assert_eq!(row.counts.total(), 1);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_serializes() {
        let team = Team::from_ids(["blissey"]).unwrap();
        let report = TeamReport::build(&team, &roster());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["analysis"][0]["attack"], "Bug");
        assert_eq!(json["members"][0]["creature"]["name"], "Blissey");
    }
}
