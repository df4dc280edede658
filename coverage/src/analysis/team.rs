//! Team-wide analysis by attacking type

use crate::query::defense_multiplier;
use crate::types::{Creature, DefenseTypes, Type};

use super::bucket::{Bucket, BucketCounts, RiskLevel};
use super::rating::Rating;

/// How a team holds up against one attacking type
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeAnalysis {
    /// The attacking type
    pub attack: Type,

    pub counts: BucketCounts,

    pub defense_score: i32,
    pub vulnerability_score: i32,
    pub net_score: i32,

    pub rating: Rating,

    /// Weighted exposure, see [`BucketCounts::risk`]
    pub risk: i32,

    /// Highest multiplier on the team (1.0 for an empty team)
    pub worst: f32,

    /// Lowest multiplier on the team (1.0 for an empty team)
    pub best: f32,
}

impl TypeAnalysis {
    fn from_multipliers(attack: Type, multipliers: &[f32]) -> Self {
        let mut counts = BucketCounts::default();
        for &m in multipliers {
            match Bucket::from_multiplier(m) {
                Some(bucket) => counts.record(bucket),
                None => tracing::warn!(
                    attack = %attack,
                    multiplier = m,
                    "Multiplier outside known buckets, not counted"
                ),
            }
        }

        let worst = multipliers.iter().copied().reduce(f32::max).unwrap_or(1.0);
        let best = multipliers.iter().copied().reduce(f32::min).unwrap_or(1.0);

        Self {
            attack,
            counts,
            defense_score: counts.defense_score(),
            vulnerability_score: counts.vulnerability_score(),
            net_score: counts.net_score(),
            rating: Rating::assign(&counts),
            risk: counts.risk(),
            worst,
            best,
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_risk(self.risk)
    }
}

/// Analyze a team against every attacking type.
///
/// Returns 18 rows sorted alphabetically by attacking type name.
pub fn analyze_team_by_type(team: &[Creature]) -> Vec<TypeAnalysis> {
    let defenses: Vec<DefenseTypes> = team.iter().map(|c| c.types).collect();
    analyze_defenses(&defenses)
}

/// [`analyze_team_by_type`] over bare typings
pub fn analyze_defenses(defenses: &[DefenseTypes]) -> Vec<TypeAnalysis> {
    Type::alphabetical()
        .into_iter()
        .map(|attack| {
            let multipliers: Vec<f32> = defenses
                .iter()
                .map(|d| defense_multiplier(attack, d))
                .collect();
            TypeAnalysis::from_multipliers(attack, &multipliers)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature(id: &str, types: &[Type]) -> Creature {
        Creature::new(id, id, DefenseTypes::new(types).unwrap())
    }

    fn row(analysis: &[TypeAnalysis], attack: Type) -> &TypeAnalysis {
        analysis.iter().find(|a| a.attack == attack).unwrap()
    }

    #[test]
    fn test_empty_team() {
        let analysis = analyze_team_by_type(&[]);
        assert_eq!(analysis.len(), 18);
        for a in &analysis {
            assert_eq!(a.counts, BucketCounts::default());
            assert_eq!(a.net_score, 0);
            assert_eq!(a.rating, Rating::B);
            assert_eq!(a.worst, 1.0);
            assert_eq!(a.best, 1.0);
        }
    }

    #[test]
    fn test_sorted_alphabetically() {
        let analysis = analyze_team_by_type(&[creature("pikachu", &[Type::Electric])]);
        let names: Vec<&str> = analysis.iter().map(|a| a.attack.as_str()).collect();

        let mut expected: Vec<&str> = Type::all().iter().map(|t| t.as_str()).collect();
        expected.sort();
        assert_eq!(names, expected);
        assert_eq!(names[0], "Bug");
        assert_eq!(names[17], "Water");
    }

    #[test]
    fn test_charizard_vs_rock() {
        let team = [creature("charizard", &[Type::Fire, Type::Flying])];
        let analysis = analyze_team_by_type(&team);
        let rock = row(&analysis, Type::Rock);

        assert_eq!(
            rock.counts,
            BucketCounts {
                weak_4x: 1,
                ..Default::default()
            }
        );
        assert_eq!(rock.defense_score, 0);
        assert_eq!(rock.vulnerability_score, 4);
        assert_eq!(rock.net_score, -4);
        assert_eq!(rock.rating, Rating::C);
        assert_eq!(rock.worst, 4.0);
    }

    #[test]
    fn test_blissey_vs_ghost() {
        let team = [creature("blissey", &[Type::Normal])];
        let analysis = analyze_team_by_type(&team);
        let ghost = row(&analysis, Type::Ghost);

        assert_eq!(ghost.counts.immune, 1);
        assert_eq!(ghost.counts.weak_2x, 0);
        assert_eq!(ghost.rating, Rating::S);
        assert_eq!(ghost.best, 0.0);
        assert_eq!(ghost.risk, -3);
    }

    #[test]
    fn test_counts_sum_to_team_size() {
        let team = [
            creature("charizard", &[Type::Fire, Type::Flying]),
            creature("blissey", &[Type::Normal]),
            creature("swampert", &[Type::Water, Type::Ground]),
            creature("ferrothorn", &[Type::Grass, Type::Steel]),
            creature("gengar", &[Type::Ghost, Type::Poison]),
            creature("clefable", &[Type::Fairy]),
        ];
        let analysis = analyze_team_by_type(&team);

        for a in &analysis {
            assert_eq!(a.counts.total(), team.len() as u32, "{}", a.attack);
        }
    }

    #[test]
    fn test_single_immunity_ratings() {
        let team = [
            creature("skarmory", &[Type::Steel, Type::Flying]),
            creature("gengar", &[Type::Ghost, Type::Poison]),
        ];
        let analysis = analyze_team_by_type(&team);
        let ground = row(&analysis, Type::Ground);

        // Skarmory immune, Gengar weak
        assert_eq!(ground.counts.immune, 1);
        assert_eq!(ground.counts.weak_2x, 1);
        assert_eq!(ground.rating, Rating::BPlus);

        let normal = row(&analysis, Type::Normal);
        assert_eq!(normal.counts.immune, 1);
        assert_eq!(normal.counts.resist_2x, 1);
        assert_eq!(normal.rating, Rating::S);

        let fighting = row(&analysis, Type::Fighting);
        // Skarmory 0.5 * 2 = neutral, Gengar 0 * 0.5 = immune
        assert_eq!(fighting.counts.immune, 1);
        assert_eq!(fighting.rating, Rating::S);
    }

    #[test]
    fn test_double_immunity_rates_s_plus() {
        let team = [
            creature("skarmory", &[Type::Steel, Type::Flying]),
            creature("gyarados", &[Type::Water, Type::Flying]),
        ];
        let analysis = analyze_team_by_type(&team);
        let ground = row(&analysis, Type::Ground);

        assert_eq!(ground.counts.immune, 2);
        assert_eq!(ground.rating, Rating::SPlus);
    }

    #[test]
    fn test_immunity_plus_resists_rates_s_plus() {
        let team = [
            creature("gengar", &[Type::Ghost, Type::Poison]),
            creature("skarmory", &[Type::Steel, Type::Flying]),
            creature("tyranitar", &[Type::Rock, Type::Dark]),
        ];
        let analysis = analyze_team_by_type(&team);
        let normal = row(&analysis, Type::Normal);

        // Gengar immune; Skarmory and Tyranitar resist
        assert_eq!(normal.counts.immune, 1);
        assert_eq!(normal.counts.resist_2x, 2);
        assert_eq!(normal.rating, Rating::SPlus);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let team = [
            creature("charizard", &[Type::Fire, Type::Flying]),
            creature("blissey", &[Type::Normal]),
        ];
        assert_eq!(analyze_team_by_type(&team), analyze_team_by_type(&team));
    }
}
