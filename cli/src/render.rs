//! Plain-text tables

use coverdex_coverage::{Type, TypeAnalysis};
use coverdex_team::MemberProfile;

const COVERAGE_HEADERS: [&str; 8] = [
    "Type", "Immune", "4x Res", "2x Res", "Neutral", "2x Weak", "4x Weak", "Rating",
];

/// One line per attacking type, in the order given
pub fn coverage_table(analysis: &[TypeAnalysis]) -> String {
    let mut out = format!(
        "{:<10}{} {:>4}\n",
        COVERAGE_HEADERS[0],
        COVERAGE_HEADERS[1..]
            .iter()
            .map(|h| format!("{:>9}", h))
            .collect::<String>(),
        "Risk",
    );

    for row in analysis {
        let c = &row.counts;
        out.push_str(&format!(
            "{:<10}{:>9}{:>9}{:>9}{:>9}{:>9}{:>9}{:>9} {:>4} {}\n",
            row.attack.as_str(),
            c.immune,
            c.resist_4x,
            c.resist_2x,
            c.neutral,
            c.weak_2x,
            c.weak_4x,
            row.rating.as_str(),
            format!("{:+}", row.risk),
            row.risk_level().as_str(),
        ));
    }

    out
}

/// Each member's weaknesses, resistances and immunities
pub fn member_table(members: &[MemberProfile]) -> String {
    members
        .iter()
        .map(|member| {
            format!(
                "┌─ {} ({})\n│  Weak:    {}\n│  Resist:  {}\n│  Immune:  {}\n",
                member.creature.name,
                member.creature.types,
                type_list(&member.profile.weaknesses),
                type_list(&member.profile.resistances),
                type_list(&member.profile.immunities),
            )
        })
        .collect()
}

fn type_list(types: &[Type]) -> String {
    if types.is_empty() {
        return "—".to_string();
    }
    types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
