//! coverdex - defensive type coverage for a Pokemon team

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use coverdex_coverage::list_types;
use coverdex_roster::{Roster, RosterOptions, RosterRepository};
use coverdex_team::{Team, TeamReport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "coverdex", version, about = "Defensive type coverage analyzer")]
struct Cli {
    /// Showdown pokedex JSON file
    #[arg(long, env = "COVERDEX_POKEDEX", global = true)]
    pokedex: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a team of up to six creatures
    Analyze {
        /// Creature ids or display names
        #[arg(required = true)]
        members: Vec<String>,
    },
    /// List the roster grouped by generation
    List {
        /// Only this generation (1-9)
        #[arg(long = "gen", value_parser = clap::value_parser!(u8).range(1..=9))]
        generation: Option<u8>,
    },
    /// Print the 18 types in chart order
    Types,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coverdex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Types => {
            let names: Vec<&str> = list_types().iter().map(|t| t.as_str()).collect();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                println!("{}", names.join("\n"));
            }
        }
        Command::Analyze { members } => {
            let roster = load_roster(cli.pokedex.as_ref())?;
            let team = build_team(&roster, &members)?;
            let report = TeamReport::build(&team, &roster);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::coverage_table(&report.analysis));
                println!();
                print!("{}", render::member_table(&report.members));
            }
        }
        Command::List { generation } => {
            let roster = load_roster(cli.pokedex.as_ref())?;
            for group in roster.by_generation() {
                if generation.is_some_and(|g| g != group.generation) {
                    continue;
                }
                println!("┌─ {} ({})", group.label, group.members.len());
                for creature in &group.members {
                    println!("│  #{:<4} {:<24} {}", creature.num, creature.name, creature.types);
                }
                println!("└─");
            }
        }
    }

    Ok(())
}

fn load_roster(path: Option<&PathBuf>) -> Result<Roster> {
    let Some(path) = path else {
        bail!("No pokedex file given (use --pokedex or COVERDEX_POKEDEX)");
    };

    let roster = Roster::load(path, &RosterOptions::default())
        .with_context(|| format!("Failed to load pokedex from {}", path.display()))?;
    tracing::info!(creatures = roster.len(), "Roster ready");
    Ok(roster)
}

fn build_team(roster: &Roster, members: &[String]) -> Result<Team> {
    let mut team = Team::new();
    for query in members {
        let Some(creature) = roster.find(query) else {
            tracing::warn!(query = %query, "Unknown creature, skipping");
            continue;
        };
        team.add(creature.id.clone())
            .with_context(|| format!("Cannot add {}", creature.name))?;
    }
    Ok(team)
}
