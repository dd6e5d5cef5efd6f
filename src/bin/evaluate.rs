//! Evaluate a competition snapshot: group tables plus bracket resolution as JSON on stdout.
//! Run with: cargo run --bin evaluate -- snapshot.json [results.csv] [predictions.json]
//! Paths can also come from env: POOL_SNAPSHOT, POOL_RESULTS, POOL_PREDICTIONS.
//! Log level via RUST_LOG (default info).

use anyhow::Context;
use pool_engine::{
    all_standings, hypothetical, merge_group_matches, read_group_matches_csv, resolve_competition,
    BracketResolution, ClassificationRow, Competition, GroupId, PredictionSet,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;

#[derive(Serialize)]
struct Report {
    competition: String,
    standings: BTreeMap<GroupId, Vec<ClassificationRow>>,
    bracket: BracketResolution,
}

/// Positional argument `index`, else the env var, else None.
fn input_path(index: usize, var: &str) -> Option<String> {
    std::env::args()
        .nth(index)
        .or_else(|| std::env::var(var).ok())
        .filter(|p| !p.is_empty())
}

fn load_competition() -> anyhow::Result<Competition> {
    let path = input_path(1, "POOL_SNAPSHOT").context("no snapshot given (argument 1 or POOL_SNAPSHOT)")?;
    let json = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let mut competition: Competition =
        serde_json::from_str(&json).with_context(|| format!("parsing {path}"))?;
    competition.validate()?;
    if competition.teams.is_empty() {
        log::warn!("{} lists no teams, every table will be empty", path);
    }
    log::info!(
        "Loaded {}: {} teams, {} group matches, {} rounds",
        path,
        competition.teams.len(),
        competition.group_matches.len(),
        competition.rounds.len()
    );

    if let Some(results) = input_path(2, "POOL_RESULTS") {
        let file = fs::File::open(&results).with_context(|| format!("opening {results}"))?;
        let imported = read_group_matches_csv(file).with_context(|| format!("parsing {results}"))?;
        log::info!("Imported {} group results from {}", imported.len(), results);
        merge_group_matches(&mut competition.group_matches, imported);
    }

    if let Some(predictions) = input_path(3, "POOL_PREDICTIONS") {
        let json = fs::read_to_string(&predictions).with_context(|| format!("reading {predictions}"))?;
        let set: PredictionSet =
            serde_json::from_str(&json).with_context(|| format!("parsing {predictions}"))?;
        log::info!("Applying predictions from {}", predictions);
        competition = hypothetical(&competition, &set);
    }

    Ok(competition)
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let competition = load_competition()?;
    let report = Report {
        competition: competition.config.name.clone(),
        standings: all_standings(&competition)?,
        bracket: resolve_competition(&competition)?,
    };
    let undecided = report
        .bracket
        .tie_winners
        .values()
        .filter(|o| o.is_undecided())
        .count();
    log::info!(
        "{} groups, {} ties ({} undecided), {} slots resolved",
        report.standings.len(),
        report.bracket.tie_winners.len(),
        undecided,
        report.bracket.resolved_slots.len()
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
