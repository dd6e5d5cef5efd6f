//! Group stage: classification tables from match results.

use crate::logic::tiebreak::{rank, PlayedMatch, TieBreakContext};
use crate::models::{
    group_fixtures, ClassificationRow, Competition, CompetitionConfig, EngineError, GroupId,
    GroupMatch, Result, TeamId,
};
use std::collections::{BTreeMap, BTreeSet};

/// Compute the table for `group`, best first.
///
/// 1. Every roster team gets a row, played or not.
/// 2. Matches of other groups are ignored; a match id seen twice counts once,
///    preferring the scored copy.
/// 3. Any match naming a team outside the roster is an error, scored or not.
/// 4. Matches with either goal value unset are skipped.
/// 5. Rows are ordered by the tie-break cascade from `config`.
pub fn compute_standings(
    group: &GroupId,
    roster: &[TeamId],
    matches: &[GroupMatch],
    config: &CompetitionConfig,
    overrides: &[&[TeamId]],
) -> Result<Vec<ClassificationRow>> {
    let mut rows: BTreeMap<TeamId, ClassificationRow> = roster
        .iter()
        .map(|id| (id.clone(), ClassificationRow::new(id.clone())))
        .collect();

    let fixtures = group_fixtures(group, matches);
    let supplied = matches.iter().filter(|m| &m.group == group).count();
    if supplied > fixtures.len() {
        log::warn!(
            "group {}: {} duplicate match entries, one kept per id",
            group,
            supplied - fixtures.len()
        );
    }

    let mut played = Vec::new();
    for m in fixtures {
        for team in [&m.home, &m.away] {
            if !rows.contains_key(team) {
                return Err(EngineError::UnknownTeam {
                    match_id: m.id.clone(),
                    group: group.clone(),
                    team: team.clone(),
                });
            }
        }
        let Some(score) = m.score() else {
            log::debug!("group {}: match {} not yet played", group, m.id);
            continue;
        };
        if let Some(home) = rows.get_mut(&m.home) {
            home.record(score.home, score.away);
        }
        if let Some(away) = rows.get_mut(&m.away) {
            away.record(score.away, score.home);
        }
        played.push(PlayedMatch {
            home: m.home.clone(),
            away: m.away.clone(),
            score,
        });
    }

    let mut rows: Vec<ClassificationRow> = rows.into_values().collect();
    for row in &mut rows {
        row.finish(&config.points);
    }

    let ctx = TieBreakContext {
        played: &played,
        points: &config.points,
        priority: config.tie_break_priority,
        overrides,
    };
    Ok(rank(rows, &ctx))
}

/// Table for one group of a competition snapshot.
pub fn group_standings(competition: &Competition, group: &GroupId) -> Result<Vec<ClassificationRow>> {
    let roster: Vec<TeamId> = competition
        .teams
        .roster(group)
        .into_iter()
        .map(|t| t.id.clone())
        .collect();
    let overrides = competition.overrides_for(group);
    compute_standings(
        group,
        &roster,
        &competition.group_matches,
        &competition.config,
        &overrides,
    )
}

/// Tables for every group that has teams or fixtures.
pub fn all_standings(competition: &Competition) -> Result<BTreeMap<GroupId, Vec<ClassificationRow>>> {
    let mut groups: BTreeSet<GroupId> = competition.teams.groups().into_iter().collect();
    groups.extend(competition.group_matches.iter().map(|m| m.group.clone()));
    groups
        .into_iter()
        .map(|g| group_standings(competition, &g).map(|table| (g, table)))
        .collect()
}
