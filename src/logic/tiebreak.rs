//! Tie-break cascade for group tables.
//!
//! Ordering is an explicit list of named criteria. Teams start in one block;
//! each criterion splits every block that is still level into smaller blocks,
//! best first, and never reorders teams it already separated. Whatever is
//! still level at the end goes to a manual override or, failing that, to team
//! id order.

use crate::models::{ClassificationRow, PointsRule, Score, TeamId, TieBreakPriority};
use std::cmp::Reverse;

/// One step of the cascade.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Criterion {
    Points,
    /// Points then goal difference in the matches between the two level teams.
    /// Skipped when more than two teams are level.
    HeadToHead,
    GoalDifference,
    GoalsFor,
}

impl Criterion {
    /// Criteria applied before the manual/alphabetical fallback.
    pub fn cascade(priority: TieBreakPriority) -> [Criterion; 4] {
        use Criterion::*;
        match priority {
            TieBreakPriority::HeadToHeadFirst => [Points, HeadToHead, GoalDifference, GoalsFor],
            TieBreakPriority::OverallFirst => [Points, GoalDifference, GoalsFor, HeadToHead],
        }
    }
}

/// A played group match, as seen by the tie-breaker.
#[derive(Clone, Debug)]
pub struct PlayedMatch {
    pub home: TeamId,
    pub away: TeamId,
    pub score: Score,
}

/// Inputs shared by every criterion.
pub struct TieBreakContext<'a> {
    pub played: &'a [PlayedMatch],
    pub points: &'a PointsRule,
    pub priority: TieBreakPriority,
    /// Manual orderings for this group, best first.
    pub overrides: &'a [&'a [TeamId]],
}

/// Order rows best to worst.
pub fn rank(rows: Vec<ClassificationRow>, ctx: &TieBreakContext<'_>) -> Vec<ClassificationRow> {
    let mut blocks = vec![rows];
    for criterion in Criterion::cascade(ctx.priority) {
        blocks = blocks
            .into_iter()
            .flat_map(|block| split(block, criterion, ctx))
            .collect();
    }
    blocks
        .into_iter()
        .flat_map(|block| settle(block, ctx.overrides))
        .collect()
}

/// Split one level block by `criterion`. Returns sub-blocks best first.
pub fn split(
    mut block: Vec<ClassificationRow>,
    criterion: Criterion,
    ctx: &TieBreakContext<'_>,
) -> Vec<Vec<ClassificationRow>> {
    if block.len() < 2 {
        return vec![block];
    }
    let keys: Vec<(i64, i64)> = match criterion {
        Criterion::Points => block.iter().map(|r| (i64::from(r.points), 0)).collect(),
        Criterion::GoalDifference => block.iter().map(|r| (r.goal_difference, 0)).collect(),
        Criterion::GoalsFor => block.iter().map(|r| (i64::from(r.goals_for), 0)).collect(),
        Criterion::HeadToHead => {
            if block.len() != 2 {
                log::debug!("{} teams level, head-to-head skipped", block.len());
                return vec![block];
            }
            let (a, b) = (&block[0].team_id, &block[1].team_id);
            let a_key = head_to_head(a, b, ctx);
            let b_key = head_to_head(b, a, ctx);
            vec![a_key, b_key]
        }
    };

    let mut keyed: Vec<((i64, i64), ClassificationRow)> =
        keys.into_iter().zip(block.drain(..)).collect();
    keyed.sort_by_key(|(key, _)| Reverse(*key));

    let mut out: Vec<Vec<ClassificationRow>> = Vec::new();
    let mut last_key = None;
    for (key, row) in keyed {
        match out.last_mut() {
            Some(current) if last_key == Some(key) => current.push(row),
            _ => out.push(vec![row]),
        }
        last_key = Some(key);
    }
    out
}

/// Points and goal difference `team` earned against `opponent` only.
pub fn head_to_head(team: &TeamId, opponent: &TeamId, ctx: &TieBreakContext<'_>) -> (i64, i64) {
    let mut points = 0i64;
    let mut diff = 0i64;
    for m in ctx.played {
        let (goals_for, goals_against) = if &m.home == team && &m.away == opponent {
            (m.score.home, m.score.away)
        } else if &m.away == team && &m.home == opponent {
            (m.score.away, m.score.home)
        } else {
            continue;
        };
        points += i64::from(ctx.points.for_result(goals_for, goals_against));
        diff += i64::from(goals_for) - i64::from(goals_against);
    }
    (points, diff)
}

/// Final fallback for a block nothing else could separate.
fn settle(mut block: Vec<ClassificationRow>, overrides: &[&[TeamId]]) -> Vec<ClassificationRow> {
    if block.len() < 2 {
        return block;
    }
    let manual = overrides
        .iter()
        .find(|order| block.iter().all(|r| order.contains(&r.team_id)));
    match manual {
        Some(order) => {
            log::debug!("manual order applied to {} level teams", block.len());
            block.sort_by_key(|r| order.iter().position(|id| id == &r.team_id));
        }
        None => block.sort_by(|a, b| a.team_id.cmp(&b.team_id)),
    }
    block
}
