//! Engine outputs: classification rows and bracket resolution.

use crate::models::config::PointsRule;
use crate::models::fixture::Score;
use crate::models::ids::{PlaceholderCode, TeamId, TieId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One line of a group table.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRow {
    pub team_id: TeamId,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl ClassificationRow {
    pub fn new(team_id: TeamId) -> Self {
        Self {
            team_id,
            ..Self::default()
        }
    }

    /// Record one result from this team's point of view. Derived fields are
    /// filled in by `finish`.
    pub fn record(&mut self, goals_for: u32, goals_against: u32) {
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(goals_for);
        self.goals_against = self.goals_against.saturating_add(goals_against);
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => self.won += 1,
            std::cmp::Ordering::Equal => self.drawn += 1,
            std::cmp::Ordering::Less => self.lost += 1,
        }
    }

    /// Recompute goal difference and points from the tallies.
    pub fn finish(&mut self, rule: &PointsRule) {
        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
        self.points = rule.for_record(self.won, self.drawn, self.lost);
    }
}

/// How a decided tie was settled.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecidedBy {
    Goals,
    AwayGoals,
    Penalties,
}

/// Result of one tie.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieOutcome {
    Winner(TeamId),
    /// Not enough data yet. Distinct from an error.
    Undecided,
}

impl TieOutcome {
    pub fn winner(&self) -> Option<&TeamId> {
        match self {
            TieOutcome::Winner(id) => Some(id),
            TieOutcome::Undecided => None,
        }
    }

    pub fn is_undecided(&self) -> bool {
        matches!(self, TieOutcome::Undecided)
    }
}

/// Aggregate for a tie whose two teams are known. `first` is leg 1's home side.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TieDetail {
    pub first: TeamId,
    pub second: TeamId,
    /// Aggregate goals, `home` = `first`. None until every leg is scored.
    pub aggregate: Option<Score>,
    /// Shoot-out oriented the same way as `aggregate`.
    pub penalties: Option<Score>,
    pub decided_by: Option<DecidedBy>,
}

/// Everything the resolver learned from one input snapshot.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketResolution {
    pub resolved_slots: BTreeMap<PlaceholderCode, TeamId>,
    pub tie_winners: BTreeMap<TieId, TieOutcome>,
    pub tie_details: BTreeMap<TieId, TieDetail>,
}

impl BracketResolution {
    pub fn slot(&self, code: &PlaceholderCode) -> Option<&TeamId> {
        self.resolved_slots.get(code)
    }

    pub fn winner(&self, tie: &TieId) -> Option<&TeamId> {
        self.tie_winners.get(tie).and_then(TieOutcome::winner)
    }
}
