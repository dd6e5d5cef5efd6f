//! Competition snapshot: everything the engine needs for one evaluation.

use crate::models::config::CompetitionConfig;
use crate::models::error::Result;
use crate::models::fixture::{group_fixtures, GroupMatch, Round};
use crate::models::ids::{GroupId, PlaceholderCode, TeamId};
use crate::models::team::TeamRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Explicit ordering for a set of teams still level after every other criterion.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ManualOrder {
    pub group: GroupId,
    /// Best first.
    pub order: Vec<TeamId>,
}

/// Immutable input snapshot. Official results or a user's hypothetical overlay,
/// the engine does not care which.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Competition {
    #[serde(default)]
    pub config: CompetitionConfig,
    pub teams: TeamRegistry,
    #[serde(default)]
    pub group_matches: Vec<GroupMatch>,
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub overrides: Vec<ManualOrder>,
    /// Seeds decided outside the bracket (e.g. play-offs run elsewhere).
    #[serde(default)]
    pub extra_seeds: BTreeMap<PlaceholderCode, TeamId>,
}

impl Competition {
    pub fn new(config: CompetitionConfig, teams: TeamRegistry) -> Self {
        Self {
            config,
            teams,
            ..Self::default()
        }
    }

    /// Manual orderings supplied for `group`.
    pub fn overrides_for(&self, group: &GroupId) -> Vec<&[TeamId]> {
        self.overrides
            .iter()
            .filter(|o| &o.group == group)
            .map(|o| o.order.as_slice())
            .collect()
    }

    /// True when `group` has fixtures and every one of them has both scores.
    /// A match id supplied twice counts as played if any copy is scored.
    pub fn group_complete(&self, group: &GroupId) -> bool {
        let fixtures = group_fixtures(group, &self.group_matches);
        !fixtures.is_empty() && fixtures.into_iter().all(GroupMatch::is_played)
    }

    pub fn validate(&self) -> Result<()> {
        self.teams.validate()
    }
}
