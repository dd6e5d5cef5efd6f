//! Team and TeamRegistry data structures.

use crate::models::error::{EngineError, Result};
use crate::models::ids::{GroupId, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A participant in the competition.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub display_name: String,
    /// None for teams that only ever appear in knockouts.
    #[serde(default)]
    pub group: Option<GroupId>,
    /// Display-only.
    #[serde(default)]
    pub country_code: Option<String>,
}

impl Team {
    /// Create a team assigned to `group`. The display name defaults to the id.
    pub fn new(id: impl Into<TeamId>, group: Option<GroupId>) -> Self {
        let id = id.into();
        Self {
            display_name: id.to_string(),
            id,
            group,
            country_code: None,
        }
    }
}

/// Static list of participants for one competition.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamRegistry {
    teams: Vec<Team>,
}

impl TeamRegistry {
    /// Build a registry, rejecting duplicate ids.
    pub fn new(teams: Vec<Team>) -> Result<Self> {
        let registry = Self { teams };
        registry.validate()?;
        Ok(registry)
    }

    /// Check that every team id is unique. Deserialized registries should be
    /// validated before use.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for team in &self.teams {
            if !seen.insert(&team.id) {
                return Err(EngineError::DuplicateTeam(team.id.clone()));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| &t.id == id)
    }

    /// Teams assigned to `group`, sorted by id.
    pub fn roster(&self, group: &GroupId) -> Vec<&Team> {
        let mut roster: Vec<_> = self
            .teams
            .iter()
            .filter(|t| t.group.as_ref() == Some(group))
            .collect();
        roster.sort_by(|a, b| a.id.cmp(&b.id));
        roster
    }

    /// Every group that has at least one team, sorted.
    pub fn groups(&self) -> Vec<GroupId> {
        self.teams
            .iter()
            .filter_map(|t| t.group.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
