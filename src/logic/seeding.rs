//! Seeds: group positions and externally decided slots feeding the bracket.

use crate::logic::standings::all_standings;
use crate::models::{Competition, EngineError, PlaceholderCode, Result, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder codes available before the first knockout round.
///
/// A declared code with no team is pending data (its ties stay undecided);
/// a code that was never declared is a broken round graph.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedTable {
    slots: BTreeMap<PlaceholderCode, Option<TeamId>>,
}

impl SeedTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a code whose team is not known yet.
    pub fn declare(&mut self, code: PlaceholderCode) -> Result<()> {
        self.insert(code, None)
    }

    /// Register a code together with its team.
    pub fn resolve(&mut self, code: PlaceholderCode, team: TeamId) -> Result<()> {
        self.insert(code, Some(team))
    }

    fn insert(&mut self, code: PlaceholderCode, team: Option<TeamId>) -> Result<()> {
        if self.slots.contains_key(&code) {
            return Err(EngineError::DuplicatePlaceholder(code));
        }
        self.slots.insert(code, team);
        Ok(())
    }

    /// `None` if undeclared, `Some(None)` if declared but pending.
    pub fn get(&self, code: &PlaceholderCode) -> Option<Option<&TeamId>> {
        self.slots.get(code).map(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlaceholderCode, Option<&TeamId>)> {
        self.slots.iter().map(|(code, team)| (code, team.as_ref()))
    }

    /// Resolved codes only.
    pub fn resolved(&self) -> impl Iterator<Item = (&PlaceholderCode, &TeamId)> {
        self.slots
            .iter()
            .filter_map(|(code, team)| team.as_ref().map(|t| (code, t)))
    }
}

impl From<BTreeMap<PlaceholderCode, TeamId>> for SeedTable {
    fn from(map: BTreeMap<PlaceholderCode, TeamId>) -> Self {
        Self {
            slots: map.into_iter().map(|(code, team)| (code, Some(team))).collect(),
        }
    }
}

/// Seeds from the group tables plus the snapshot's extra seeds.
///
/// Positions `1..=qualifiers_per_group` of every group are declared. They
/// resolve only once the whole group has been played, since a partial table
/// says nothing final about who finishes where.
pub fn build_seeds(competition: &Competition) -> Result<SeedTable> {
    let mut seeds = SeedTable::new();
    let qualifiers = competition.config.qualifiers_per_group;

    for (group, table) in all_standings(competition)? {
        let complete = competition.group_complete(&group);
        for (index, row) in table.iter().take(qualifiers).enumerate() {
            let code = PlaceholderCode::group_position(&group, index + 1);
            if complete {
                seeds.resolve(code, row.team_id.clone())?;
            } else {
                seeds.declare(code)?;
            }
        }
        if !complete {
            log::debug!("group {} incomplete, its seeds stay pending", group);
        }
    }

    for (code, team) in &competition.extra_seeds {
        seeds.resolve(code.clone(), team.clone())?;
    }
    Ok(seeds)
}
