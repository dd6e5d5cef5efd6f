//! Fixtures: group matches, knockout legs, ties and rounds.

use crate::models::ids::{GroupId, MatchId, PlaceholderCode, RoundId, TeamId, TieId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Goals for the home and away side of one fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }
}

/// A group-stage match. Both goal fields unset means not yet played.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupMatch {
    pub id: MatchId,
    pub group: GroupId,
    pub home: TeamId,
    pub away: TeamId,
    #[serde(default)]
    pub home_goals: Option<u32>,
    #[serde(default)]
    pub away_goals: Option<u32>,
}

impl GroupMatch {
    /// An unplayed fixture.
    pub fn new(
        id: impl Into<MatchId>,
        group: impl Into<GroupId>,
        home: impl Into<TeamId>,
        away: impl Into<TeamId>,
    ) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            home: home.into(),
            away: away.into(),
            home_goals: None,
            away_goals: None,
        }
    }

    pub fn with_score(mut self, home: u32, away: u32) -> Self {
        self.home_goals = Some(home);
        self.away_goals = Some(away);
        self
    }

    /// The score, only when both sides are set.
    pub fn score(&self) -> Option<Score> {
        Some(Score::new(self.home_goals?, self.away_goals?))
    }

    pub fn is_played(&self) -> bool {
        self.score().is_some()
    }
}

/// The fixtures of `group`, one per match id, ordered by id. A scored copy
/// beats a pending one; otherwise the later copy wins.
pub fn group_fixtures<'a>(group: &GroupId, matches: &'a [GroupMatch]) -> Vec<&'a GroupMatch> {
    let mut by_id: BTreeMap<&MatchId, &GroupMatch> = BTreeMap::new();
    for m in matches.iter().filter(|m| &m.group == group) {
        match by_id.get(&m.id) {
            Some(kept) if kept.is_played() && !m.is_played() => {}
            _ => {
                by_id.insert(&m.id, m);
            }
        }
    }
    by_id.into_values().collect()
}

/// One side of a knockout leg: a known team or a placeholder awaiting resolution.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Team(TeamId),
    Placeholder(PlaceholderCode),
}

impl Slot {
    pub fn team(id: impl Into<TeamId>) -> Self {
        Slot::Team(id.into())
    }

    pub fn placeholder(code: impl Into<PlaceholderCode>) -> Self {
        Slot::Placeholder(code.into())
    }
}

/// A single match inside a knockout tie.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutLeg {
    pub id: MatchId,
    pub round_id: RoundId,
    pub tie_id: TieId,
    /// 1 or 2.
    pub leg_index: u8,
    pub home: Slot,
    pub away: Slot,
    #[serde(default)]
    pub home_goals: Option<u32>,
    #[serde(default)]
    pub away_goals: Option<u32>,
    #[serde(default)]
    pub home_penalties: Option<u32>,
    #[serde(default)]
    pub away_penalties: Option<u32>,
}

impl KnockoutLeg {
    pub fn new(
        id: impl Into<MatchId>,
        round_id: impl Into<RoundId>,
        tie_id: impl Into<TieId>,
        leg_index: u8,
        home: Slot,
        away: Slot,
    ) -> Self {
        Self {
            id: id.into(),
            round_id: round_id.into(),
            tie_id: tie_id.into(),
            leg_index,
            home,
            away,
            home_goals: None,
            away_goals: None,
            home_penalties: None,
            away_penalties: None,
        }
    }

    pub fn with_score(mut self, home: u32, away: u32) -> Self {
        self.home_goals = Some(home);
        self.away_goals = Some(away);
        self
    }

    pub fn with_penalties(mut self, home: u32, away: u32) -> Self {
        self.home_penalties = Some(home);
        self.away_penalties = Some(away);
        self
    }

    pub fn score(&self) -> Option<Score> {
        Some(Score::new(self.home_goals?, self.away_goals?))
    }

    /// Shoot-out result, only when both sides are recorded.
    pub fn penalties(&self) -> Option<Score> {
        Some(Score::new(self.home_penalties?, self.away_penalties?))
    }
}

/// One aggregate confrontation made of one or two legs.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tie {
    pub id: TieId,
    /// Code the winner occupies in a later round.
    pub feeds_into: PlaceholderCode,
    /// Code the loser occupies, e.g. a third-place play-off.
    #[serde(default)]
    pub loser_feeds_into: Option<PlaceholderCode>,
    #[serde(default)]
    pub legs: Vec<KnockoutLeg>,
}

impl Tie {
    pub fn new(id: impl Into<TieId>, feeds_into: impl Into<PlaceholderCode>, legs: Vec<KnockoutLeg>) -> Self {
        Self {
            id: id.into(),
            feeds_into: feeds_into.into(),
            loser_feeds_into: None,
            legs,
        }
    }

    pub fn with_loser_feed(mut self, code: impl Into<PlaceholderCode>) -> Self {
        self.loser_feeds_into = Some(code.into());
        self
    }
}

/// A knockout round. Rounds are processed in the order they are supplied.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    #[serde(default)]
    pub name: Option<String>,
    pub ties: Vec<Tie>,
}

impl Round {
    pub fn new(id: impl Into<RoundId>, ties: Vec<Tie>) -> Self {
        Self {
            id: id.into(),
            name: None,
            ties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scored_copy_beats_pending_copy() {
        let pending = GroupMatch::new("m1", "A", "x", "y");
        let scored = pending.clone().with_score(2, 0);
        let group = GroupId::from("A");
        for matches in [vec![pending.clone(), scored.clone()], vec![scored.clone(), pending]] {
            let fixtures = group_fixtures(&group, &matches);
            assert_eq!(fixtures, vec![&scored]);
        }
    }

    #[test]
    fn later_copy_wins_between_scored_copies() {
        let first = GroupMatch::new("m1", "A", "x", "y").with_score(2, 0);
        let corrected = first.clone().with_score(1, 1);
        let other = GroupMatch::new("m2", "B", "x", "y").with_score(0, 0);
        let matches = vec![first, other, corrected.clone()];
        assert_eq!(group_fixtures(&GroupId::from("A"), &matches), vec![&corrected]);
    }
}
