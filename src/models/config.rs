//! Competition parameterization. Plain data; onboarding a competition never
//! touches the calculator or resolver.

use crate::models::ids::RoundId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Points awarded per match outcome.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsRule {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Default for PointsRule {
    fn default() -> Self {
        Self {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

impl PointsRule {
    pub fn for_record(&self, won: u32, drawn: u32, lost: u32) -> u32 {
        self.win
            .saturating_mul(won)
            .saturating_add(self.draw.saturating_mul(drawn))
            .saturating_add(self.loss.saturating_mul(lost))
    }

    /// Points one side earns from a single result.
    pub fn for_result(&self, goals_for: u32, goals_against: u32) -> u32 {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => self.win,
            std::cmp::Ordering::Equal => self.draw,
            std::cmp::Ordering::Less => self.loss,
        }
    }
}

/// Whether head-to-head is consulted before or after the overall goal criteria.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakPriority {
    /// Points, head-to-head, goal difference, goals scored.
    #[default]
    HeadToHeadFirst,
    /// Points, goal difference, goals scored, head-to-head.
    OverallFirst,
}

/// How many legs make up each tie of a knockout round.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegFormat {
    #[default]
    Single,
    TwoLegged,
}

impl LegFormat {
    pub fn leg_count(self) -> u8 {
        match self {
            LegFormat::Single => 1,
            LegFormat::TwoLegged => 2,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitionConfig {
    pub name: String,
    pub points: PointsRule,
    pub tie_break_priority: TieBreakPriority,
    /// Format used for rounds not listed in `round_legs`.
    pub default_legs: LegFormat,
    pub round_legs: BTreeMap<RoundId, LegFormat>,
    /// When false a level tie stays undecided whatever the shoot-out fields hold.
    pub penalties_allowed: bool,
    /// Level two-legged aggregate goes to the side with more away goals.
    pub away_goals_rule: bool,
    /// Positional seeds each group produces for the bracket.
    pub qualifiers_per_group: usize,
}

impl Default for CompetitionConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            points: PointsRule::default(),
            tie_break_priority: TieBreakPriority::default(),
            default_legs: LegFormat::Single,
            round_legs: BTreeMap::new(),
            penalties_allowed: true,
            away_goals_rule: false,
            qualifiers_per_group: 2,
        }
    }
}

impl CompetitionConfig {
    /// Round-robin league: one table, overall goal criteria before head-to-head, no knockouts.
    pub fn league() -> Self {
        Self {
            name: "league".to_owned(),
            tie_break_priority: TieBreakPriority::OverallFirst,
            penalties_allowed: false,
            qualifiers_per_group: 0,
            ..Self::default()
        }
    }

    /// Continental cup: two-legged knockouts with a single-match final.
    pub fn continental_cup(final_round: impl Into<RoundId>) -> Self {
        let mut round_legs = BTreeMap::new();
        round_legs.insert(final_round.into(), LegFormat::Single);
        Self {
            name: "continental_cup".to_owned(),
            default_legs: LegFormat::TwoLegged,
            round_legs,
            ..Self::default()
        }
    }

    /// World-Cup style: groups of four, top two advance, single-match knockouts.
    pub fn world_cup() -> Self {
        Self {
            name: "world_cup".to_owned(),
            ..Self::default()
        }
    }

    pub fn legs_for(&self, round: &RoundId) -> LegFormat {
        self.round_legs
            .get(round)
            .copied()
            .unwrap_or(self.default_legs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: CompetitionConfig = serde_json::from_str(r#"{"points": {"win": 2}}"#).unwrap();
        assert_eq!(config.points, PointsRule { win: 2, draw: 1, loss: 0 });
        assert!(config.penalties_allowed);
        assert_eq!(config.qualifiers_per_group, 2);
    }

    #[test]
    fn round_override_wins_over_default() {
        let config = CompetitionConfig::continental_cup("F");
        assert_eq!(config.legs_for(&RoundId::from("F")), LegFormat::Single);
        assert_eq!(config.legs_for(&RoundId::from("QF")), LegFormat::TwoLegged);
    }
}
