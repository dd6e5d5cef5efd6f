//! Hypothetical results: a user's predictions layered under the official ones.
//!
//! Official scores always win. A fixture without an official score takes the
//! prediction for its id, if there is one. For knockout legs the score and the
//! shoot-out are filled separately. The engine itself never knows which
//! source a score came from.

use crate::models::{Competition, GroupMatch, MatchId, Round, Score};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Predicted result for a knockout leg.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LegPrediction {
    pub score: Score,
    #[serde(default)]
    pub penalties: Option<Score>,
}

/// A user's predictions keyed by fixture id.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PredictionSet {
    #[serde(default)]
    pub group_matches: BTreeMap<MatchId, Score>,
    #[serde(default)]
    pub knockout_legs: BTreeMap<MatchId, LegPrediction>,
}

pub fn overlay_group_matches(
    official: &[GroupMatch],
    predictions: &BTreeMap<MatchId, Score>,
) -> Vec<GroupMatch> {
    official
        .iter()
        .map(|m| match predictions.get(&m.id) {
            Some(p) if !m.is_played() => m.clone().with_score(p.home, p.away),
            _ => m.clone(),
        })
        .collect()
}

pub fn overlay_rounds(rounds: &[Round], predictions: &BTreeMap<MatchId, LegPrediction>) -> Vec<Round> {
    let mut rounds = rounds.to_vec();
    for leg in rounds.iter_mut().flat_map(|r| r.ties.iter_mut()).flat_map(|t| t.legs.iter_mut()) {
        let Some(p) = predictions.get(&leg.id) else {
            continue;
        };
        // goals and shoot-out fill independently
        if leg.score().is_none() {
            leg.home_goals = Some(p.score.home);
            leg.away_goals = Some(p.score.away);
        }
        if let (None, Some(penalties)) = (leg.penalties(), p.penalties) {
            leg.home_penalties = Some(penalties.home);
            leg.away_penalties = Some(penalties.away);
        }
    }
    rounds
}

/// A copy of the snapshot with `predictions` filling every unplayed fixture.
pub fn hypothetical(competition: &Competition, predictions: &PredictionSet) -> Competition {
    Competition {
        group_matches: overlay_group_matches(&competition.group_matches, &predictions.group_matches),
        rounds: overlay_rounds(&competition.rounds, &predictions.knockout_legs),
        ..competition.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KnockoutLeg, Slot, Tie};

    fn rounds(leg: KnockoutLeg) -> Vec<Round> {
        vec![Round::new("F", vec![Tie::new("F", "Champion", vec![leg])])]
    }

    fn only_leg(rounds: &[Round]) -> &KnockoutLeg {
        &rounds[0].ties[0].legs[0]
    }

    fn predict(id: &str, score: Score, penalties: Option<Score>) -> BTreeMap<MatchId, LegPrediction> {
        BTreeMap::from([(MatchId::from(id), LegPrediction { score, penalties })])
    }

    fn final_leg() -> KnockoutLeg {
        KnockoutLeg::new("F-1", "F", "F", 1, Slot::team("ARG"), Slot::team("FRA"))
    }

    #[test]
    fn shootout_fills_level_official_score() {
        let official = rounds(final_leg().with_score(3, 3));
        let overlaid = overlay_rounds(&official, &predict("F-1", Score::new(0, 1), Some(Score::new(4, 2))));
        let leg = only_leg(&overlaid);
        assert_eq!(leg.score(), Some(Score::new(3, 3)));
        assert_eq!(leg.penalties(), Some(Score::new(4, 2)));
    }

    #[test]
    fn official_penalties_survive_prediction_without_shootout() {
        let mut leg = final_leg();
        leg.home_penalties = Some(4);
        leg.away_penalties = Some(2);
        let overlaid = overlay_rounds(&rounds(leg), &predict("F-1", Score::new(1, 1), None));
        let leg = only_leg(&overlaid);
        assert_eq!(leg.score(), Some(Score::new(1, 1)));
        assert_eq!(leg.penalties(), Some(Score::new(4, 2)));
    }

    #[test]
    fn official_shootout_is_never_replaced() {
        let official = rounds(final_leg().with_score(3, 3).with_penalties(4, 2));
        let overlaid = overlay_rounds(&official, &predict("F-1", Score::new(1, 1), Some(Score::new(2, 4))));
        assert_eq!(only_leg(&overlaid), only_leg(&official));
    }
}
