//! Knockout rounds: placeholder substitution and tie resolution.

use crate::logic::seeding::{build_seeds, SeedTable};
use crate::models::{
    BracketResolution, Competition, CompetitionConfig, DecidedBy, EngineError, KnockoutLeg,
    LegFormat, PlaceholderCode, Result, Round, Score, Slot, TeamId, Tie, TieDetail, TieOutcome,
};
use std::collections::{BTreeMap, BTreeSet};

/// A leg with both slots looked up. `None` means the slot's producer is not decided yet.
struct SubstitutedLeg<'a> {
    leg: &'a KnockoutLeg,
    home: Option<TeamId>,
    away: Option<TeamId>,
}

/// Resolve every round in order.
///
/// 1. Codes available to round n are the seeds plus whatever rounds before n
///    produce. Referencing anything else is `UnknownPlaceholder`.
/// 2. Each leg's slots are substituted with resolved teams where known.
/// 3. A tie with a missing leg, an unresolved slot or a missing score is
///    undecided and only blocks the ties that depend on its codes.
/// 4. Winners (and losers, where the tie has a loser feed) are written under
///    the tie's codes for later rounds.
pub fn resolve_bracket(
    rounds: &[Round],
    seeds: &SeedTable,
    config: &CompetitionConfig,
) -> Result<BracketResolution> {
    let mut declared: BTreeSet<PlaceholderCode> = seeds.iter().map(|(code, _)| code.clone()).collect();
    let mut resolution = BracketResolution {
        resolved_slots: seeds
            .resolved()
            .map(|(code, team)| (code.clone(), team.clone()))
            .collect(),
        ..BracketResolution::default()
    };

    for round in rounds {
        let format = config.legs_for(&round.id);
        let produced = produced_codes(round, &declared)?;

        for tie in &round.ties {
            check_legs(round, tie, format)?;
            let legs = tie
                .legs
                .iter()
                .map(|leg| substitute_leg(tie, leg, &declared, &resolution.resolved_slots))
                .collect::<Result<Vec<_>>>()?;

            let (outcome, detail) = decide_tie(tie, format, &legs, config)?;
            match &outcome {
                TieOutcome::Winner(winner) => {
                    log::debug!("round {}: tie {} won by {}", round.id, tie.id, winner);
                    resolution
                        .resolved_slots
                        .insert(tie.feeds_into.clone(), winner.clone());
                    if let (Some(code), Some(detail)) = (&tie.loser_feeds_into, &detail) {
                        let loser = if &detail.first == winner {
                            &detail.second
                        } else {
                            &detail.first
                        };
                        resolution.resolved_slots.insert(code.clone(), loser.clone());
                    }
                }
                TieOutcome::Undecided => {
                    log::debug!("round {}: tie {} undecided", round.id, tie.id);
                }
            }
            resolution.tie_winners.insert(tie.id.clone(), outcome);
            if let Some(detail) = detail {
                resolution.tie_details.insert(tie.id.clone(), detail);
            }
        }

        declared.extend(produced);
    }

    Ok(resolution)
}

/// Seed the bracket from the snapshot's groups and resolve it.
pub fn resolve_competition(competition: &Competition) -> Result<BracketResolution> {
    let seeds = build_seeds(competition)?;
    resolve_bracket(&competition.rounds, &seeds, &competition.config)
}

/// Codes this round writes. None may already exist or repeat within the round.
fn produced_codes(round: &Round, declared: &BTreeSet<PlaceholderCode>) -> Result<Vec<PlaceholderCode>> {
    let mut produced = Vec::new();
    for tie in &round.ties {
        for code in std::iter::once(&tie.feeds_into).chain(tie.loser_feeds_into.iter()) {
            if declared.contains(code) || produced.contains(code) {
                return Err(EngineError::DuplicatePlaceholder(code.clone()));
            }
            produced.push(code.clone());
        }
    }
    Ok(produced)
}

/// Legs must belong to this tie and round, with distinct indices within the format.
fn check_legs(round: &Round, tie: &Tie, format: LegFormat) -> Result<()> {
    let malformed = |reason: String| EngineError::MalformedTie {
        tie: tie.id.clone(),
        reason,
    };
    let mut indices = BTreeSet::new();
    for leg in &tie.legs {
        if leg.tie_id != tie.id {
            return Err(malformed(format!("leg {} belongs to tie {}", leg.id, leg.tie_id)));
        }
        if leg.round_id != round.id {
            return Err(malformed(format!("leg {} belongs to round {}", leg.id, leg.round_id)));
        }
        if leg.leg_index == 0 || leg.leg_index > format.leg_count() {
            return Err(malformed(format!(
                "leg index {} outside a {}-leg tie",
                leg.leg_index,
                format.leg_count()
            )));
        }
        if !indices.insert(leg.leg_index) {
            return Err(malformed(format!("leg {} supplied twice", leg.leg_index)));
        }
    }
    Ok(())
}

fn substitute_leg<'a>(
    tie: &Tie,
    leg: &'a KnockoutLeg,
    declared: &BTreeSet<PlaceholderCode>,
    resolved: &BTreeMap<PlaceholderCode, TeamId>,
) -> Result<SubstitutedLeg<'a>> {
    Ok(SubstitutedLeg {
        leg,
        home: substitute(tie, &leg.home, declared, resolved)?,
        away: substitute(tie, &leg.away, declared, resolved)?,
    })
}

fn substitute(
    tie: &Tie,
    slot: &Slot,
    declared: &BTreeSet<PlaceholderCode>,
    resolved: &BTreeMap<PlaceholderCode, TeamId>,
) -> Result<Option<TeamId>> {
    match slot {
        Slot::Team(id) => Ok(Some(id.clone())),
        Slot::Placeholder(code) => {
            if !declared.contains(code) {
                return Err(EngineError::UnknownPlaceholder {
                    tie: tie.id.clone(),
                    code: code.clone(),
                });
            }
            Ok(resolved.get(code).cloned())
        }
    }
}

/// Decide one tie from its substituted legs.
fn decide_tie(
    tie: &Tie,
    format: LegFormat,
    legs: &[SubstitutedLeg<'_>],
    config: &CompetitionConfig,
) -> Result<(TieOutcome, Option<TieDetail>)> {
    let leg = |index: u8| legs.iter().find(|l| l.leg.leg_index == index);

    let Some(first_leg) = leg(1) else {
        return Ok((TieOutcome::Undecided, None));
    };
    let (Some(first), Some(second)) = (first_leg.home.clone(), first_leg.away.clone()) else {
        return Ok((TieOutcome::Undecided, None));
    };

    let second_leg = match format {
        LegFormat::Single => None,
        LegFormat::TwoLegged => {
            let Some(second_leg) = leg(2) else {
                log::debug!("tie {}: second leg not created yet", tie.id);
                return Ok((TieOutcome::Undecided, None));
            };
            match (&second_leg.home, &second_leg.away) {
                (Some(home), Some(away)) if home == &second && away == &first => {}
                (Some(_), Some(_)) => {
                    return Err(EngineError::MisorientedTie {
                        tie: tie.id.clone(),
                        expected_home: second.clone(),
                        expected_away: first.clone(),
                    });
                }
                _ => return Ok((TieOutcome::Undecided, None)),
            }
            Some(second_leg.leg)
        }
    };

    let mut detail = TieDetail {
        first,
        second,
        aggregate: None,
        penalties: None,
        decided_by: None,
    };

    let Some(aggregate) = aggregate(first_leg.leg, second_leg) else {
        return Ok((TieOutcome::Undecided, Some(detail)));
    };
    detail.aggregate = Some(aggregate);

    // The shoot-out is taken after the last leg.
    let decisive = second_leg.unwrap_or(first_leg.leg);
    detail.penalties = decisive.penalties().map(|p| match second_leg {
        // leg 2 is played with `second` at home
        Some(_) => Score::new(p.away, p.home),
        None => p,
    });

    if aggregate.home != aggregate.away {
        return Ok(settle(detail, aggregate.home > aggregate.away, DecidedBy::Goals));
    }

    if let (true, Some(second_leg)) = (config.away_goals_rule, second_leg) {
        // first scores away in leg 2, second scores away in leg 1
        let first_away = second_leg.away_goals.unwrap_or(0);
        let second_away = first_leg.leg.away_goals.unwrap_or(0);
        if first_away != second_away {
            return Ok(settle(detail, first_away > second_away, DecidedBy::AwayGoals));
        }
    }

    if !config.penalties_allowed {
        return Ok((TieOutcome::Undecided, Some(detail)));
    }
    let penalties = detail.penalties;
    match penalties {
        Some(p) if p.home != p.away => Ok(settle(detail, p.home > p.away, DecidedBy::Penalties)),
        _ => Ok((TieOutcome::Undecided, Some(detail))),
    }
}

fn settle(mut detail: TieDetail, first_wins: bool, by: DecidedBy) -> (TieOutcome, Option<TieDetail>) {
    detail.decided_by = Some(by);
    let winner = if first_wins {
        detail.first.clone()
    } else {
        detail.second.clone()
    };
    (TieOutcome::Winner(winner), Some(detail))
}

/// Goals per team across the legs, oriented to leg 1: `home` is leg 1's home
/// side wherever it played. None while any leg is unscored.
pub fn aggregate(first_leg: &KnockoutLeg, second_leg: Option<&KnockoutLeg>) -> Option<Score> {
    let first = first_leg.score()?;
    match second_leg {
        None => Some(first),
        Some(second_leg) => {
            let second = second_leg.score()?;
            Some(Score::new(
                first.home.saturating_add(second.away),
                first.away.saturating_add(second.home),
            ))
        }
    }
}
