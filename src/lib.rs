//! Prediction pool engine: group standings and knockout bracket resolution.
//!
//! Pure functions over an input snapshot. The surrounding application fetches
//! teams and fixtures (official results or a user's predictions), calls in,
//! and consumes the ordered tables and resolved slots.

pub mod logic;
pub mod models;

pub use logic::{
    aggregate, all_standings, build_seeds, compute_standings, group_standings, hypothetical,
    merge_group_matches, overlay_group_matches, overlay_rounds, read_group_matches_csv,
    resolve_bracket, resolve_competition, LegPrediction, PredictionSet, SeedTable,
};
pub use models::{
    group_fixtures, BracketResolution, ClassificationRow, Competition, CompetitionConfig,
    DecidedBy, EngineError, GroupId, GroupMatch, KnockoutLeg, LegFormat, ManualOrder, MatchId,
    PlaceholderCode, PointsRule, Result, Round, RoundId, Score, Slot, Team, TeamId, TeamRegistry,
    Tie, TieBreakPriority, TieDetail, TieId, TieOutcome,
};
