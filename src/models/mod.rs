//! Data structures for the engine: identifiers, teams, fixtures, config and outputs.

mod competition;
mod config;
mod error;
mod fixture;
mod ids;
mod outcome;
mod team;

pub use competition::{Competition, ManualOrder};
pub use config::{CompetitionConfig, LegFormat, PointsRule, TieBreakPriority};
pub use error::{EngineError, Result};
pub use fixture::{group_fixtures, GroupMatch, KnockoutLeg, Round, Score, Slot, Tie};
pub use ids::{GroupId, MatchId, PlaceholderCode, RoundId, TeamId, TieId};
pub use outcome::{BracketResolution, ClassificationRow, DecidedBy, TieDetail, TieOutcome};
pub use team::{Team, TeamRegistry};
