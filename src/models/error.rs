//! Structural errors. Pending data is never an error; it shows up as
//! excluded matches or undecided ties in the output instead.

use crate::models::ids::{GroupId, MatchId, PlaceholderCode, TeamId, TieId};
use thiserror::Error;

/// Errors that indicate a broken roster or round graph.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EngineError {
    /// A match references a team outside the group's roster.
    #[error("match {match_id} references team {team} which is not in the roster of group {group}")]
    UnknownTeam {
        match_id: MatchId,
        group: GroupId,
        team: TeamId,
    },
    /// The same team id appears twice in the registry.
    #[error("team {0} is registered more than once")]
    DuplicateTeam(TeamId),
    /// A leg references a code that no group seed or earlier round produces.
    #[error("tie {tie} references placeholder {code} which nothing earlier in the bracket produces")]
    UnknownPlaceholder { tie: TieId, code: PlaceholderCode },
    /// Two producers (seeds or ties) write the same code.
    #[error("placeholder {0} is produced more than once")]
    DuplicatePlaceholder(PlaceholderCode),
    /// Leg set of a tie does not match its format.
    #[error("tie {tie} is malformed: {reason}")]
    MalformedTie { tie: TieId, reason: String },
    /// Second leg does not swap the first leg's home and away teams.
    #[error("tie {tie}: leg 2 must be {expected_home} v {expected_away} (first leg reversed)")]
    MisorientedTie {
        tie: TieId,
        expected_home: TeamId,
        expected_away: TeamId,
    },
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
