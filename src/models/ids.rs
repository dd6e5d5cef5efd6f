//! Opaque string identifiers used throughout the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Stable, competition-scoped team identifier. Never a display name.
    TeamId
);
string_id!(
    /// Group label, e.g. `A`.
    GroupId
);
string_id!(
    /// Identifier of a group match or knockout leg.
    MatchId
);
string_id!(RoundId);
string_id!(
    /// Identifier shared by the legs of one aggregate confrontation.
    TieId
);
string_id!(
    /// Symbolic slot standing in for a team not yet determined, e.g. `WP04`
    /// or `RunnerUp:GroupE`.
    PlaceholderCode
);

impl PlaceholderCode {
    /// Code for the team finishing `position` (1-based) in `group`.
    pub fn group_position(group: &GroupId, position: usize) -> Self {
        let label = match position {
            1 => "Winner".to_owned(),
            2 => "RunnerUp".to_owned(),
            3 => "Third".to_owned(),
            n => format!("Pos{n}"),
        };
        Self(format!("{label}:Group{group}"))
    }
}
