//! Engine logic: standings, tie-breaks, seeding, bracket resolution, overlays.

mod bracket;
mod import;
mod overlay;
mod seeding;
mod standings;
pub mod tiebreak;

pub use bracket::{aggregate, resolve_bracket, resolve_competition};
pub use import::{merge_group_matches, read_group_matches_csv};
pub use overlay::{hypothetical, overlay_group_matches, overlay_rounds, LegPrediction, PredictionSet};
pub use seeding::{build_seeds, SeedTable};
pub use standings::{all_standings, compute_standings, group_standings};
