//! CSV result import: `id,group,home,away,home_goals,away_goals`, empty goals = pending.

use crate::models::GroupMatch;
use std::io::Read;

pub fn read_group_matches_csv<R: Read>(reader: R) -> Result<Vec<GroupMatch>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect()
}

/// Replace or append fixtures by id; rows later in `incoming` win.
pub fn merge_group_matches(existing: &mut Vec<GroupMatch>, incoming: Vec<GroupMatch>) {
    for m in incoming {
        match existing.iter_mut().find(|e| e.id == m.id) {
            Some(e) => *e = m,
            None => existing.push(m),
        }
    }
}
