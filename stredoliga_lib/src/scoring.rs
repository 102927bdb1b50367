//! Position-to-points scoring table.

use std::collections::BTreeMap;

/// Points awarded per finishing position.
///
/// The table is an explicit value injected into the parser rather than
/// module state, so tests (and future seasons) can substitute their
/// own scoring policy. Positions outside the table score zero; there
/// are no error cases.
#[derive(Debug, Clone)]
pub struct PointsTable {
    points: BTreeMap<u32, u32>,
}

impl Default for PointsTable {
    /// League default: 1st place scores 20, descending to 1 point for
    /// 20th; 21st or worse scores nothing.
    fn default() -> Self {
        Self::from_pairs((1..=20).map(|p| (p, 21 - p)))
    }
}

impl PointsTable {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self {
            points: pairs.into_iter().collect(),
        }
    }

    /// Points for a finishing position. Absent or unlisted positions
    /// degrade to zero instead of failing.
    pub fn points_for(&self, position: Option<u32>) -> u32 {
        position
            .and_then(|p| self.points.get(&p).copied())
            .unwrap_or(0)
    }
}
