//! Season aggregation: one table per category, one column per event.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::parser::{CompetitorKey, Event, ResultRecord};
use crate::status::map_status;

/// A competitor's season within one category: one display cell per
/// event (default empty, meaning "not entered") and the running point
/// total. `total` is the sum of the numeric cells only.
#[derive(Debug, Clone)]
pub struct CompetitorRow {
    pub competitor: CompetitorKey,
    pub cells: Vec<String>,
    pub total: u32,
}

/// Per-category accumulation. Rows are kept in first-appearance order,
/// which is the only ordering context for equal totals later on.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    event_count: usize,
    index: HashMap<CompetitorKey, usize>,
    rows: Vec<CompetitorRow>,
}

impl CategoryTable {
    fn new(event_count: usize) -> Self {
        Self {
            event_count,
            index: HashMap::new(),
            rows: Vec::new(),
        }
    }

    fn row_mut(&mut self, competitor: &CompetitorKey) -> &mut CompetitorRow {
        let idx = match self.index.get(competitor) {
            Some(&idx) => idx,
            None => {
                let idx = self.rows.len();
                self.rows.push(CompetitorRow {
                    competitor: competitor.clone(),
                    cells: vec![String::new(); self.event_count],
                    total: 0,
                });
                self.index.insert(competitor.clone(), idx);
                idx
            }
        };
        &mut self.rows[idx]
    }

    pub fn rows(&self) -> &[CompetitorRow] {
        &self.rows
    }

    pub fn event_count(&self) -> usize {
        self.event_count
    }
}

/// Resolve the display cell for one record: a mapped status code beats
/// everything; an entry with no position shows as empty; a scored run
/// shows its points; 21st or worse shows "0".
fn display_value(record: &ResultRecord) -> String {
    if let Some(code) = map_status(&record.status_raw) {
        return code.to_string();
    }
    match record.position {
        None => String::new(),
        Some(_) if record.points > 0 => record.points.to_string(),
        Some(_) => "0".to_string(),
    }
}

/// Fold date-sorted events into per-category tables.
///
/// Events must already be sorted ascending by date: the event index is
/// the cell index. A competitor absent from an event keeps that
/// event's default empty cell and contributes nothing to the total.
/// The `BTreeMap` keys supply the lexicographic section order of the
/// final report.
pub fn aggregate(events: &[Event]) -> BTreeMap<String, CategoryTable> {
    let mut categories: BTreeMap<String, CategoryTable> = BTreeMap::new();

    for (event_idx, event) in events.iter().enumerate() {
        for record in &event.records {
            let table = categories
                .entry(record.category.clone())
                .or_insert_with(|| CategoryTable::new(events.len()));

            let display = display_value(record);
            let row = table.row_mut(&record.competitor);
            if let Ok(value) = display.parse::<u32>() {
                row.total += value;
            }
            row.cells[event_idx] = display;
        }
    }

    debug!(
        events = events.len(),
        categories = categories.len(),
        "aggregated season standings"
    );
    categories
}
