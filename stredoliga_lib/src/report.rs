//! Ranked rows and the combined season report grid.

use std::collections::BTreeMap;

use crate::aggregate::CategoryTable;
use crate::parser::{CompetitorKey, Event};

/// Identity/rank columns before the per-event columns.
const LEAD_COLUMNS: usize = 4;
/// Blank rows between category sections.
const SEPARATOR_ROWS: usize = 3;

/// One ranked line of a category table.
#[derive(Debug, Clone)]
pub struct RankedRow {
    pub rank: usize,
    pub competitor: CompetitorKey,
    pub cells: Vec<String>,
    pub total: u32,
}

/// Rank a category's competitors by descending season total, 1-based
/// and contiguous. The sort is stable: equal totals keep their
/// first-appearance order, with no secondary tie-break.
pub fn rank_rows(table: &CategoryTable) -> Vec<RankedRow> {
    let mut rows = table.rows().to_vec();
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| RankedRow {
            rank: idx + 1,
            competitor: row.competitor,
            cells: row.cells,
            total: row.total,
        })
        .collect()
}

/// The whole season as one rectangular grid, ready for CSV. Every row
/// has the same width: four identity columns, one column per event,
/// and the season total.
#[derive(Debug, Clone)]
pub struct SeasonReport {
    /// First line of the file: Pos, Name, FamilyName, ID, Race 1..N, Total.
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub category_count: usize,
}

/// Serialize all category tables into one combined grid.
///
/// Per category, in key order: a title row naming the category; a
/// round-ordinal header; an event-date header; a column-name header;
/// ranked data rows; then a blank separator. The separator after the
/// last category is omitted.
pub fn build_report(events: &[Event], standings: &BTreeMap<String, CategoryTable>) -> SeasonReport {
    let width = LEAD_COLUMNS + events.len() + 1;

    let mut columns: Vec<String> = ["Pos", "Name", "FamilyName", "ID"]
        .map(String::from)
        .to_vec();
    columns.extend((1..=events.len()).map(|n| format!("Race {n}")));
    columns.push("Total".to_string());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (section, (category, table)) in standings.iter().enumerate() {
        if section > 0 {
            for _ in 0..SEPARATOR_ROWS {
                rows.push(vec![String::new(); width]);
            }
        }

        // Category title over the first event column.
        let mut title = vec![String::new(); width];
        title[LEAD_COLUMNS] = category.clone();
        rows.push(title);

        let mut ordinals = vec![String::new(); width];
        let mut dates = vec![String::new(); width];
        for (idx, event) in events.iter().enumerate() {
            ordinals[LEAD_COLUMNS + idx] = format!("{}. kolo", idx + 1);
            dates[LEAD_COLUMNS + idx] = event.date.format("%Y-%m-%d").to_string();
        }
        rows.push(ordinals);
        rows.push(dates);

        let mut names: Vec<String> = ["Poradie", "Meno", "Priezvisko", "SZOS ID"]
            .map(String::from)
            .to_vec();
        names.extend(events.iter().map(|event| event.name.clone()));
        names.push("Body spolu".to_string());
        rows.push(names);

        for ranked in rank_rows(table) {
            let mut row = Vec::with_capacity(width);
            row.push(ranked.rank.to_string());
            row.push(ranked.competitor.given);
            row.push(ranked.competitor.family);
            row.push(ranked.competitor.external_id);
            row.extend(ranked.cells);
            row.push(ranked.total.to_string());
            rows.push(row);
        }
    }

    SeasonReport {
        columns,
        rows,
        category_count: standings.len(),
    }
}
