//! Core library for the Stredo Liga season results compiler.
//!
//! Parses per-event IOF XML 3.0 `ResultList` documents, normalizes
//! free-text category names, scores finishing positions from a points
//! table, and aggregates every competitor's season into ranked
//! per-category tables ready for CSV serialization.

pub mod aggregate;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod report;
pub mod scoring;
pub mod status;

pub use aggregate::{aggregate, CategoryTable, CompetitorRow};
pub use error::ResultsError;
pub use normalize::normalize_category;
pub use parser::{parse_event, parse_event_str, CompetitorKey, Event, ResultRecord};
pub use report::{build_report, rank_rows, RankedRow, SeasonReport};
pub use scoring::PointsTable;
pub use status::{map_status, StatusCode};
