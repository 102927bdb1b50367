//! Error types for the library layer.

use std::path::PathBuf;

/// Fatal, file-level parsing failures. Record-level oddities (missing
/// ids, non-numeric positions, empty category names) degrade to
/// documented defaults in the parser instead of erroring, so a single
/// sloppy entry never sinks the whole season.
#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed result document {}: {source}", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },
    #[error("event {} is missing its start date", path.display())]
    MissingDate { path: PathBuf },
    #[error("event {} has unparseable start date {value:?}: {source}", path.display())]
    BadDate {
        path: PathBuf,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
