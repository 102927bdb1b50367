//! Mapping from the raw IOF `<Status>` text to a display outcome.

use std::fmt;

/// Non-ranked outcomes shown in a result cell instead of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    DidNotStart,
    DidNotFinish,
    Disqualified,
}

impl StatusCode {
    pub fn label(self) -> &'static str {
        match self {
            Self::DidNotStart => "DNS",
            Self::DidNotFinish => "DNF",
            Self::Disqualified => "DISQ",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a raw status string to a display outcome, case-insensitively.
///
/// `None` means "resolve by position": the run was `OK` or the status
/// was absent. Any other non-empty status (MisPunch, OverTime,
/// Disqualified, ...) folds into `DISQ` rather than erroring.
pub fn map_status(raw: &str) -> Option<StatusCode> {
    let raw = raw.to_lowercase();
    match raw.as_str() {
        "didnotstart" => Some(StatusCode::DidNotStart),
        "didnotfinish" => Some(StatusCode::DidNotFinish),
        "" | "ok" => None,
        _ => Some(StatusCode::Disqualified),
    }
}
