//! Requirement value type and the requirement extractor.
//!
//! Extraction is deliberately non-semantic: any non-empty line of input
//! becomes exactly one requirement. The extractor never fails: malformed
//! or empty input yields an empty list, which the caller turns into a
//! user-facing validation message.

use serde::{Deserialize, Serialize};

/// One discrete, user-authored statement of desired system behavior.
///
/// Ids follow the `R<n>` scheme, 1-based and dense within a single
/// extraction result. The list order is display order and linkage order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Stable identifier within one generation run (`R1`, `R2`, …).
    pub id: String,
    /// The requirement statement, verbatim from the input line.
    pub text: String,
}

impl Requirement {
    /// Creates a requirement with a 1-based position.
    pub fn numbered(position: usize, text: impl Into<String>) -> Self {
        Self {
            id: format!("R{}", position),
            text: text.into(),
        }
    }
}

/// Extracts an ordered requirement list from raw text.
///
/// Splits on line boundaries (CR, LF, or CRLF), trims each line, discards
/// lines that are empty after trimming, and assigns sequential ids
/// `R1..Rn` in input order.
///
/// Whitespace-only input yields an empty list, never an error.
pub fn extract_requirements(raw: &str) -> Vec<Requirement> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    raw.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| Requirement::numbered(index + 1, line))
        .collect()
}
