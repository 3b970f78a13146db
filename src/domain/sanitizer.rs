//! Heuristic repair of near-JSON model output.
//!
//! Generative models frequently emit almost-valid JSON: trailing commas,
//! bare object keys, single-quoted strings, or prose wrapped around the
//! payload. This module narrows that gap before strict parsing. It fixes
//! only that narrow class of deviations; arbitrary malformed JSON stays
//! malformed, and the caller falls back to deterministic generation.

use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_COMMA_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*\}").expect("valid regex"));
static TRAILING_COMMA_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*\]").expect("valid regex"));
static UNQUOTED_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"['"]?([A-Za-z0-9_]+)['"]?\s*:"#).expect("valid regex"));
static SINGLE_QUOTED_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":\s*'([^']*)'").expect("valid regex"));

/// Locates the first top-level JSON array in `raw` by bracket matching.
///
/// Bracket characters inside double-quoted string literals (including
/// escaped quotes) are ignored. Returns the `[...]` slice, or `None` when
/// the text contains no complete array.
pub fn extract_json_array(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Repairs the common LLM output deviations in a JSON array string.
///
/// Key-quoting runs before value-quoting so an already-quoted key is never
/// reinterpreted as a value. The value pass only touches the `: '...'`
/// shape, leaving apostrophes inside double-quoted text alone.
pub fn sanitize(raw: &str) -> String {
    let without_object_commas = TRAILING_COMMA_OBJECT.replace_all(raw, "}");
    let without_commas = TRAILING_COMMA_ARRAY.replace_all(&without_object_commas, "]");
    let quoted_keys = UNQUOTED_KEY.replace_all(&without_commas, "\"${1}\":");
    SINGLE_QUOTED_VALUE
        .replace_all(&quoted_keys, ":\"${1}\"")
        .into_owned()
}
