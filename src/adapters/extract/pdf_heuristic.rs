//! Structural-heuristic PDF extraction.
//!
//! Second link of the PDF chain, for files the real parser cannot open.
//! Scans the leading slice of the buffer as lossy text; when PDF
//! content-stream or info-dictionary markers are present, harvests the
//! parenthesized literal string tokens and joins them line by line.
//! Works only on PDFs with uncompressed content streams; compressed
//! streams carry no literals in the clear and pass through.

use crate::ports::{DecodeInput, DocumentTextExtractor};

/// How much of the buffer the scan reads.
const SCAN_WINDOW: usize = 10_000;

/// Markers that indicate text-showing operators or an info dictionary.
const MARKERS: &[&str] = &["Tj", "TJ", "BT", "/Title", "/Author", "/Producer"];

/// Minimum literal length worth keeping; shorter tokens are mostly
/// kerning fragments and escape noise.
const MIN_LITERAL_LEN: usize = 2;

/// Literal-string harvester for PDF buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfLiteralStringExtractor;

impl DocumentTextExtractor for PdfLiteralStringExtractor {
    fn name(&self) -> &'static str {
        "pdf-literal-strings"
    }

    fn extract(&self, input: &DecodeInput<'_>) -> Option<String> {
        let window = &input.bytes[..input.bytes.len().min(SCAN_WINDOW)];
        let text = String::from_utf8_lossy(window);

        if !MARKERS.iter().any(|marker| text.contains(marker)) {
            return None;
        }

        let literals = collect_literals(&text);
        if literals.is_empty() {
            return None;
        }
        Some(literals.join("\n"))
    }
}

/// Collects `(...)` literal tokens, honoring backslash escapes and nested
/// parentheses the way PDF string syntax defines them.
fn collect_literals(text: &str) -> Vec<String> {
    let mut literals = Vec::new();
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '(' {
            continue;
        }

        let mut literal = String::new();
        let mut depth = 1usize;
        while let Some(inner) = chars.next() {
            match inner {
                '\\' => {
                    // Keep the escaped character, drop the backslash.
                    if let Some(escaped) = chars.next() {
                        literal.push(escaped);
                    }
                }
                '(' => {
                    depth += 1;
                    literal.push(inner);
                }
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                    literal.push(inner);
                }
                _ => literal.push(inner),
            }
        }

        let trimmed = literal.trim();
        if trimmed.len() >= MIN_LITERAL_LEN && trimmed.chars().any(|c| c.is_alphanumeric()) {
            literals.push(trimmed.to_string());
        }
    }

    literals
}
