//! Document Text Extractor Port - one link of the decode chain.
//!
//! Best-effort text extraction from binary document formats is organized
//! as a prioritized chain of these capability objects: a real parser
//! first, heuristics after, and a fixed known-document substitution last.
//! Each link either produces usable text or passes, so a pragmatic
//! fallback can be removed without touching callers.

/// Raw input handed to each extractor in the chain.
#[derive(Debug, Clone, Copy)]
pub struct DecodeInput<'a> {
    /// The uploaded file's byte buffer.
    pub bytes: &'a [u8],
    /// Original filename, when the upload carried one.
    pub filename: Option<&'a str>,
}

impl<'a> DecodeInput<'a> {
    /// Creates a decode input.
    pub fn new(bytes: &'a [u8], filename: Option<&'a str>) -> Self {
        Self { bytes, filename }
    }
}

/// Port for best-effort document text extraction.
///
/// # Contract
///
/// - Never panic on arbitrary bytes.
/// - Return `Some` only for usable text: non-empty after trimming.
/// - Return `None` to pass the input to the next extractor in the chain.
pub trait DocumentTextExtractor: Send + Sync {
    /// Short name for logs ("docx", "pdf-text-layer", …).
    fn name(&self) -> &'static str;

    /// Attempts to extract plain text from the buffer.
    fn extract(&self, input: &DecodeInput<'_>) -> Option<String>;
}
