//! Document decoding: mime dispatch over prioritized extractor chains.
//!
//! Decoding is best-effort by contract. For a supported mime type this
//! service always returns a non-empty string: real extraction output when
//! any chain link succeeds, otherwise a fixed diagnostic sentence that the
//! requirement extractor turns into a single explanatory requirement. The
//! only raising path is an unsupported mime type, which is the caller's
//! input-contract violation.

use std::sync::Arc;

use crate::domain::PipelineError;
use crate::ports::{DecodeInput, DocumentTextExtractor};

/// PDF mime type.
pub const MIME_PDF: &str = "application/pdf";
/// Legacy Word mime type.
pub const MIME_DOC: &str = "application/msword";
/// OOXML Word mime type.
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Diagnostic substituted when a Word document parses but contains no text.
pub const EMPTY_DOCUMENT_NOTICE: &str =
    "The uploaded document contains no readable text; enter one requirement per line instead.";

/// Diagnostic substituted when every PDF extraction strategy fails.
pub const UNREADABLE_PDF_NOTICE: &str =
    "Failed to parse PDF content; the file may be encrypted, scanned, or use an unsupported \
     internal structure.";

/// Best-effort decoder from document bytes to plain text.
pub struct DocumentDecoder {
    pdf_chain: Vec<Arc<dyn DocumentTextExtractor>>,
    word_chain: Vec<Arc<dyn DocumentTextExtractor>>,
}

impl DocumentDecoder {
    /// Creates a decoder with explicit extraction chains.
    ///
    /// Chains run in order; the first extractor returning usable text
    /// wins. An empty chain degrades every input to the diagnostic
    /// sentence for that format family.
    pub fn new(
        pdf_chain: Vec<Arc<dyn DocumentTextExtractor>>,
        word_chain: Vec<Arc<dyn DocumentTextExtractor>>,
    ) -> Self {
        Self {
            pdf_chain,
            word_chain,
        }
    }

    /// Decodes a document buffer into plain text.
    ///
    /// # Errors
    ///
    /// `PipelineError::UnsupportedFileType` for mime types outside
    /// {pdf, doc, docx}. Every other irregularity degrades to a
    /// diagnostic sentence instead of failing.
    pub fn decode(
        &self,
        bytes: &[u8],
        mime_type: &str,
        filename: Option<&str>,
    ) -> Result<String, PipelineError> {
        let input = DecodeInput::new(bytes, filename);

        let (chain, fallback_notice) = match mime_type {
            MIME_PDF => (&self.pdf_chain, UNREADABLE_PDF_NOTICE),
            MIME_DOC | MIME_DOCX => (&self.word_chain, EMPTY_DOCUMENT_NOTICE),
            other => {
                return Err(PipelineError::unsupported_file_type(other));
            }
        };

        for extractor in chain {
            if let Some(text) = extractor.extract(&input) {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    tracing::debug!(
                        extractor = extractor.name(),
                        bytes = bytes.len(),
                        "document text extracted"
                    );
                    return Ok(trimmed.to_string());
                }
            }
        }

        tracing::warn!(
            mime_type,
            bytes = bytes.len(),
            "no extractor produced text, substituting diagnostic"
        );
        Ok(fallback_notice.to_string())
    }

    /// True when the mime type is one the decoder accepts.
    pub fn supports(mime_type: &str) -> bool {
        matches!(mime_type, MIME_PDF | MIME_DOC | MIME_DOCX)
    }
}
