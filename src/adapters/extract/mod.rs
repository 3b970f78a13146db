//! Document text extraction adapters.
//!
//! Implementations of the DocumentTextExtractor port, assembled into
//! per-format chains by `default_pdf_chain` / `default_word_chain`.
//!
//! ## Available Extractors
//!
//! - `DocxTextExtractor` - structural DOCX walk (docx-rs)
//! - `PdfTextLayerExtractor` - real PDF text-layer parse (lopdf)
//! - `PdfLiteralStringExtractor` - content-stream literal heuristic
//! - `KnownTemplateExtractor` - fixed substitution for one known document

mod docx;
mod known_template;
mod pdf_heuristic;
mod pdf_text_layer;

pub use docx::DocxTextExtractor;
pub use known_template::{KnownTemplateExtractor, KNOWN_TEMPLATE_TEXT};
pub use pdf_heuristic::PdfLiteralStringExtractor;
pub use pdf_text_layer::PdfTextLayerExtractor;

use std::sync::Arc;

use crate::ports::DocumentTextExtractor;

/// The PDF chain: real parser, then literal heuristic, then the
/// known-template substitution.
pub fn default_pdf_chain() -> Vec<Arc<dyn DocumentTextExtractor>> {
    vec![
        Arc::new(PdfTextLayerExtractor),
        Arc::new(PdfLiteralStringExtractor),
        Arc::new(KnownTemplateExtractor),
    ]
}

/// The Word chain: structural DOCX extraction.
pub fn default_word_chain() -> Vec<Arc<dyn DocumentTextExtractor>> {
    vec![Arc::new(DocxTextExtractor)]
}
