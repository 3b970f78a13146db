//! PDF text-layer extraction via lopdf.
//!
//! The real-parser link of the PDF chain: loads the document model and
//! extracts the text layer page by page. Encrypted, scanned, or corrupted
//! files fail the load or yield no text and pass to the heuristic links.

use lopdf::Document;

use crate::ports::{DecodeInput, DocumentTextExtractor};

/// Text-layer extractor for PDF buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextLayerExtractor;

impl DocumentTextExtractor for PdfTextLayerExtractor {
    fn name(&self) -> &'static str {
        "pdf-text-layer"
    }

    fn extract(&self, input: &DecodeInput<'_>) -> Option<String> {
        let document = Document::load_mem(input.bytes).ok()?;

        let mut pages = Vec::new();
        for page_number in document.get_pages().keys() {
            if let Ok(page_text) = document.extract_text(&[*page_number]) {
                let trimmed = page_text.trim();
                if !trimmed.is_empty() {
                    pages.push(trimmed.to_string());
                }
            }
        }

        if pages.is_empty() {
            None
        } else {
            Some(pages.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_pdf_bytes_pass() {
        let extractor = PdfTextLayerExtractor;
        assert_eq!(extractor.extract(&DecodeInput::new(b"not a pdf", None)), None);
        assert_eq!(extractor.extract(&DecodeInput::new(b"", None)), None);
    }

    #[test]
    fn pdf_without_text_layer_passes() {
        // Minimal structurally-valid PDF with an empty page tree.
        let bytes = b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n\
                      2 0 obj\n<< /Type /Pages /Kids [] /Count 0 >>\nendobj\n\
                      trailer\n<< /Root 1 0 R >>\n%%EOF";
        let extractor = PdfTextLayerExtractor;
        assert_eq!(extractor.extract(&DecodeInput::new(bytes, None)), None);
    }
}
