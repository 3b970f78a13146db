//! Application layer - use-case services over the domain and ports.
//!
//! This layer orchestrates domain operations and coordinates between
//! ports: decoding uploads, fetching linked documents, generating test
//! cases, and exporting results.

mod decode;
mod export;
mod fetch;
mod generate;
mod pipeline;

pub use decode::{
    DocumentDecoder, EMPTY_DOCUMENT_NOTICE, MIME_DOC, MIME_DOCX, MIME_PDF, UNREADABLE_PDF_NOTICE,
};
pub use export::ExportService;
pub use fetch::{FetchedDocument, Provenance, RemoteDocumentFetcher, DEMO_REQUIREMENTS};
pub use generate::{build_prompt, parse_model_reply, ReplyRejection, TestCaseGenerator};
pub use pipeline::{Analysis, AnalysisPipeline};
