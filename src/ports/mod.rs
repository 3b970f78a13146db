//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `GenerativeModel` - the test-case-writing LLM
//! - `RemoteDocumentSource` - external document text retrieval
//! - `DocumentTextExtractor` - one link of the binary-document decode chain
//! - `SpreadsheetWriter` - export artifact serialization
//! - `ProjectStore` - keyed storage for generation results

mod document_source;
mod exporter;
mod generative_model;
mod project_store;
mod text_extractor;

pub use document_source::{DocumentId, FetchError, RemoteDocumentSource};
pub use exporter::{ExportArtifact, ExportError, SpreadsheetWriter};
pub use generative_model::{GenerativeModel, ModelError, ModelInfo};
pub use project_store::{NewProject, ProjectStore, StoredProject};
pub use text_extractor::{DecodeInput, DocumentTextExtractor};
