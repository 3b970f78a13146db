//! Remote document adapters.
//!
//! Implementations of the RemoteDocumentSource port.

mod google_docs;

pub use google_docs::{GoogleDocsConfig, GoogleDocsSource};
