//! Analyze endpoints: text, file upload, and document link.

mod dto;
mod handlers;
mod routes;

pub use dto::{AnalysisResponse, AnalyzeDocLinkRequest, AnalyzeTextRequest};
pub use routes::analyze_routes;
