//! Analysis pipeline facade: one entry point per input kind.
//!
//! Each analysis is a sequential run of decode/fetch (when applicable),
//! requirement extraction, and generation. Either the full result comes
//! back or an error does; partial results are never returned.

use crate::domain::{extract_requirements, GenerationOptions, PipelineError, Requirement, TestCase};

use super::decode::DocumentDecoder;
use super::fetch::RemoteDocumentFetcher;
use super::generate::TestCaseGenerator;

/// A complete generation result.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub requirements: Vec<Requirement>,
    pub test_cases: Vec<TestCase>,
}

/// Wires the decoder, fetcher, and generator into the three analyze
/// operations the HTTP surface exposes.
pub struct AnalysisPipeline {
    decoder: DocumentDecoder,
    fetcher: RemoteDocumentFetcher,
    generator: TestCaseGenerator,
}

impl AnalysisPipeline {
    /// Creates a pipeline from its three services.
    pub fn new(
        decoder: DocumentDecoder,
        fetcher: RemoteDocumentFetcher,
        generator: TestCaseGenerator,
    ) -> Self {
        Self {
            decoder,
            fetcher,
            generator,
        }
    }

    /// Analyzes typed requirement text.
    pub async fn analyze_text(
        &self,
        text: &str,
        options: &GenerationOptions,
    ) -> Result<Analysis, PipelineError> {
        let requirements = extract_requirements(text);
        self.generate(requirements, options).await
    }

    /// Analyzes an uploaded document buffer.
    pub async fn analyze_upload(
        &self,
        bytes: &[u8],
        mime_type: &str,
        filename: Option<&str>,
        options: &GenerationOptions,
    ) -> Result<Analysis, PipelineError> {
        let text = self.decoder.decode(bytes, mime_type, filename)?;
        let requirements = extract_requirements(&text);
        self.generate(requirements, options).await
    }

    /// Analyzes a linked remote document.
    pub async fn analyze_document_link(
        &self,
        url: &str,
        options: &GenerationOptions,
    ) -> Result<Analysis, PipelineError> {
        let fetched = self.fetcher.fetch(url).await?;
        let requirements = extract_requirements(&fetched.text);
        self.generate(requirements, options).await
    }

    async fn generate(
        &self,
        requirements: Vec<Requirement>,
        options: &GenerationOptions,
    ) -> Result<Analysis, PipelineError> {
        let test_cases = self.generator.generate(&requirements, options).await?;
        Ok(Analysis {
            requirements,
            test_cases,
        })
    }
}
