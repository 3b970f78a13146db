//! Integration tests for the generation pipeline.
//!
//! These tests exercise the full decode, extract, and generate flow against
//! the mock model, covering both fallback selection rules: missing
//! credential and malformed model output fall back, confirmed model
//! failure propagates.

use std::io::Cursor;
use std::sync::Arc;

use caseforge::adapters::ai::MockModel;
use caseforge::adapters::extract::{default_pdf_chain, default_word_chain, KNOWN_TEMPLATE_TEXT};
use caseforge::application::{
    AnalysisPipeline, DocumentDecoder, RemoteDocumentFetcher, TestCaseGenerator,
    EMPTY_DOCUMENT_NOTICE, MIME_DOCX, MIME_PDF,
};
use caseforge::domain::{GenerationOptions, PipelineError, TestCaseType};
use caseforge::ports::ModelError;

use docx_rs::{Docx, Paragraph, Run};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn pipeline_with_model(model: MockModel) -> AnalysisPipeline {
    AnalysisPipeline::new(
        DocumentDecoder::new(default_pdf_chain(), default_word_chain()),
        RemoteDocumentFetcher::new(None),
        TestCaseGenerator::new(Some(Arc::new(model))),
    )
}

fn demo_pipeline() -> AnalysisPipeline {
    AnalysisPipeline::new(
        DocumentDecoder::new(default_pdf_chain(), default_word_chain()),
        RemoteDocumentFetcher::new(None),
        TestCaseGenerator::new(None),
    )
}

fn docx_bytes(lines: &[&str]) -> Vec<u8> {
    let mut docx = Docx::new();
    for line in lines {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)));
    }
    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).expect("pack docx");
    cursor.into_inner()
}

fn default_options() -> GenerationOptions {
    GenerationOptions::default()
}

// =============================================================================
// Text analysis
// =============================================================================

#[tokio::test]
async fn text_analysis_uses_model_reply_when_valid() {
    let reply = r#"[
        {"id": "TC1", "description": "Log in with valid credentials",
         "precondition": "Account exists", "type": "positive",
         "expectedResult": "Dashboard is shown", "priority": "high",
         "requirement": "R1"},
        {"id": "TC2", "description": "Log in with a wrong password",
         "type": "negative", "expectedResult": "Error message is shown",
         "requirement": "R1"}
    ]"#;
    let pipeline = pipeline_with_model(MockModel::new().with_reply(reply));

    let analysis = pipeline
        .analyze_text("User can log in", &default_options())
        .await
        .unwrap();

    assert_eq!(analysis.requirements.len(), 1);
    assert_eq!(analysis.test_cases.len(), 2);
    assert_eq!(analysis.test_cases[0].id, "TC1");
    assert_eq!(analysis.test_cases[1].case_type, TestCaseType::Negative);
    // Defaults applied to the second record.
    assert_eq!(analysis.test_cases[1].precondition, "System is properly configured");
}

#[tokio::test]
async fn malformed_model_reply_falls_back_deterministically() {
    let pipeline =
        pipeline_with_model(MockModel::new().with_reply("I'd rather write prose than JSON."));
    let options = GenerationOptions {
        include_negative_tests: true,
        include_edge_cases: true,
        include_performance_tests: false,
        ..GenerationOptions::default()
    };

    let analysis = pipeline
        .analyze_text("User can log in", &options)
        .await
        .unwrap();

    let ids: Vec<&str> = analysis.test_cases.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["TC1", "TC2", "TC3"]);
    let types: Vec<TestCaseType> = analysis.test_cases.iter().map(|c| c.case_type).collect();
    assert_eq!(
        types,
        vec![TestCaseType::Positive, TestCaseType::Negative, TestCaseType::EdgeCase]
    );
    assert!(analysis.test_cases.iter().all(|c| c.requirement == "R1"));
}

#[tokio::test]
async fn repairable_model_reply_is_sanitized_and_used() {
    let reply = r#"Here is the JSON:
    [
        {id: "TC1", description: 'covers the login flow', type: "positive",
         expectedResult: "login succeeds", requirement: "R1",},
    ]"#;
    let pipeline = pipeline_with_model(MockModel::new().with_reply(reply));

    let analysis = pipeline
        .analyze_text("User can log in", &default_options())
        .await
        .unwrap();

    assert_eq!(analysis.test_cases.len(), 1);
    assert_eq!(analysis.test_cases[0].description, "covers the login flow");
}

#[tokio::test]
async fn model_call_failure_propagates_to_the_caller() {
    let pipeline = pipeline_with_model(
        MockModel::new().with_error(ModelError::unavailable("connection reset")),
    );

    let err = pipeline
        .analyze_text("User can log in", &default_options())
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::GenerationFailed { .. }));
}

#[tokio::test]
async fn blank_input_produces_an_empty_result_without_a_model_call() {
    let model = MockModel::new();
    let probe = model.clone();
    let pipeline = pipeline_with_model(model);

    let analysis = pipeline
        .analyze_text(" \n\t \n", &default_options())
        .await
        .unwrap();

    assert!(analysis.requirements.is_empty());
    assert!(analysis.test_cases.is_empty());
    assert_eq!(probe.call_count(), 0);
}

// =============================================================================
// Document upload analysis
// =============================================================================

#[tokio::test]
async fn docx_upload_extracts_one_requirement_per_paragraph() {
    let bytes = docx_bytes(&["Login works", "Logout works"]);
    let pipeline = demo_pipeline();

    let analysis = pipeline
        .analyze_upload(&bytes, MIME_DOCX, Some("reqs.docx"), &default_options())
        .await
        .unwrap();

    let texts: Vec<&str> = analysis
        .requirements
        .iter()
        .map(|r| r.text.as_str())
        .collect();
    assert_eq!(texts, vec!["Login works", "Logout works"]);
    assert_eq!(analysis.requirements[0].id, "R1");
    assert_eq!(analysis.requirements[1].id, "R2");
}

#[tokio::test]
async fn whitespace_only_docx_degrades_to_the_diagnostic_requirement() {
    let bytes = docx_bytes(&["   ", "\t"]);
    let pipeline = demo_pipeline();

    let analysis = pipeline
        .analyze_upload(&bytes, MIME_DOCX, None, &default_options())
        .await
        .unwrap();

    assert_eq!(analysis.requirements.len(), 1);
    assert_eq!(analysis.requirements[0].text, EMPTY_DOCUMENT_NOTICE);
    // The diagnostic requirement still gets test cases.
    assert!(!analysis.test_cases.is_empty());
}

#[tokio::test]
async fn unparseable_pdf_in_the_size_band_uses_the_known_template() {
    let bytes = vec![0u8; 20 * 1024];
    let pipeline = demo_pipeline();

    let analysis = pipeline
        .analyze_upload(&bytes, MIME_PDF, Some("mystery.pdf"), &default_options())
        .await
        .unwrap();

    let expected = KNOWN_TEMPLATE_TEXT.lines().count();
    assert_eq!(analysis.requirements.len(), expected);
    assert_eq!(analysis.requirements[0].text, KNOWN_TEMPLATE_TEXT.lines().next().unwrap());
}

#[tokio::test]
async fn pdf_with_literal_strings_is_harvested_heuristically() {
    let bytes = b"%PDF-1.4\nBT (Users can reset passwords) Tj (Sessions expire after an hour) Tj ET";
    let pipeline = demo_pipeline();

    let analysis = pipeline
        .analyze_upload(bytes, MIME_PDF, None, &default_options())
        .await
        .unwrap();

    let texts: Vec<&str> = analysis
        .requirements
        .iter()
        .map(|r| r.text.as_str())
        .collect();
    assert_eq!(
        texts,
        vec!["Users can reset passwords", "Sessions expire after an hour"]
    );
}

#[tokio::test]
async fn unsupported_mime_type_is_rejected() {
    let pipeline = demo_pipeline();
    let err = pipeline
        .analyze_upload(b"a,b,c", "text/csv", Some("reqs.csv"), &default_options())
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::UnsupportedFileType { .. }));
}

// =============================================================================
// Document link analysis
// =============================================================================

#[tokio::test]
async fn demo_document_link_yields_five_requirements_and_cases() {
    let pipeline = demo_pipeline();

    let analysis = pipeline
        .analyze_document_link(
            "https://docs.google.com/document/d/1demoDoc42/edit",
            &default_options(),
        )
        .await
        .unwrap();

    assert_eq!(analysis.requirements.len(), 5);
    // Default options: positive + negative + edge per requirement.
    assert_eq!(analysis.test_cases.len(), 15);
    for case in &analysis.test_cases {
        assert!(analysis.requirements.iter().any(|r| r.id == case.requirement));
    }
}

#[tokio::test]
async fn malformed_document_link_is_rejected() {
    let pipeline = demo_pipeline();
    let err = pipeline
        .analyze_document_link("https://example.com/not-a-doc", &default_options())
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::InvalidReference { .. }));
}

// =============================================================================
// Determinism
// =============================================================================

#[tokio::test]
async fn fallback_generation_is_deterministic_across_runs() {
    let options = GenerationOptions {
        include_negative_tests: true,
        include_edge_cases: false,
        include_performance_tests: true,
        ..GenerationOptions::default()
    };

    let first = demo_pipeline()
        .analyze_text("alpha\nbeta", &options)
        .await
        .unwrap();
    let second = demo_pipeline()
        .analyze_text("alpha\nbeta", &options)
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_string(&first.test_cases).unwrap(),
        serde_json::to_string(&second.test_cases).unwrap()
    );
    // 2 requirements x (positive + negative + performance)
    assert_eq!(first.test_cases.len(), 6);
}
