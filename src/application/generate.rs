//! Test case generation: the AI path with its defensive parse, and the
//! deterministic fallback.
//!
//! The credential branch is decided at construction: a generator built
//! without a model never attempts a network call. On the AI path, a model
//! reply that cannot be turned into valid test cases falls back to
//! deterministic generation; a failed model call does not. Fabricating
//! content after a confirmed service failure would be misleading, so that
//! error propagates.

use std::sync::Arc;

use rand::Rng;
use serde::Deserialize;

use crate::domain::{
    extract_json_array, generate_fallback_cases, sanitize, GenerationOptions, PipelineError,
    Priority, Requirement, TestCase, TestCaseType, GENERIC_PRECONDITION,
};
use crate::ports::GenerativeModel;

/// Produces test cases for a requirement list.
pub struct TestCaseGenerator {
    model: Option<Arc<dyn GenerativeModel>>,
}

impl TestCaseGenerator {
    /// Creates a generator. Pass `None` when no AI credential is
    /// configured; generation then uses the deterministic fallback only.
    pub fn new(model: Option<Arc<dyn GenerativeModel>>) -> Self {
        Self { model }
    }

    /// Generates test cases for the given requirements and options.
    ///
    /// # Errors
    ///
    /// `PipelineError::GenerationFailed` when a configured model call
    /// fails. Malformed model output is not an error: it degrades to
    /// fallback generation.
    pub async fn generate(
        &self,
        requirements: &[Requirement],
        options: &GenerationOptions,
    ) -> Result<Vec<TestCase>, PipelineError> {
        if requirements.is_empty() {
            return Ok(Vec::new());
        }

        let Some(model) = &self.model else {
            tracing::info!(
                requirements = requirements.len(),
                path = "fallback",
                "no AI credential configured, using deterministic generation"
            );
            return Ok(generate_fallback_cases(requirements, options));
        };

        let prompt = build_prompt(requirements, options);
        let info = model.model_info();
        let reply = model.generate(&prompt).await.map_err(|e| {
            tracing::error!(provider = %info.provider, model = %info.model, error = %e, "model call failed");
            PipelineError::generation_failed(e.to_string())
        })?;

        match parse_model_reply(&reply, requirements) {
            Ok(cases) => {
                tracing::info!(
                    provider = %info.provider,
                    model = %info.model,
                    cases = cases.len(),
                    path = "model",
                    "test cases generated"
                );
                Ok(cases)
            }
            Err(reason) => {
                tracing::warn!(
                    provider = %info.provider,
                    reason = %reason,
                    path = "fallback",
                    "model reply unusable, using deterministic generation"
                );
                Ok(generate_fallback_cases(requirements, options))
            }
        }
    }
}

/// Builds the generation prompt for the model.
///
/// Positive coverage is always requested; the negative/edge/performance
/// lines mirror the three option booleans exactly.
pub fn build_prompt(requirements: &[Requirement], options: &GenerationOptions) -> String {
    let formatted = requirements
        .iter()
        .map(|req| format!("{}: {}", req.id, req.text))
        .collect::<Vec<_>>()
        .join("\n");

    let mut prompt = format!(
        "Generate comprehensive test cases for the following requirements:\n\n{}\n\n",
        formatted
    );

    prompt.push_str("Generate a diverse set of test cases that thoroughly cover the requirements.\n");
    prompt.push_str("Include test cases that verify the basic functionality (positive test cases).\n");

    if options.include_negative_tests {
        prompt.push_str("Include negative test cases that verify error handling and validation.\n");
    }
    if options.include_edge_cases {
        prompt.push_str("Include edge cases that test boundary conditions and unusual scenarios.\n");
    }
    if options.include_performance_tests {
        prompt.push_str("Include performance test considerations.\n");
    }

    prompt.push_str(
        "\nProvide test cases in a strict JSON array format with each test case having these \
         properties:\n\
         - id: Unique test case identifier (string)\n\
         - description: Detailed test case description (string)\n\
         - precondition: Setup conditions before test (string)\n\
         - type: Test case type (\"positive\", \"negative\", \"edge_case\", or \"performance\")\n\
         - expectedResult: What should happen when the test is run (string)\n\
         - priority: Importance of the test (\"high\", \"medium\", or \"low\")\n\
         - requirement: ID of the requirement this test case covers (string)\n\n\
         Return ONLY a valid JSON array of test case objects.\n",
    );

    prompt
}

/// Why a model reply was rejected in favor of fallback generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplyRejection {
    #[error("no JSON array in reply")]
    NoArray,
    #[error("array did not parse: {0}")]
    Parse(String),
    #[error("record {index} is missing a usable '{field}'")]
    MissingField { index: usize, field: &'static str },
    #[error("record {index} references unknown requirement '{id}'")]
    UnknownRequirement { index: usize, id: String },
}

/// Raw record shape as the model is asked to emit it. Every field is
/// optional at parse time; normalization decides which absences are
/// recoverable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawModelCase {
    id: Option<String>,
    description: Option<String>,
    precondition: Option<String>,
    #[serde(rename = "type")]
    case_type: Option<TestCaseType>,
    expected_result: Option<String>,
    priority: Option<Priority>,
    requirement: Option<String>,
}

/// Turns a raw model reply into validated test cases.
///
/// Recoverable absences are defaulted: a missing id gets a random
/// `TC<n>`, a missing precondition the generic readiness sentence, and a
/// missing priority defaults to medium. Absent or empty description,
/// type, expectedResult, or requirement (or a requirement id not in the
/// current run) rejects the whole reply.
pub fn parse_model_reply(
    reply: &str,
    requirements: &[Requirement],
) -> Result<Vec<TestCase>, ReplyRejection> {
    let array = extract_json_array(reply).ok_or(ReplyRejection::NoArray)?;
    let repaired = sanitize(array);

    let raw_cases: Vec<RawModelCase> =
        serde_json::from_str(&repaired).map_err(|e| ReplyRejection::Parse(e.to_string()))?;

    let mut rng = rand::thread_rng();
    let mut cases = Vec::with_capacity(raw_cases.len());

    for (index, raw) in raw_cases.into_iter().enumerate() {
        let description = non_empty(raw.description)
            .ok_or(ReplyRejection::MissingField { index, field: "description" })?;
        let case_type = raw
            .case_type
            .ok_or(ReplyRejection::MissingField { index, field: "type" })?;
        let expected_result = non_empty(raw.expected_result)
            .ok_or(ReplyRejection::MissingField { index, field: "expectedResult" })?;
        let requirement = non_empty(raw.requirement)
            .ok_or(ReplyRejection::MissingField { index, field: "requirement" })?;

        if !requirements.iter().any(|r| r.id == requirement) {
            return Err(ReplyRejection::UnknownRequirement {
                index,
                id: requirement,
            });
        }

        cases.push(TestCase {
            id: non_empty(raw.id).unwrap_or_else(|| format!("TC{}", rng.gen_range(0..1000))),
            description,
            precondition: non_empty(raw.precondition)
                .unwrap_or_else(|| GENERIC_PRECONDITION.to_string()),
            case_type,
            expected_result,
            priority: raw.priority.unwrap_or(Priority::Medium),
            requirement,
        });
    }

    Ok(cases)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ModelError, ModelInfo};
    use async_trait::async_trait;

    struct FixedModel(Result<String, ModelError>);

    #[async_trait]
    impl GenerativeModel for FixedModel {
        async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
            self.0.clone()
        }

        fn model_info(&self) -> ModelInfo {
            ModelInfo::new("fixed", "fixed-1")
        }
    }

    fn reqs() -> Vec<Requirement> {
        vec![Requirement::numbered(1, "User can log in")]
    }

    fn all_off() -> GenerationOptions {
        GenerationOptions {
            include_negative_tests: false,
            include_edge_cases: false,
            include_performance_tests: false,
            ..GenerationOptions::default()
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Prompt construction
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn prompt_embeds_every_requirement() {
        let requirements = vec![
            Requirement::numbered(1, "Login works"),
            Requirement::numbered(2, "Logout works"),
        ];
        let prompt = build_prompt(&requirements, &GenerationOptions::default());

        assert!(prompt.contains("R1: Login works"));
        assert!(prompt.contains("R2: Logout works"));
        assert!(prompt.contains("Return ONLY a valid JSON array"));
    }

    #[test]
    fn prompt_lines_mirror_options_exactly() {
        let negative_line = "Include negative test cases";
        let edge_line = "Include edge cases";
        let perf_line = "Include performance test";

        let none = build_prompt(&reqs(), &all_off());
        assert!(!none.contains(negative_line));
        assert!(!none.contains(edge_line));
        assert!(!none.contains(perf_line));
        assert!(none.contains("positive test cases"));

        let all = build_prompt(
            &reqs(),
            &GenerationOptions {
                include_negative_tests: true,
                include_edge_cases: true,
                include_performance_tests: true,
                ..GenerationOptions::default()
            },
        );
        assert!(all.contains(negative_line));
        assert!(all.contains(edge_line));
        assert!(all.contains(perf_line));
    }

    // ───────────────────────────────────────────────────────────────
    // Reply parsing and normalization
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn valid_reply_parses_with_defaults_applied() {
        let reply = r#"Sure! Here are the cases:
        [
            {"description": "Log in with valid credentials",
             "type": "positive",
             "expectedResult": "User reaches the dashboard",
             "requirement": "R1"}
        ]"#;

        let cases = parse_model_reply(reply, &reqs()).unwrap();
        assert_eq!(cases.len(), 1);
        assert!(cases[0].id.starts_with("TC"));
        assert_eq!(cases[0].precondition, GENERIC_PRECONDITION);
        assert_eq!(cases[0].priority, Priority::Medium);
        assert_eq!(cases[0].requirement, "R1");
    }

    #[test]
    fn near_json_reply_is_repaired_before_parsing() {
        let reply = r#"[
            {id: "TC1", description: 'negative path', "type": "negative",
             "expectedResult": "Error shown", "requirement": "R1",},
        ]"#;

        let cases = parse_model_reply(reply, &reqs()).unwrap();
        assert_eq!(cases[0].id, "TC1");
        assert_eq!(cases[0].description, "negative path");
        assert_eq!(cases[0].case_type, TestCaseType::Negative);
    }

    #[test]
    fn reply_without_array_is_rejected() {
        let err = parse_model_reply("I cannot help with that.", &reqs()).unwrap_err();
        assert_eq!(err, ReplyRejection::NoArray);
    }

    #[test]
    fn missing_required_field_rejects_the_reply() {
        let reply = r#"[{"description": "d", "type": "positive", "requirement": "R1"}]"#;
        let err = parse_model_reply(reply, &reqs()).unwrap_err();
        assert_eq!(
            err,
            ReplyRejection::MissingField { index: 0, field: "expectedResult" }
        );
    }

    #[test]
    fn unknown_type_value_rejects_the_reply() {
        let reply = r#"[{"description": "d", "type": "smoke",
                         "expectedResult": "e", "requirement": "R1"}]"#;
        assert!(matches!(
            parse_model_reply(reply, &reqs()).unwrap_err(),
            ReplyRejection::Parse(_)
        ));
    }

    #[test]
    fn unknown_requirement_reference_rejects_the_reply() {
        let reply = r#"[{"description": "d", "type": "positive",
                         "expectedResult": "e", "requirement": "R99"}]"#;
        let err = parse_model_reply(reply, &reqs()).unwrap_err();
        assert_eq!(
            err,
            ReplyRejection::UnknownRequirement { index: 0, id: "R99".to_string() }
        );
    }

    // ───────────────────────────────────────────────────────────────
    // Generator state machine
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn unconfigured_generator_uses_fallback() {
        let generator = TestCaseGenerator::new(None);
        let options = GenerationOptions {
            include_edge_cases: true,
            include_negative_tests: true,
            include_performance_tests: false,
            ..GenerationOptions::default()
        };

        let cases = generator.generate(&reqs(), &options).await.unwrap();

        let ids: Vec<&str> = cases.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["TC1", "TC2", "TC3"]);
        let types: Vec<TestCaseType> = cases.iter().map(|c| c.case_type).collect();
        assert_eq!(
            types,
            vec![TestCaseType::Positive, TestCaseType::Negative, TestCaseType::EdgeCase]
        );
        assert!(cases.iter().all(|c| c.requirement == "R1"));
    }

    #[tokio::test]
    async fn parseable_reply_is_used_as_is() {
        let reply = r#"[{"id": "TC1", "description": "d", "precondition": "p",
                         "type": "positive", "expectedResult": "e",
                         "priority": "high", "requirement": "R1"}]"#;
        let generator = TestCaseGenerator::new(Some(Arc::new(FixedModel(Ok(reply.into())))));

        let cases = generator.generate(&reqs(), &all_off()).await.unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].priority, Priority::High);
    }

    #[tokio::test]
    async fn malformed_reply_falls_back_instead_of_failing() {
        let generator =
            TestCaseGenerator::new(Some(Arc::new(FixedModel(Ok("no json here".into())))));

        let cases = generator.generate(&reqs(), &all_off()).await.unwrap();
        // Fallback output for one requirement with all extras disabled.
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].id, "TC1");
        assert_eq!(cases[0].case_type, TestCaseType::Positive);
    }

    #[tokio::test]
    async fn model_call_failure_propagates() {
        let generator = TestCaseGenerator::new(Some(Arc::new(FixedModel(Err(
            ModelError::unavailable("503"),
        )))));

        let err = generator.generate(&reqs(), &all_off()).await.unwrap_err();
        assert!(matches!(err, PipelineError::GenerationFailed { .. }));
    }
}
