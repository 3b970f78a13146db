//! Deterministic fallback test case generation.
//!
//! This is the availability guarantee of the pipeline: when the AI model is
//! unconfigured or its reply cannot be parsed, this pure function produces a
//! structurally valid result for the same inputs. Output ordering is a
//! contract (requirement-major, then positive, negative, edge_case,
//! performance) and identical inputs yield byte-identical output.

use super::requirement::Requirement;
use super::test_case::{GenerationOptions, Priority, TestCase, TestCaseType};

/// Precondition used for fallback positive cases and for AI records that
/// arrived without one.
pub const GENERIC_PRECONDITION: &str = "System is properly configured";

/// Generates one positive case per requirement, plus one negative, edge,
/// and performance case when the corresponding option is enabled.
///
/// Test case ids are assigned from a single monotonically increasing
/// counter (`TC1`, `TC2`, …) across the entire output.
pub fn generate_fallback_cases(
    requirements: &[Requirement],
    options: &GenerationOptions,
) -> Vec<TestCase> {
    let mut cases = Vec::new();
    let mut counter = 0usize;
    let mut next_id = move || {
        counter += 1;
        format!("TC{}", counter)
    };

    for requirement in requirements {
        let lowered = requirement.text.to_lowercase();

        cases.push(TestCase {
            id: next_id(),
            description: format!("Verify that {}", lowered),
            precondition: "System is properly configured and accessible".to_string(),
            case_type: TestCaseType::Positive,
            expected_result: format!(
                "The system successfully implements the requirement: {}",
                requirement.text
            ),
            priority: Priority::High,
            requirement: requirement.id.clone(),
        });

        if options.include_negative_tests {
            cases.push(TestCase {
                id: next_id(),
                description: format!(
                    "Verify system behavior when invalid input is provided for: {}",
                    lowered
                ),
                precondition: "System is in a state ready to accept inputs".to_string(),
                case_type: TestCaseType::Negative,
                expected_result: "The system should handle the error gracefully and display an \
                                  appropriate error message"
                    .to_string(),
                priority: Priority::Medium,
                requirement: requirement.id.clone(),
            });
        }

        if options.include_edge_cases {
            cases.push(TestCase {
                id: next_id(),
                description: format!("Test boundary conditions for: {}", lowered),
                precondition: "System is at the limits of its specified operational parameters"
                    .to_string(),
                case_type: TestCaseType::EdgeCase,
                expected_result: "The system should handle edge cases properly without crashing"
                    .to_string(),
                priority: Priority::Medium,
                requirement: requirement.id.clone(),
            });
        }

        if options.include_performance_tests {
            cases.push(TestCase {
                id: next_id(),
                description: format!("Measure performance metrics when: {}", lowered),
                precondition: "System is under expected load conditions".to_string(),
                case_type: TestCaseType::Performance,
                expected_result: "The operation should complete within acceptable time limits"
                    .to_string(),
                priority: Priority::Low,
                requirement: requirement.id.clone(),
            });
        }
    }

    cases
}
