//! Domain layer containing the pure pipeline logic.
//!
//! # Module Organization
//!
//! - `requirement` - Requirement value type and line-based extraction
//! - `test_case` - Test case records, enums, and generation options
//! - `fallback` - Deterministic non-AI test case synthesis
//! - `sanitizer` - Heuristic repair of near-JSON model output
//! - `errors` - Fatal pipeline error taxonomy
//!
//! Nothing in this module performs I/O.

mod errors;
mod fallback;
mod requirement;
mod sanitizer;
mod test_case;

pub use errors::PipelineError;
pub use fallback::{generate_fallback_cases, GENERIC_PRECONDITION};
pub use requirement::{extract_requirements, Requirement};
pub use sanitizer::{extract_json_array, sanitize};
pub use test_case::{ExportFormat, GenerationOptions, Priority, TestCase, TestCaseType};
