//! Project Store Port - keyed storage for generation results.
//!
//! Storage here is a convenience, not a durability promise: the reference
//! adapter is an in-memory map that forgets everything on restart.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{GenerationOptions, Requirement, TestCase};

/// A generation result the user chose to keep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProject {
    /// Store-assigned identifier.
    pub id: u64,
    /// User-supplied project title.
    pub title: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Extracted requirements at save time.
    pub requirements: Vec<Requirement>,
    /// Generated test cases at save time.
    pub test_cases: Vec<TestCase>,
    /// Options used for the generation run.
    pub options: GenerationOptions,
}

/// Payload for creating a stored project (id and timestamp are assigned
/// by the store).
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub requirements: Vec<Requirement>,
    pub test_cases: Vec<TestCase>,
    pub options: GenerationOptions,
}

/// Port for the keyed project store.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Persists a new project and returns it with its assigned id.
    async fn create(&self, project: NewProject) -> StoredProject;

    /// Looks up a project by id.
    async fn get(&self, id: u64) -> Option<StoredProject>;

    /// Lists all projects in insertion order.
    async fn list(&self) -> Vec<StoredProject>;

    /// Deletes a project; returns false when the id was unknown.
    async fn delete(&self, id: u64) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_store_is_object_safe() {
        fn check<T: ProjectStore + ?Sized>() {}
        check::<dyn ProjectStore>();
    }

    #[test]
    fn stored_project_serializes_camel_case() {
        let project = StoredProject {
            id: 1,
            title: "t".to_string(),
            created_at: Utc::now(),
            requirements: vec![],
            test_cases: vec![],
            options: GenerationOptions::default(),
        };
        let json = serde_json::to_value(&project).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("testCases").is_some());
    }
}
