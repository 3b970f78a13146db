//! In-memory project store.
//!
//! Keyed storage with counter-assigned ids. Contents live for the
//! process lifetime only.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::ports::{NewProject, ProjectStore, StoredProject};

/// Map-backed implementation of the project store port.
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    projects: BTreeMap<u64, StoredProject>,
    next_id: u64,
}

impl InMemoryProjectStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn create(&self, project: NewProject) -> StoredProject {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let stored = StoredProject {
            id: inner.next_id,
            title: project.title,
            created_at: Utc::now(),
            requirements: project.requirements,
            test_cases: project.test_cases,
            options: project.options,
        };
        inner.projects.insert(stored.id, stored.clone());
        stored
    }

    async fn get(&self, id: u64) -> Option<StoredProject> {
        self.inner.lock().await.projects.get(&id).cloned()
    }

    async fn list(&self) -> Vec<StoredProject> {
        self.inner.lock().await.projects.values().cloned().collect()
    }

    async fn delete(&self, id: u64) -> bool {
        self.inner.lock().await.projects.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GenerationOptions;

    fn new_project(title: &str) -> NewProject {
        NewProject {
            title: title.to_string(),
            requirements: vec![],
            test_cases: vec![],
            options: GenerationOptions::default(),
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_from_one() {
        let store = InMemoryProjectStore::new();
        let first = store.create(new_project("first")).await;
        let second = store.create(new_project("second")).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn get_returns_the_stored_project() {
        let store = InMemoryProjectStore::new();
        let created = store.create(new_project("mine")).await;

        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert!(store.get(999).await.is_none());
    }

    #[tokio::test]
    async fn list_returns_projects_in_insertion_order() {
        let store = InMemoryProjectStore::new();
        store.create(new_project("a")).await;
        store.create(new_project("b")).await;

        let titles: Vec<String> = store.list().await.into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["a".to_string(), "b".to_string()]);
    }

    #[tokio::test]
    async fn delete_reports_whether_the_id_existed() {
        let store = InMemoryProjectStore::new();
        let created = store.create(new_project("gone")).await;

        assert!(store.delete(created.id).await);
        assert!(!store.delete(created.id).await);
        assert!(store.get(created.id).await.is_none());
    }
}
