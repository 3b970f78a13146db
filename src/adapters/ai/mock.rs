//! Mock generative model for testing.
//!
//! Configurable to return queued replies or errors without calling a real
//! API, with call capture for verification.
//!
//! # Example
//!
//! ```ignore
//! let model = MockModel::new().with_reply("[]");
//! let reply = model.generate("prompt").await?;
//! assert_eq!(reply, "[]");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{GenerativeModel, ModelError, ModelInfo};

/// Mock implementation of the generative model port.
#[derive(Debug, Clone, Default)]
pub struct MockModel {
    /// Queued replies, consumed in order.
    replies: Arc<Mutex<VecDeque<Result<String, ModelError>>>>,
    /// Captured prompts for verification.
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockModel {
    /// Creates a mock with an empty reply queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(reply.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ModelError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Number of calls made.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ModelError::unavailable("mock reply queue exhausted")))
    }

    fn model_info(&self) -> ModelInfo {
        ModelInfo::new("mock", "mock-model-1")
    }
}
