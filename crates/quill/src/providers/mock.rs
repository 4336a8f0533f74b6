use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;

use crate::errors::{ProviderError, ProviderResult};
use crate::providers::base::{Provider, Usage};

/// A mock provider that returns pre-configured responses for testing
pub struct MockProvider {
    responses: Arc<Mutex<Vec<ProviderResult<String>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new mock provider with a sequence of responses
    pub fn new(responses: Vec<ProviderResult<String>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle onto the prompts this provider has been asked to complete
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, prompt: &str) -> ProviderResult<(String, Usage)> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(ProviderError::MalformedResponse(
                "no more pre-configured responses".to_string(),
            ))
        } else {
            responses.remove(0).map(|text| (text, Usage::default()))
        }
    }
}
