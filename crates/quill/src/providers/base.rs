use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: Option<i32>,
    pub output_tokens: Option<i32>,
    pub total_tokens: Option<i32>,
}

impl Usage {
    pub fn new(
        input_tokens: Option<i32>,
        output_tokens: Option<i32>,
        total_tokens: Option<i32>,
    ) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens,
        }
    }
}

/// Base trait for text generation backends
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send one prompt and return the full generated text
    async fn complete(&self, prompt: &str) -> ProviderResult<(String, Usage)>;
}
