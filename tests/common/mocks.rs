use async_trait::async_trait;
use tourist_guide::{
    Error, Result,
    llm::{LlmClient, ModelInfo},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
#[derive(Debug, Default)]
pub struct MockLlmClient {
    pub reply: Option<String>,
    pub models: Vec<ModelInfo>,
    pub error: Option<String>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = Some(reply.into());
        self
    }

    pub fn with_models(mut self, models: Vec<ModelInfo>) -> Self {
        self.models = models;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn check_error(&self) -> Result<()> {
        match self.error {
            Some(ref error) => Err(Error::llm(error.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.check_error()?;
        Ok(self.reply.clone())
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        self.check_error()?;
        Ok(self.models.clone())
    }

    async fn ping(&self) -> Result<()> {
        self.check_error()
    }
}
