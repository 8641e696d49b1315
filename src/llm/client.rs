use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use std::collections::HashSet;
use tracing::debug;

const API_KEY_HEADER: &str = "x-goog-api-key";
const MODELS_PAGE_SIZE: u32 = 1000;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends a single prompt. `Ok(None)` means the provider answered without text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>>;

    async fn list_models(&self) -> Result<Vec<ModelInfo>>;

    /// Cheapest call that proves the provider is reachable with our key.
    async fn ping(&self) -> Result<()>;
}

pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            model: normalize_model_name(&config.model),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(API_KEY_HEADER, &self.api_key)
    }

    async fn fetch_models_page(
        &self,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<ListModelsResponse> {
        let url = format!("{}/models", self.base_url);
        let mut query = vec![("pageSize", page_size.to_string())];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }

        let response = self
            .authorized(self.client.get(&url))
            .query(&query)
            .send()
            .await?;

        Ok(check_status(response).await?.json().await?)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending generateContent request"
        );

        let url = format!("{}/{}:generateContent", self.base_url, self.model);
        let response = self
            .authorized(self.client.post(&url))
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let body: GenerateContentResponse = check_status(response).await?.json().await?;

        if body.candidates.is_empty() {
            if let Some(reason) = body.block_reason() {
                return Err(Error::llm(format!("Prompt was blocked: {}", reason)));
            }
        }

        debug!(
            "Received generateContent response with {} candidates",
            body.candidates.len()
        );

        Ok(body.text())
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;
        let mut seen_tokens = HashSet::new();

        loop {
            let page = self
                .fetch_models_page(MODELS_PAGE_SIZE, page_token.as_deref())
                .await?;
            models.extend(page.models.into_iter().map(ModelInfo::from));

            match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) => {
                    if !seen_tokens.insert(token.clone()) {
                        return Err(Error::llm(format!(
                            "Gemini returned a repeated page token: {}",
                            token
                        )));
                    }
                    page_token = Some(token);
                }
                None => break,
            }
        }

        debug!("Listed {} models", models.len());
        Ok(models)
    }

    async fn ping(&self) -> Result<()> {
        self.fetch_models_page(1, None).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::llm(format!("Gemini API error {}: {}", status, body)))
}

/// Gemini addresses models as `models/<id>`; accept bare ids too.
pub fn normalize_model_name(model: &str) -> String {
    let model = model.trim();
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{}", model)
    }
}
