use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use pq_core::{Analysis, AnalysisSource, Article, Error, Framing, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::decode::{decode_analysis, decode_framing};
use crate::prompts::{analysis_prompt, comparison_prompt};
use crate::Config;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Result<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| Error::Decode("response has no candidate text".to_string()))
    }
}

pub struct GeminiModel {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
    model_name: String,
}

impl fmt::Debug for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl GeminiModel {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Inference("Gemini API key is required".to_string()))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;

        let model_name = match config.model_name.as_deref() {
            None | Some("gemini") => DEFAULT_MODEL.to_string(),
            Some(name) => name.to_string(),
        };

        Ok(Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_name,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model_name)
    }

    async fn generate(&self, prompt: String) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", &self.api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!("Gemini request failed ({}): {}", status, body.trim())));
        }

        let text = response.json::<GenerateResponse>().await?.into_text()?;
        tracing::debug!("Gemini answered with {} characters", text.len());
        Ok(text)
    }
}

#[async_trait]
impl AnalysisSource for GeminiModel {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn analyze_one(&self, article: &Article) -> Result<Analysis> {
        tracing::info!("🤖 Analyzing article: {}", article.title);
        let text = self.generate(analysis_prompt(article)).await?;
        decode_analysis(&text)
    }

    async fn compare_two(&self, first: &Article, second: &Article) -> Result<Framing> {
        tracing::info!("🤖 Comparing '{}' with '{}'", first.title, second.title);
        let text = self.generate(comparison_prompt(first, second)).await?;
        decode_framing(&text)
    }
}
