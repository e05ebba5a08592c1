use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pq_core::{Article, Error, FetchRequest, NewsSource, Result, Source};
use reqwest::Client;
use serde::Deserialize;
use url::Url;
use uuid::Uuid;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// Title NewsAPI puts on articles that were taken down upstream.
const REMOVED_TITLE: &str = "[Removed]";

#[derive(Clone)]
pub struct NewsConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub country: String,
    pub category: String,
    pub page_size: u32,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            country: "us".to_string(),
            category: "politics".to_string(),
            page_size: 20,
        }
    }
}

impl fmt::Debug for NewsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsConfig")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("country", &self.country)
            .field("category", &self.category)
            .field("page_size", &self.page_size)
            .finish()
    }
}

pub struct NewsApiClient {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
    country: String,
    category: String,
    page_size: u32,
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl NewsApiClient {
    pub fn new(config: NewsConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::Config("NewsAPI key is required".to_string()))?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            client: Arc::new(Client::new()),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            country: config.country,
            category: config.category,
            page_size: config.page_size,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Top political headlines, optionally narrowed to a topic.
    pub async fn top_headlines(&self, topic: Option<&str>) -> Result<Vec<Article>> {
        let params = self.headline_params(topic);
        self.get("top-headlines", &params).await
    }

    /// Full-text search over everything the provider indexes, newest first.
    pub async fn search(&self, query: &str, from: Option<&str>, to: Option<&str>) -> Result<Vec<Article>> {
        let params = self.search_params(query, from, to);
        self.get("everything", &params).await
    }

    fn headline_params(&self, topic: Option<&str>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("apiKey", self.api_key.clone()),
            ("country", self.country.clone()),
            ("category", self.category.clone()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(topic) = topic.map(str::trim).filter(|t| !t.is_empty()) {
            params.push(("q", topic.to_string()));
        }
        params
    }

    fn search_params(&self, query: &str, from: Option<&str>, to: Option<&str>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("apiKey", self.api_key.clone()),
            ("q", query.to_string()),
            ("sortBy", "publishedAt".to_string()),
            ("language", "en".to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(from) = from {
            params.push(("from", from.to_string()));
        }
        if let Some(to) = to {
            params.push(("to", to.to_string()));
        }
        params
    }

    async fn get(&self, endpoint: &str, params: &[(&'static str, String)]) -> Result<Vec<Article>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!("Requesting {}", url);

        let response = self.client.get(&url).query(params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<NewsResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| status.to_string());
            return Err(Error::News(format!("{} request failed ({}): {}", endpoint, status, message)));
        }

        parse_articles(&body)
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Article>> {
        let articles = self
            .top_headlines(request.topic.as_deref())
            .await?;
        tracing::info!("📰 Fetched {} articles", articles.len());
        Ok(articles)
    }
}

#[derive(Deserialize)]
struct NewsResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<WireArticle>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireArticle {
    source: WireSource,
    author: Option<String>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    url_to_image: Option<String>,
    published_at: Option<String>,
    content: Option<String>,
}

#[derive(Deserialize)]
struct WireSource {
    id: Option<String>,
    name: Option<String>,
}

impl WireArticle {
    fn into_article(self) -> Option<Article> {
        let title = self.title.filter(|t| !t.is_empty() && t != REMOVED_TITLE)?;
        let url = self.url.filter(|u| !u.is_empty())?;
        let published_at = match self.published_at.as_deref().map(DateTime::parse_from_rfc3339) {
            Some(Ok(ts)) => ts.with_timezone(&Utc),
            _ => {
                tracing::debug!("Skipping article without a valid timestamp: {}", title);
                return None;
            }
        };

        let source_id = self.source.id.unwrap_or_else(|| "unknown".to_string());
        Some(Article {
            id: format!("{}-{}", source_id, Uuid::new_v4()),
            title,
            description: self.description.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            source: Source {
                id: source_id,
                name: self.source.name.unwrap_or_else(|| "Unknown Source".to_string()),
                category: "politics".to_string(),
                language: "en".to_string(),
                country: "us".to_string(),
            },
            published_at,
            url,
            url_to_image: self.url_to_image,
            author: self.author,
            analysis: None,
        })
    }
}

pub(crate) fn parse_articles(body: &str) -> Result<Vec<Article>> {
    let response: NewsResponse = serde_json::from_str(body)?;
    if response.status != "ok" {
        return Err(Error::News(
            response
                .message
                .unwrap_or_else(|| format!("unexpected status '{}'", response.status)),
        ));
    }
    Ok(response
        .articles
        .into_iter()
        .filter_map(WireArticle::into_article)
        .collect())
}
