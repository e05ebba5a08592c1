use std::fmt;

pub mod decode;
pub mod fallback;
pub mod models;
pub mod prompts;

#[derive(Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub base_url: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .finish()
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::fallback::{FallbackAnalysis, MockModel};
    pub use super::models::create_model;
    pub use pq_core::{AnalysisSource, Analysis, Article, Framing, Result, Error};
}

pub use fallback::{FallbackAnalysis, MockModel};
pub use models::create_model;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::Utc;
    use pq_core::{Article, Source};

    pub fn article(id: &str, title: &str, source: &str) -> Article {
        Article {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            content: String::new(),
            source: Source {
                id: source.to_lowercase(),
                name: source.to_string(),
                category: "politics".to_string(),
                language: "en".to_string(),
                country: "us".to_string(),
            },
            published_at: Utc::now(),
            url: format!("https://example.com/{}", id),
            url_to_image: None,
            author: None,
            analysis: None,
        }
    }
}
