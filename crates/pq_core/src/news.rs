use async_trait::async_trait;
use crate::types::Article;
use crate::Result;

/// What to ask the news provider for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchRequest {
    /// Free-text topic or query. `None` means the default politics headlines.
    pub topic: Option<String>,
}

impl FetchRequest {
    pub fn topic(topic: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
        }
    }
}

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch articles, ids unique within the returned list
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Article>>;
}
