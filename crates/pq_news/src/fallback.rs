use async_trait::async_trait;
use chrono::{Duration, Utc};
use pq_core::{Article, FetchRequest, NewsSource, Result, Source};

/// Serves [`sample_articles`] whenever the wrapped source fails.
#[derive(Debug)]
pub struct FallbackNews<S> {
    inner: S,
}

impl<S: NewsSource> FallbackNews<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[async_trait]
impl<S: NewsSource> NewsSource for FallbackNews<S> {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Article>> {
        match self.inner.fetch(request).await {
            Ok(articles) => Ok(articles),
            Err(e) => {
                tracing::warn!("⚠️ News fetch failed, serving sample articles: {}", e);
                Ok(sample_articles())
            }
        }
    }
}

/// Offline source that always answers with [`sample_articles`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleNews;

#[async_trait]
impl NewsSource for SampleNews {
    async fn fetch(&self, _request: &FetchRequest) -> Result<Vec<Article>> {
        Ok(sample_articles())
    }
}

fn politics_source(id: &str, name: &str) -> Source {
    Source {
        id: id.to_string(),
        name: name.to_string(),
        category: "politics".to_string(),
        language: "en".to_string(),
        country: "us".to_string(),
    }
}

/// The fixed three-article set shown when the news provider is unreachable.
pub fn sample_articles() -> Vec<Article> {
    let now = Utc::now();
    vec![
        Article {
            id: "mock-1".to_string(),
            title: "Economic Policy Debate Intensifies in Congress".to_string(),
            description: "Lawmakers debate new economic measures amid rising inflation concerns.".to_string(),
            content: "Congressional leaders are engaged in heated discussions about economic policy...".to_string(),
            source: politics_source("reuters", "Reuters"),
            published_at: now,
            url: "https://example.com/article-1".to_string(),
            url_to_image: Some("https://images.pexels.com/photos/6077326/pexels-photo-6077326.jpeg?auto=compress&cs=tinysrgb&w=800".to_string()),
            author: Some("Political Reporter".to_string()),
            analysis: None,
        },
        Article {
            id: "mock-2".to_string(),
            title: "Climate Change Legislation Faces Senate Vote".to_string(),
            description: "Environmental groups push for swift action on climate bill.".to_string(),
            content: "The Senate is preparing for a crucial vote on climate legislation...".to_string(),
            source: politics_source("cnn", "CNN"),
            published_at: now - Duration::hours(1),
            url: "https://example.com/article-2".to_string(),
            url_to_image: Some("https://images.pexels.com/photos/9324659/pexels-photo-9324659.jpeg?auto=compress&cs=tinysrgb&w=800".to_string()),
            author: Some("Environmental Correspondent".to_string()),
            analysis: None,
        },
        Article {
            id: "mock-3".to_string(),
            title: "Healthcare Reform Proposals Gain Momentum".to_string(),
            description: "Bipartisan support emerges for healthcare system changes.".to_string(),
            content: "Healthcare reform is gaining traction in both parties...".to_string(),
            source: politics_source("bbc", "BBC News"),
            published_at: now - Duration::hours(2),
            url: "https://example.com/article-3".to_string(),
            url_to_image: Some("https://images.pexels.com/photos/48604/pexels-photo-48604.jpeg?auto=compress&cs=tinysrgb&w=800".to_string()),
            author: Some("Health Policy Reporter".to_string()),
            analysis: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pq_core::Error;

    struct Unreachable;

    #[async_trait]
    impl NewsSource for Unreachable {
        async fn fetch(&self, _request: &FetchRequest) -> Result<Vec<Article>> {
            Err(Error::News("connection refused".to_string()))
        }
    }

    struct Fixed(Vec<Article>);

    #[async_trait]
    impl NewsSource for Fixed {
        async fn fetch(&self, _request: &FetchRequest) -> Result<Vec<Article>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_sample_articles() {
        let articles = sample_articles();
        let ids: Vec<_> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["mock-1", "mock-2", "mock-3"]);
        assert!(articles[0].published_at > articles[1].published_at);
        assert!(articles[1].published_at > articles[2].published_at);
        assert!(articles.iter().all(|a| a.analysis.is_none()));
    }

    #[tokio::test]
    async fn test_fallback_on_failure() {
        let news = FallbackNews::new(Unreachable);
        let articles = news.fetch(&FetchRequest::topic("Climate")).await.unwrap();
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[2].source.name, "BBC News");
    }

    #[tokio::test]
    async fn test_fallback_passes_through_success() {
        let mut article = sample_articles().remove(0);
        article.id = "live-1".to_string();
        let news = FallbackNews::new(Fixed(vec![article]));

        let articles = news.fetch(&FetchRequest::default()).await.unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, "live-1");

        let empty = FallbackNews::new(Fixed(vec![]));
        assert!(empty.fetch(&FetchRequest::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sample_news_ignores_request() {
        let articles = SampleNews.fetch(&FetchRequest::topic("Economy")).await.unwrap();
        assert_eq!(articles[0].id, "mock-1");
    }
}
