use async_trait::async_trait;
use crate::types::{Analysis, Article, Framing};
use crate::Result;

#[async_trait]
pub trait AnalysisSource: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Judge the political leaning and tone of a single article
    async fn analyze_one(&self, article: &Article) -> Result<Analysis>;

    /// Describe how `first` and `second` frame their story differently.
    ///
    /// Implementations must keep the argument order: everything said about
    /// "Article 1" refers to `first`.
    async fn compare_two(&self, first: &Article, second: &Article) -> Result<Framing>;
}
