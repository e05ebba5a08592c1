use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use pq_core::{Analysis, AnalysisSource, Article, Framing, PoliticalLeaning, Result, Tone};
use rand::seq::SliceRandom;
use rand::Rng;

/// Replaces failures of the wrapped model with mock outputs.
///
/// Single-article failures get a [`mock_analysis`], comparison failures the
/// fixed [`mock_framing`]. The error is logged and never reaches the caller.
pub struct FallbackAnalysis {
    inner: Arc<dyn AnalysisSource>,
}

impl fmt::Debug for FallbackAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackAnalysis")
            .field("inner", &self.inner.name())
            .finish()
    }
}

impl FallbackAnalysis {
    pub fn new(inner: Arc<dyn AnalysisSource>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl AnalysisSource for FallbackAnalysis {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn analyze_one(&self, article: &Article) -> Result<Analysis> {
        match self.inner.analyze_one(article).await {
            Ok(analysis) => Ok(analysis),
            Err(e) => {
                tracing::warn!("⚠️ {} could not analyze '{}', using mock analysis: {}", self.inner.name(), article.title, e);
                Ok(mock_analysis())
            }
        }
    }

    async fn compare_two(&self, first: &Article, second: &Article) -> Result<Framing> {
        match self.inner.compare_two(first, second).await {
            Ok(framing) => Ok(framing),
            Err(e) => {
                tracing::warn!("⚠️ {} could not compare articles, using mock comparison: {}", self.inner.name(), e);
                Ok(mock_framing())
            }
        }
    }
}

/// Answers every request with mock outputs, for running without a model.
#[derive(Debug, Default)]
pub struct MockModel;

#[async_trait]
impl AnalysisSource for MockModel {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn analyze_one(&self, _article: &Article) -> Result<Analysis> {
        Ok(mock_analysis())
    }

    async fn compare_two(&self, _first: &Article, _second: &Article) -> Result<Framing> {
        Ok(mock_framing())
    }
}

pub fn mock_analysis() -> Analysis {
    let mut rng = rand::thread_rng();
    Analysis {
        political_leaning: *PoliticalLeaning::ALL
            .choose(&mut rng)
            .unwrap_or(&PoliticalLeaning::Centrist),
        tone: *Tone::ALL.choose(&mut rng).unwrap_or(&Tone::Neutral),
        summary: vec![
            "Key policy implications discussed in detail".to_string(),
            "Multiple stakeholder perspectives presented".to_string(),
            "Economic and social factors analyzed".to_string(),
        ],
        opposing_framing: "Critics argue this approach could lead to unintended economic consequences.".to_string(),
        sentiment: rng.gen_range(-1.0..1.0),
        factual_score: rng.gen_range(0.6..1.0),
        bias_score: rng.gen_range(-1.0..1.0),
    }
}

pub fn mock_framing() -> Framing {
    Framing {
        framing_differences: vec![
            "Article 1 emphasizes economic benefits while Article 2 focuses on potential risks".to_string(),
            "Different expert sources cited to support opposing viewpoints".to_string(),
        ],
        key_fact_emphasis: vec![
            "Article 1 highlights statistical improvements in key metrics".to_string(),
            "Article 2 emphasizes historical precedents and cautionary examples".to_string(),
        ],
        language_contrasts: vec![
            "Article 1 uses optimistic language (\"breakthrough\", \"progress\")".to_string(),
            "Article 2 employs more cautious terminology (\"concerns\", \"challenges\")".to_string(),
        ],
        verdict: "These articles demonstrate how the same policy can be framed differently depending on ideological perspective and source priorities.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::article;
    use pq_core::Error;

    struct Broken;

    #[async_trait]
    impl AnalysisSource for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        async fn analyze_one(&self, _article: &Article) -> Result<Analysis> {
            Err(Error::Decode("not JSON".to_string()))
        }

        async fn compare_two(&self, _first: &Article, _second: &Article) -> Result<Framing> {
            Err(Error::Inference("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_mock_analysis_is_valid() {
        for _ in 0..50 {
            let analysis = mock_analysis();
            assert!(analysis.validate().is_ok());
            assert!(analysis.factual_score >= 0.6);
        }
    }

    #[tokio::test]
    async fn test_fallback_replaces_failures() {
        let model = FallbackAnalysis::new(Arc::new(Broken));
        assert_eq!(model.name(), "broken");

        let a = article("a", "First", "CNN");
        let b = article("b", "Second", "Fox News");

        let analysis = model.analyze_one(&a).await.unwrap();
        assert_eq!(analysis.summary.len(), 3);

        let framing = model.compare_two(&a, &b).await.unwrap();
        assert_eq!(framing, mock_framing());
    }

    #[tokio::test]
    async fn test_fallback_passes_through_success() {
        let model = FallbackAnalysis::new(Arc::new(crate::models::dummy::DummyModel::new()));
        let a = article("a", "First", "CNN");
        let analysis = model.analyze_one(&a).await.unwrap();
        assert_eq!(analysis.political_leaning, PoliticalLeaning::Centrist);
        assert_eq!(analysis.factual_score, 0.5);
    }
}
