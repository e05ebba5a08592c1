use std::fmt;
use pq_core::{Analysis, AnalysisSource, Article, Framing, PoliticalLeaning, Result, Tone};

/// Offline model that answers from the article text alone.
pub struct DummyModel;

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

fn sentences(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c| c == '.' || c == '!' || c == '?')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("{}.", s))
}

#[async_trait::async_trait]
impl AnalysisSource for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn analyze_one(&self, article: &Article) -> Result<Analysis> {
        let text = format!("{} {}", article.description, article.content);
        let mut summary: Vec<String> = sentences(&text).take(Analysis::SUMMARY_LEN).collect();
        while summary.len() < Analysis::SUMMARY_LEN {
            summary.push(article.title.clone());
        }

        Ok(Analysis {
            political_leaning: PoliticalLeaning::Centrist,
            tone: Tone::Neutral,
            summary,
            opposing_framing: format!("Others might frame \"{}\" differently.", article.title),
            sentiment: 0.0,
            factual_score: 0.5,
            bias_score: 0.0,
        })
    }

    async fn compare_two(&self, first: &Article, second: &Article) -> Result<Framing> {
        Ok(Framing {
            framing_differences: vec![format!(
                "Article 1 comes from {} while Article 2 comes from {}",
                first.source.name, second.source.name
            )],
            key_fact_emphasis: vec![
                format!("Article 1 leads with \"{}\"", first.title),
                format!("Article 2 leads with \"{}\"", second.title),
            ],
            language_contrasts: Vec::new(),
            verdict: "No generative model was consulted; the comparison only reflects headlines and outlets.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::article;

    #[tokio::test]
    async fn test_dummy_model() {
        let model = DummyModel::new();

        let mut a = article("a", "Test Article", "test");
        a.description = "This is a test article. It has multiple sentences.".to_string();
        a.content = "This is the third sentence! And a fourth?".to_string();

        let analysis = model.analyze_one(&a).await.unwrap();
        assert!(analysis.validate().is_ok());
        assert_eq!(
            analysis.summary,
            vec![
                "This is a test article.".to_string(),
                "It has multiple sentences.".to_string(),
                "This is the third sentence.".to_string(),
            ]
        );

        let bare = article("b", "Headline only", "test");
        let analysis = model.analyze_one(&bare).await.unwrap();
        assert_eq!(analysis.summary, vec!["Headline only".to_string(); 3]);
    }

    #[tokio::test]
    async fn test_dummy_comparison_keeps_order() {
        let model = DummyModel::new();
        let first = article("a", "First", "CNN");
        let second = article("b", "Second", "Fox News");

        let framing = model.compare_two(&first, &second).await.unwrap();
        assert!(framing.framing_differences[0].starts_with("Article 1 comes from CNN"));
        assert_eq!(framing.key_fact_emphasis[1], "Article 2 leads with \"Second\"");
        assert!(framing.validate().is_ok());
    }
}
