use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub source: Source,
    pub published_at: DateTime<Utc>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_to_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
}

impl Article {
    /// Returns a copy of this article carrying `analysis`.
    pub fn with_analysis(&self, analysis: Analysis) -> Self {
        Self {
            analysis: Some(analysis),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub name: String,
    pub category: String,
    pub language: String,
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoliticalLeaning {
    Liberal,
    Conservative,
    Centrist,
}

impl PoliticalLeaning {
    pub const ALL: [PoliticalLeaning; 3] = [Self::Liberal, Self::Conservative, Self::Centrist];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Liberal => "liberal",
            Self::Conservative => "conservative",
            Self::Centrist => "centrist",
        }
    }
}

impl fmt::Display for PoliticalLeaning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Neutral,
    Biased,
    EmotionallyCharged,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Self::Neutral, Self::Biased, Self::EmotionallyCharged];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Biased => "biased",
            Self::EmotionallyCharged => "emotionally-charged",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bias and tone judgment for a single article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub political_leaning: PoliticalLeaning,
    pub tone: Tone,
    pub summary: Vec<String>,
    pub opposing_framing: String,
    /// -1 (very negative) to 1 (very positive)
    pub sentiment: f64,
    /// 0 (opinion-heavy) to 1 (fact-based)
    pub factual_score: f64,
    /// -1 (liberal bias) to 1 (conservative bias)
    pub bias_score: f64,
}

impl Analysis {
    pub const SUMMARY_LEN: usize = 3;

    /// Checks the invariants an analysis must hold before it can be attached
    /// to an article.
    pub fn validate(&self) -> Result<()> {
        if self.summary.len() != Self::SUMMARY_LEN {
            return Err(Error::Decode(format!(
                "summary must have {} entries, got {}",
                Self::SUMMARY_LEN,
                self.summary.len()
            )));
        }
        if self.summary.iter().any(|s| s.trim().is_empty()) {
            return Err(Error::Decode("summary entries must not be empty".to_string()));
        }
        if self.opposing_framing.trim().is_empty() {
            return Err(Error::Decode("opposingFraming must not be empty".to_string()));
        }
        check_range("sentiment", self.sentiment, -1.0, 1.0)?;
        check_range("factualScore", self.factual_score, 0.0, 1.0)?;
        check_range("biasScore", self.bias_score, -1.0, 1.0)?;
        Ok(())
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::Decode(format!(
            "{} must be within [{}, {}], got {}",
            field, min, max, value
        )))
    }
}

/// A point on the bias map, derived from one article at fetch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationPoint {
    pub id: String,
    pub title: String,
    /// Ideological position, -1 (liberal) to 1 (conservative)
    pub x: f64,
    /// 0 (factual) to 1 (sensational)
    pub y: f64,
    pub source: String,
    pub color: String,
    pub analysis: Analysis,
}

/// How two articles frame the same story differently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Framing {
    pub framing_differences: Vec<String>,
    pub key_fact_emphasis: Vec<String>,
    pub language_contrasts: Vec<String>,
    pub verdict: String,
}

impl Framing {
    pub fn validate(&self) -> Result<()> {
        if self.verdict.trim().is_empty() {
            return Err(Error::Decode("verdict must not be empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub article1: Article,
    pub article2: Article,
    #[serde(flatten)]
    pub framing: Framing,
}

impl ComparisonResult {
    pub fn new(article1: Article, article2: Article, framing: Framing) -> Self {
        Self {
            article1,
            article2,
            framing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub dark_mode: bool,
    pub ideological_filters: Vec<String>,
    pub preferred_sources: Vec<String>,
    #[serde(rename = "enableAI")]
    pub enable_ai: bool,
    pub favorite_topics: Vec<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            ideological_filters: Vec::new(),
            preferred_sources: Vec::new(),
            enable_ai: true,
            favorite_topics: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis() -> Analysis {
        Analysis {
            political_leaning: PoliticalLeaning::Centrist,
            tone: Tone::Neutral,
            summary: vec!["one".into(), "two".into(), "three".into()],
            opposing_framing: "Others would disagree.".into(),
            sentiment: 0.2,
            factual_score: 0.9,
            bias_score: -0.1,
        }
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&Tone::EmotionallyCharged).unwrap(),
            "\"emotionally-charged\""
        );
        assert_eq!(
            serde_json::from_str::<PoliticalLeaning>("\"conservative\"").unwrap(),
            PoliticalLeaning::Conservative
        );
        assert!(serde_json::from_str::<Tone>("\"angry\"").is_err());
    }

    #[test]
    fn test_analysis_validation() {
        assert!(analysis().validate().is_ok());

        let mut short = analysis();
        short.summary.pop();
        assert!(short.validate().is_err());

        let mut out_of_range = analysis();
        out_of_range.factual_score = 1.5;
        let err = out_of_range.validate().unwrap_err();
        assert!(err.to_string().contains("factualScore"));

        let mut nan = analysis();
        nan.sentiment = f64::NAN;
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_preferences_defaults_enable_ai() {
        let prefs: UserPreferences = serde_json::from_str("{}").unwrap();
        assert!(prefs.enable_ai);
        assert!(prefs.preferred_sources.is_empty());

        let prefs: UserPreferences =
            serde_json::from_str(r#"{"enableAI": false, "favoriteTopics": ["Climate"]}"#).unwrap();
        assert!(!prefs.enable_ai);
        assert_eq!(prefs.favorite_topics, vec!["Climate".to_string()]);
    }

    #[test]
    fn test_comparison_flattens_framing() {
        let source = Source {
            id: "bbc".into(),
            name: "BBC News".into(),
            category: "politics".into(),
            language: "en".into(),
            country: "us".into(),
        };
        let article = Article {
            id: "a".into(),
            title: "A".into(),
            description: String::new(),
            content: String::new(),
            source,
            published_at: Utc::now(),
            url: "https://example.com/a".into(),
            url_to_image: None,
            author: None,
            analysis: None,
        };
        let result = ComparisonResult::new(
            article.clone(),
            article,
            Framing {
                framing_differences: vec![],
                key_fact_emphasis: vec![],
                language_contrasts: vec![],
                verdict: "Same story.".into(),
            },
        );
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["verdict"], "Same story.");
        assert_eq!(value["article1"]["id"], "a");
        assert!(value.get("framing").is_none());
    }
}
