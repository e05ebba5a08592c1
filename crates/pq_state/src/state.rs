use pq_core::{Article, ComparisonResult, VisualizationPoint};
use serde::Serialize;

use crate::selection::ComparisonSelection;

/// Everything the presentation layers render from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub articles: Vec<Article>,
    #[serde(rename = "selectedArticles")]
    pub selection: ComparisonSelection,
    #[serde(rename = "biasMapPoints")]
    pub visualization_points: Vec<VisualizationPoint>,
    #[serde(rename = "comparisonData")]
    pub comparison: Option<ComparisonResult>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_topic: String,
    pub search_query: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetLoading(bool),
    SetError(Option<String>),
    SetArticles(Vec<Article>),
    UpdateArticle(Article),
    SetSelection(ComparisonSelection),
    SetVisualizationPoints(Vec<VisualizationPoint>),
    SetComparison(Option<ComparisonResult>),
    SetSelectedTopic(String),
    SetSearchQuery(String),
}

impl AppState {
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::SetLoading(loading) => Self { loading, ..self },
            Action::SetError(error) => Self { error, ..self },
            Action::SetArticles(articles) => Self { articles, ..self },
            Action::UpdateArticle(updated) => {
                let articles = self
                    .articles
                    .into_iter()
                    .map(|article| if article.id == updated.id { updated.clone() } else { article })
                    .collect();
                Self { articles, ..self }
            }
            Action::SetSelection(selection) => Self { selection, ..self },
            Action::SetVisualizationPoints(visualization_points) => Self {
                visualization_points,
                ..self
            },
            Action::SetComparison(comparison) => Self { comparison, ..self },
            Action::SetSelectedTopic(selected_topic) => Self {
                selected_topic,
                ..self
            },
            Action::SetSearchQuery(search_query) => Self { search_query, ..self },
        }
    }

    pub fn article(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }
}
