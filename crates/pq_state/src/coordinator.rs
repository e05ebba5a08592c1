use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use pq_core::{AnalysisSource, Article, ComparisonResult, FetchRequest, NewsSource, User};

use crate::state::{Action, AppState};
use crate::visualization::{PointStrategy, RandomPlacement};

pub const FETCH_ERROR: &str = "Failed to fetch news articles";
pub const COMPARE_ERROR: &str = "Failed to compare articles";

/// Owns the application state and funnels every change through
/// [`AppState::reduce`].
///
/// Operations may overlap. The state lock is only taken to read or merge,
/// never across a collaborator call, so when two fetches race the one that
/// finishes last wins.
pub struct AppCoordinator {
    state: RwLock<AppState>,
    news: Arc<dyn NewsSource>,
    analysis: Arc<dyn AnalysisSource>,
    points: Arc<dyn PointStrategy>,
    identity: Option<User>,
}

impl fmt::Debug for AppCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppCoordinator")
            .field("news", &"<dyn NewsSource>")
            .field("analysis", &self.analysis.name())
            .field("identity", &self.identity.as_ref().map(|u| u.uid.as_str()))
            .finish()
    }
}

impl AppCoordinator {
    pub fn new(news: Arc<dyn NewsSource>, analysis: Arc<dyn AnalysisSource>, identity: Option<User>) -> Self {
        Self {
            state: RwLock::new(AppState::default()),
            news,
            analysis,
            points: Arc::new(RandomPlacement),
            identity,
        }
    }

    pub fn with_point_strategy(mut self, points: Arc<dyn PointStrategy>) -> Self {
        self.points = points;
        self
    }

    pub fn identity(&self) -> Option<&User> {
        self.identity.as_ref()
    }

    pub fn ai_enabled(&self) -> bool {
        self.identity
            .as_ref()
            .map(|u| u.preferences.enable_ai)
            .unwrap_or(false)
    }

    /// An owned copy of the current state.
    pub fn snapshot(&self) -> AppState {
        self.read().clone()
    }

    pub async fn fetch_articles(&self, topic: Option<&str>) {
        self.dispatch([Action::SetLoading(true), Action::SetError(None)]);

        let request = FetchRequest {
            topic: topic.map(str::to_string),
        };

        match self.news.fetch(&request).await {
            Ok(articles) => {
                let points = articles.iter().map(|a| self.points.point_for(a)).collect();
                tracing::info!("✨ Loaded {} articles", articles.len());
                self.dispatch([
                    Action::SetArticles(articles),
                    Action::SetVisualizationPoints(points),
                    Action::SetLoading(false),
                ]);
            }
            Err(e) => {
                tracing::error!("❌ Failed to fetch articles: {}", e);
                self.dispatch([Action::SetError(Some(FETCH_ERROR.to_string())), Action::SetLoading(false)]);
            }
        }
    }

    pub async fn analyze_article(&self, article: &Article) {
        if !self.ai_enabled() {
            tracing::debug!("AI analysis disabled, skipping '{}'", article.title);
            return;
        }

        match self.analysis.analyze_one(article).await {
            Ok(analysis) => {
                let mut state = self.write();
                if state.article(&article.id).is_none() {
                    tracing::debug!("Article '{}' was replaced before its analysis arrived", article.id);
                }
                reduce_in_place(&mut state, Action::UpdateArticle(article.with_analysis(analysis)));
            }
            Err(e) => {
                tracing::error!("❌ Failed to analyze article '{}': {}", article.title, e);
            }
        }
    }

    /// Picks `article` for comparison.
    ///
    /// Starting a new selection drops the result of the previous comparison.
    pub fn select_for_comparison(&self, article: &Article) {
        let mut state = self.write();
        let selection = state.selection.select(article);
        if selection.len() == 1 && selection != state.selection {
            reduce_in_place(&mut state, Action::SetComparison(None));
        }
        reduce_in_place(&mut state, Action::SetSelection(selection));
    }

    pub async fn compare_selected(&self) {
        let pair = {
            let state = self.read();
            state
                .selection
                .pair()
                .map(|(first, second)| (first.clone(), second.clone()))
        };
        let Some((first, second)) = pair else {
            return;
        };

        self.dispatch([Action::SetLoading(true)]);
        match self.analysis.compare_two(&first, &second).await {
            Ok(framing) => {
                tracing::info!("⚖️ Compared '{}' with '{}'", first.title, second.title);
                let result = ComparisonResult::new(first, second, framing);
                self.dispatch([Action::SetComparison(Some(result)), Action::SetLoading(false)]);
            }
            Err(e) => {
                tracing::error!("❌ Failed to compare articles: {}", e);
                self.dispatch([Action::SetError(Some(COMPARE_ERROR.to_string())), Action::SetLoading(false)]);
            }
        }
    }

    pub fn clear_comparison(&self) {
        self.dispatch([
            Action::SetSelection(Default::default()),
            Action::SetComparison(None),
        ]);
    }

    pub fn set_topic_filter(&self, topic: impl Into<String>) {
        self.dispatch([Action::SetSelectedTopic(topic.into())]);
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        self.dispatch([Action::SetSearchQuery(query.into())]);
    }

    fn dispatch<I: IntoIterator<Item = Action>>(&self, actions: I) {
        let mut state = self.write();
        for action in actions {
            reduce_in_place(&mut state, action);
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, AppState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AppState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn reduce_in_place(state: &mut AppState, action: Action) {
    let current = std::mem::take(state);
    *state = current.reduce(action);
}
