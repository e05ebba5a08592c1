pub mod models;
pub mod error;
pub mod news;
pub mod types;

pub use error::Error;
pub use models::AnalysisSource;
pub use news::{FetchRequest, NewsSource};
pub use types::{
    Analysis, Article, ComparisonResult, Framing, PoliticalLeaning, Source, Tone, User,
    UserPreferences, VisualizationPoint,
};

pub type Result<T> = std::result::Result<T, Error>;
