pub mod client;
pub mod cli;
pub mod fallback;
pub mod sources;

pub use client::{NewsApiClient, NewsConfig};
pub use fallback::{sample_articles, FallbackNews, SampleNews};

pub use cli::{handle_command, NewsArgs, NewsCommands};

pub mod prelude {
    pub use super::client::{NewsApiClient, NewsConfig};
    pub use super::fallback::{FallbackNews, SampleNews};
    pub use pq_core::{Article, Error, FetchRequest, NewsSource, Result};
}
