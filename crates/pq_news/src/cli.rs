use clap::{Args, Subcommand};
use pq_core::{Article, Result};
use crate::client::NewsApiClient;
use crate::fallback::sample_articles;
use crate::sources::{NEWS_SOURCES, TOPICS};

#[derive(Args, Debug, Clone)]
pub struct NewsArgs {
    #[command(subcommand)]
    pub command: NewsCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum NewsCommands {
    /// Show the current political headlines
    Headlines {
        /// Narrow the headlines to a topic (e.g. Climate)
        #[arg(long)]
        topic: Option<String>,
    },
    /// Search all indexed articles, newest first
    Search {
        query: String,
        /// Oldest publication date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Newest publication date to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// List the suggested topics and outlets
    Sources,
}

pub async fn handle_command(args: NewsArgs, client: Option<&NewsApiClient>, fallback: bool) -> Result<()> {
    match args.command {
        NewsCommands::Headlines { topic } => {
            let result = match client {
                Some(client) => client.top_headlines(topic.as_deref()).await,
                None => Err(missing_key()),
            };
            print_articles(&with_fallback(result, fallback)?);
        }
        NewsCommands::Search { query, from, to } => {
            let result = match client {
                Some(client) => client.search(&query, from.as_deref(), to.as_deref()).await,
                None => Err(missing_key()),
            };
            print_articles(&with_fallback(result, fallback)?);
        }
        NewsCommands::Sources => {
            println!("Topics:");
            for topic in TOPICS {
                println!("  - {}", topic);
            }
            println!("Sources:");
            for source in NEWS_SOURCES {
                println!("  - {}", source);
            }
        }
    }
    Ok(())
}

fn missing_key() -> pq_core::Error {
    pq_core::Error::Config("NewsAPI key is required".to_string())
}

fn with_fallback(result: Result<Vec<Article>>, fallback: bool) -> Result<Vec<Article>> {
    match result {
        Err(e) if fallback => {
            tracing::warn!("⚠️ News request failed, showing sample articles: {}", e);
            Ok(sample_articles())
        }
        other => other,
    }
}

pub fn print_articles(articles: &[Article]) {
    println!("Found {} articles", articles.len());
    for (i, article) in articles.iter().enumerate() {
        println!(
            "{:>3}. 📰 {} - {} ({})",
            i,
            article.title,
            article.source.name,
            article.published_at.format("%Y-%m-%d %H:%M")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: NewsArgs,
    }

    #[test]
    fn test_parse_commands() {
        let cli = TestCli::try_parse_from(["pq", "headlines", "--topic", "Climate"]).unwrap();
        assert!(matches!(
            cli.args.command,
            NewsCommands::Headlines { topic: Some(ref t) } if t == "Climate"
        ));

        let cli = TestCli::try_parse_from(["pq", "search", "tariffs", "--from", "2024-01-01"]).unwrap();
        match cli.args.command {
            NewsCommands::Search { query, from, to } => {
                assert_eq!(query, "tariffs");
                assert_eq!(from.as_deref(), Some("2024-01-01"));
                assert!(to.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_with_fallback() {
        let failed: Result<Vec<Article>> = Err(missing_key());
        assert_eq!(with_fallback(failed, true).unwrap().len(), 3);

        let failed: Result<Vec<Article>> = Err(missing_key());
        assert!(with_fallback(failed, false).is_err());
    }

    #[tokio::test]
    async fn test_headlines_without_key_falls_back() {
        let args = NewsArgs {
            command: NewsCommands::Headlines { topic: None },
        };
        assert!(handle_command(args.clone(), None, true).await.is_ok());
        assert!(handle_command(args, None, false).await.is_err());
    }
}
