use clap::Parser;
use pq_core::{AnalysisSource, Article, ComparisonResult, Error, NewsSource, Result, User, UserPreferences};
use pq_inference::{create_model, FallbackAnalysis, MockModel};
use pq_news::{FallbackNews, NewsApiClient, NewsArgs, NewsCommands, NewsConfig, SampleNews};
use pq_state::AppCoordinator;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

mod logging;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Parser, Debug)]
#[command(name = "pq", author, version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    news_api_key: Option<String>,
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,
    #[arg(long, default_value = "gemini", help = "Model to use for analysis. Available models: gemini (default), dummy, mock")]
    model: String,
    #[arg(long)]
    news_url: Option<String>,
    #[arg(long)]
    model_url: Option<String>,
    /// JSON user document (uid, email, preferences) to act as
    #[arg(long)]
    preferences: Option<PathBuf>,
    /// Run without a signed-in user; AI analysis is disabled
    #[arg(long, conflicts_with = "preferences")]
    anonymous: bool,
    /// Fail instead of serving sample articles and mock analyses
    #[arg(long)]
    no_fallback: bool,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn fallback(&self) -> bool {
        !self.no_fallback
    }
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    News(NewsCommands),
    /// Fetch headlines and analyze one of them
    Analyze {
        #[arg(long)]
        topic: Option<String>,
        /// Position of the article in the fetched list
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
    /// Fetch headlines and compare the framing of two of them
    Compare {
        first: usize,
        second: usize,
        #[arg(long)]
        topic: Option<String>,
    },
    /// Fetch headlines and print their bias-map placement
    Map {
        #[arg(long)]
        topic: Option<String>,
    },
    /// Serve the JSON API
    Serve {
        #[arg(long, default_value = DEFAULT_ADDR)]
        addr: String,
    },
}

fn local_user() -> User {
    User {
        uid: "local".to_string(),
        email: "local@localhost".to_string(),
        display_name: None,
        preferences: UserPreferences::default(),
    }
}

fn load_identity(path: Option<&Path>, anonymous: bool) -> Result<Option<User>> {
    if anonymous {
        return Ok(None);
    }
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let user: User = serde_json::from_str(&raw)?;
            Ok(Some(user))
        }
        None => Ok(Some(local_user())),
    }
}

fn news_client(cli: &Cli) -> Result<Option<NewsApiClient>> {
    let config = NewsConfig {
        api_key: cli.news_api_key.clone(),
        base_url: cli.news_url.clone(),
        ..NewsConfig::default()
    };
    match NewsApiClient::new(config) {
        Ok(client) => Ok(Some(client)),
        Err(e) if cli.fallback() => {
            warn!("⚠️ {}, running with sample articles", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn news_source(cli: &Cli) -> Result<Arc<dyn NewsSource>> {
    let source: Arc<dyn NewsSource> = match news_client(cli)? {
        Some(client) if cli.no_fallback => Arc::new(client),
        Some(client) => Arc::new(FallbackNews::new(client)),
        None => Arc::new(SampleNews),
    };
    Ok(source)
}

fn analysis_source(cli: &Cli) -> Result<Arc<dyn AnalysisSource>> {
    if cli.fallback() && cli.gemini_api_key.is_none() && cli.model.starts_with("gemini") {
        warn!("⚠️ No Gemini API key configured, using mock analyses");
        return Ok(Arc::new(MockModel));
    }

    let config = pq_inference::Config {
        api_key: cli.gemini_api_key.clone(),
        model_name: Some(cli.model.clone()),
        base_url: cli.model_url.clone(),
    };
    let model = create_model(Some(config))?;
    info!("🧠 Analysis model initialized (using {})", model.name());
    if cli.no_fallback {
        Ok(model)
    } else {
        Ok(Arc::new(FallbackAnalysis::new(model)))
    }
}

/// Fetches headlines and fails when the fetch left an error behind.
async fn fetch(coordinator: &AppCoordinator, topic: Option<&str>) -> Result<Vec<Article>> {
    coordinator.fetch_articles(topic).await;
    let state = coordinator.snapshot();
    match state.error {
        Some(message) => Err(Error::News(message)),
        None => Ok(state.articles),
    }
}

fn pick(articles: &[Article], index: usize) -> Result<&Article> {
    articles.get(index).ok_or_else(|| {
        Error::External(anyhow::anyhow!(
            "No article at index {} ({} fetched)",
            index,
            articles.len()
        ))
    })
}

fn print_analysis(article: &Article) {
    println!("📰 {} - {}", article.title, article.source.name);
    let Some(analysis) = &article.analysis else {
        println!("   No analysis available");
        return;
    };
    println!("   Leaning:   {}", analysis.political_leaning);
    println!("   Tone:      {}", analysis.tone);
    println!("   Sentiment: {:+.2}", analysis.sentiment);
    println!("   Factual:   {:.2}", analysis.factual_score);
    println!("   Bias:      {:+.2}", analysis.bias_score);
    println!("   Summary:");
    for point in &analysis.summary {
        println!("     - {}", point);
    }
    println!("   Opposing framing: {}", analysis.opposing_framing);
}

fn print_comparison(result: &ComparisonResult) {
    println!("⚖️ {} ({})", result.article1.title, result.article1.source.name);
    println!("   vs {} ({})", result.article2.title, result.article2.source.name);
    let sections = [
        ("Framing differences", &result.framing.framing_differences),
        ("Key fact emphasis", &result.framing.key_fact_emphasis),
        ("Language contrasts", &result.framing.language_contrasts),
    ];
    for (heading, items) in sections {
        println!("   {}:", heading);
        for item in items {
            println!("     - {}", item);
        }
    }
    println!("   Verdict: {}", result.framing.verdict);
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let logger = logging::init_logging(cli.verbose);

    if let Commands::News(command) = &cli.command {
        let client = news_client(&cli)?;
        let args = NewsArgs { command: command.clone() };
        return pq_news::handle_command(args, client.as_ref(), cli.fallback()).await;
    }

    let identity = load_identity(cli.preferences.as_deref(), cli.anonymous)?;
    match &identity {
        Some(user) => info!("👤 Acting as {}", user.email),
        None => info!("👤 No user, AI analysis disabled"),
    }
    let coordinator = Arc::new(AppCoordinator::new(news_source(&cli)?, analysis_source(&cli)?, identity));

    match cli.command {
        Commands::News(_) => {}
        Commands::Analyze { topic, index } => {
            let logger = logger.with_prefix("[analyze]");
            let articles = fetch(&coordinator, topic.as_deref()).await?;
            let article = pick(&articles, index)?;
            if !coordinator.ai_enabled() {
                logger.warn("AI analysis is disabled for this user");
            }
            logger.info(&format!("🔍 Analyzing '{}'", article.title));
            coordinator.analyze_article(article).await;
            match coordinator.snapshot().article(&article.id) {
                Some(analyzed) => print_analysis(analyzed),
                None => logger.error("Article disappeared from the feed"),
            }
        }
        Commands::Compare { first, second, topic } => {
            let logger = logger.with_prefix("[compare]");
            let articles = fetch(&coordinator, topic.as_deref()).await?;
            coordinator.select_for_comparison(pick(&articles, first)?);
            coordinator.select_for_comparison(pick(&articles, second)?);
            coordinator.compare_selected().await;

            let state = coordinator.snapshot();
            match (state.comparison, state.error) {
                (_, Some(message)) => return Err(Error::Inference(message)),
                (Some(result), None) => print_comparison(&result),
                (None, None) => logger.warn("Pick two different articles to compare"),
            }
        }
        Commands::Map { topic } => {
            fetch(&coordinator, topic.as_deref()).await?;
            for point in coordinator.snapshot().visualization_points {
                println!(
                    "{:>+6.2} {:>5.2}  {}  {} - {}",
                    point.x, point.y, point.color, point.title, point.source
                );
            }
        }
        Commands::Serve { addr } => {
            if coordinator.identity().is_some() {
                coordinator.fetch_articles(None).await;
            }
            pq_web::serve(&addr, coordinator).await?;
        }
    }

    Ok(())
}
