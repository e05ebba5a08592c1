use std::sync::Arc;
use pq_core::{AnalysisSource, Error, Result};

use crate::fallback::MockModel;
use crate::Config;

pub mod dummy;
pub mod gemini;

pub use dummy::DummyModel;
pub use gemini::GeminiModel;

pub const AVAILABLE_MODELS: [&str; 3] = ["gemini", "dummy", "mock"];

/// Builds the analysis model named in `config`, Gemini when unnamed.
///
/// Names other than `dummy` and `mock` that start with `gemini` select that Gemini
/// model version (e.g. `gemini-1.5-flash`).
pub fn create_model(config: Option<Config>) -> Result<Arc<dyn AnalysisSource>> {
    let config = config.unwrap_or_default();
    let name = config.model_name.clone().unwrap_or_else(|| "gemini".to_string());

    let model: Arc<dyn AnalysisSource> = match name.as_str() {
        "dummy" => Arc::new(DummyModel::new()),
        "mock" => Arc::new(MockModel),
        n if n.starts_with("gemini") => Arc::new(GeminiModel::new(&config)?),
        other => {
            return Err(Error::Config(format!(
                "Unknown model '{}'. Available models: {}",
                other,
                AVAILABLE_MODELS.join(", ")
            )))
        }
    };
    tracing::debug!("Created analysis model {}", model.name());
    Ok(model)
}
