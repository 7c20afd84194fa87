pub mod catalog;
pub mod config;
pub mod interactive;
pub mod recommend;

pub use catalog::show_catalog;
pub use interactive::run_interactive;
pub use recommend::{run_recommend, OutputFormat};

use anyhow::{Context, Result};
use soulsync_core::Catalog;
use soulsync_search::{Config, RecommendContext};

/// Load the configured dataset and build the similarity context.
pub fn load_context(config: &Config) -> Result<RecommendContext> {
    log::info!("Loading catalog from {}", config.dataset_path.display());
    let catalog = Catalog::load(&config.dataset_path).with_context(|| {
        format!(
            "Failed to load song dataset {}",
            config.dataset_path.display()
        )
    })?;

    Ok(RecommendContext::build(catalog, config.stop_words()))
}
