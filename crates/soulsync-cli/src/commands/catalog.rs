use anyhow::Result;
use soulsync_search::Config;

/// Show a summary of the loaded catalog.
pub fn show_catalog(config: &Config) -> Result<()> {
    let context = super::load_context(config)?;
    let catalog = context.catalog();

    println!("\n🎧 SoulSync Catalog\n");
    println!("  Dataset: {}", config.dataset_path.display());
    println!("  Songs loaded: {}", catalog.len());
    println!("  Incomplete rows dropped: {}", catalog.dropped_rows());
    println!("  Languages: {}", catalog.languages().join(", "));
    println!("  Vocabulary terms: {}", context.vocabulary_size());
    println!("  Stop words: {}", config.stop_words);

    if catalog.is_empty() {
        println!("\n  The dataset has no complete rows; no title will be found.");
    }

    Ok(())
}
