use anyhow::{Context, Result};
use soulsync_search::{config, Config};
use std::path::PathBuf;

const VALID_KEYS: &str = "dataset_path, limit, stop_words, extra_stop_words";

/// Show the current effective configuration.
pub fn show_config(data: Option<PathBuf>) -> Result<()> {
    let config = Config::load_with_dataset(data)?;

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!("  dataset_path: {}", config.dataset_path.display());
    println!("  limit: {}", config.limit);
    println!("  stop_words: {}", config.stop_words);
    println!("  extra_stop_words: {:?}", config.extra_stop_words);

    println!("\nPriority: CLI args > ENV vars (SOULSYNC_*) > Config file > Defaults");

    Ok(())
}

/// Get a specific config value, or the whole config file.
pub fn get_config(key: Option<String>) -> Result<()> {
    let Some(key) = key else {
        let config_path = config::config_file_path();

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            print!("{}", contents);
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'soulsync config init' to create it.");
        }
        return Ok(());
    };

    let config = Config::load()?;
    match key.as_str() {
        "dataset_path" => println!("{}", config.dataset_path.display()),
        "limit" => println!("{}", config.limit),
        "stop_words" => println!("{}", config.stop_words),
        "extra_stop_words" => println!("{}", config.extra_stop_words.join(", ")),
        _ => anyhow::bail!("Unknown config key: {}\n\nValid keys: {}", key, VALID_KEYS),
    }

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure soulsync.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
