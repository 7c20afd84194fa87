use anyhow::Result;
use clap::Parser;
use soulsync_search::Config;
use std::path::PathBuf;

mod commands;

use commands::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "soulsync", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the song dataset (default: spotify_songs.csv)
    #[arg(long, global = true)]
    data: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Recommend songs similar to a title
    ///
    /// Looks the title up in the catalog, ignoring case and surrounding
    /// whitespace, and lists the songs whose artists, genre, album and
    /// language are closest to it. Only exact title matches count.
    ///
    /// Output:
    /// - One card per song with artists, genre, album/movie and rating
    /// - A "no recommendations" message if the title is not in the catalog
    Recommend {
        /// Song title to match
        title: String,

        /// Number of songs to return (default from config, normally 6)
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Type song titles at a prompt and get recommendations for each
    Interactive {
        /// Number of songs to return per title
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },
    /// Show a summary of the loaded catalog
    Catalog,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print a single config value, or the whole config file
    Get {
        /// Key to read (dataset_path, limit, stop_words, extra_stop_words)
        key: Option<String>,
    },
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if it does not exist
    Init,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data = cli.data;

    match cli.command {
        Commands::Recommend {
            title,
            limit,
            format,
        } => {
            let config = Config::load_with_dataset(data)?;
            let limit = limit.unwrap_or(config.limit);
            commands::run_recommend(&config, &title, limit, format)?;
        }
        Commands::Interactive { limit } => {
            let config = Config::load_with_dataset(data)?;
            let limit = limit.unwrap_or(config.limit);
            commands::run_interactive(&config, limit)?;
        }
        Commands::Catalog => {
            let config = Config::load_with_dataset(data)?;
            commands::show_catalog(&config)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(data)?,
            ConfigAction::Get { key } => commands::config::get_config(key)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
