use anyhow::{Context, Result};
use soulsync_search::{Config, RecommendContext, Recommendation};
use std::io::{self, Write};

/// Message shown when a title has no match in the catalog.
pub const NOT_FOUND_MESSAGE: &str = "😔 No recommendations found for that song. Try another one!";

/// How recommendations are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One card per song
    Text,
    /// A JSON array of songs, or `null` when the title is unknown
    Json,
}

/// Recommend songs similar to `title` and print them to stdout.
pub fn run_recommend(config: &Config, title: &str, limit: usize, format: OutputFormat) -> Result<()> {
    let context = super::load_context(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    answer(&context, title, limit, format, &mut out)
}

/// Answer one query, treating an unknown title as "no results".
pub fn answer<W: Write>(
    context: &RecommendContext,
    title: &str,
    limit: usize,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match context.recommend_with_limit(title, limit) {
        Ok(recommendations) => write_recommendations(out, &recommendations, format),
        Err(e) if e.is_not_found() => {
            log::debug!("{}", e);
            match format {
                OutputFormat::Text => writeln!(out, "{NOT_FOUND_MESSAGE}")?,
                OutputFormat::Json => writeln!(out, "null")?,
            }
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn write_recommendations<W: Write>(
    out: &mut W,
    recommendations: &[Recommendation],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(recommendations)
                .context("Failed to serialize recommendations")?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Text => {
            writeln!(out, "\n🎶 Recommended Songs for You\n")?;
            for song in recommendations {
                write_card(out, song)?;
            }
        }
    }
    Ok(())
}

fn write_card<W: Write>(out: &mut W, song: &Recommendation) -> io::Result<()> {
    let rating = song
        .rating
        .map_or_else(|| String::from("n/a"), |r| format!("{r:?}"));

    writeln!(out, "  {}", song.name)?;
    writeln!(out, "    Artists: {}", song.artists)?;
    writeln!(out, "    Genre: {}", song.genre)?;
    writeln!(out, "    Album/Movie: {}", song.album)?;
    writeln!(out, "    ⭐ {rating}/5")?;
    writeln!(out)
}
