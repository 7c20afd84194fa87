use anyhow::Result;
use soulsync_search::{Config, RecommendContext};
use std::io::{self, BufRead, Write};

use super::recommend::{answer, OutputFormat};

const PROMPT: &str = "✨ Enter a song name (e.g. Tum Hi Ho or Perfect): ";
const HINT: &str = "👆 Type a song name above to get recommendations!";

/// Session commands. The colon keeps them apart from song titles, so a song
/// called "Exit" can still be looked up.
const QUIT_COMMANDS: [&str; 3] = [":quit", ":q", ":exit"];

fn is_quit(input: &str) -> bool {
    QUIT_COMMANDS
        .iter()
        .any(|command| input.eq_ignore_ascii_case(command))
}

/// Prompt for titles on stdin until EOF or `:quit`.
pub fn run_interactive(config: &Config, limit: usize) -> Result<()> {
    let context = super::load_context(config)?;

    println!("\n🎧 SoulSync");
    println!("Find songs that match your vibe. Type ':quit' to leave.\n");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&context, limit, stdin.lock(), &mut stdout.lock())
}

/// Drive one prompt session over arbitrary input and output streams.
pub fn run_session<R: BufRead, W: Write>(
    context: &RecommendContext,
    limit: usize,
    input: R,
    out: &mut W,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;
        let title = line.trim();

        if title.is_empty() {
            writeln!(out, "{HINT}")?;
            continue;
        }
        if is_quit(title) {
            break;
        }

        answer(context, title, limit, OutputFormat::Text, out)?;
    }

    Ok(())
}
