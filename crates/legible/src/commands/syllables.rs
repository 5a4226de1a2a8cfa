//! Syllables command: total or per-word syllable estimates.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::Style;
use tracing::{debug, instrument};

use legible_core::syllables;

use super::{read_input, styled};

/// Arguments for the `syllables` subcommand.
#[derive(Args, Debug)]
pub struct SyllablesArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Show the estimate for every word.
    #[arg(long)]
    pub words: bool,
}

/// Print syllable estimates for a file.
#[instrument(name = "cmd_syllables", skip_all, fields(file = %args.file))]
pub fn cmd_syllables(
    args: SyllablesArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, words = args.words, "executing syllables command");

    let content = read_input(&args.file, max_input_bytes)?;

    if !args.words {
        let total = syllables::count_syllables(&content);
        if global_json {
            println!("{}", serde_json::json!({ "total": total }));
        } else {
            println!("{total}");
        }
        return Ok(());
    }

    let breakdown = syllables::breakdown(&content);
    if global_json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        for entry in &breakdown {
            let word = styled(&entry.word, Style::new().dimmed());
            println!("{:>3} {word}", entry.syllables);
        }
    }

    Ok(())
}
