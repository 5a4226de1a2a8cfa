//! Words command: count whitespace-separated words.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use legible_core::words;

use super::read_input;

/// Arguments for the `words` subcommand.
#[derive(Args, Debug)]
pub struct WordsArgs {
    /// File to count (`-` for stdin).
    pub file: Utf8PathBuf,
}

/// Print the number of words in a file.
#[instrument(name = "cmd_words", skip_all, fields(file = %args.file))]
pub fn cmd_words(
    args: WordsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing words command");

    let content = read_input(&args.file, max_input_bytes)?;
    let count = words::count_words(&content);

    if global_json {
        println!("{}", serde_json::json!({ "count": count }));
    } else {
        println!("{count}");
    }

    Ok(())
}
