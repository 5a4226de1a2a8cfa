//! Sentences command: count or list sentences.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::Style;
use serde::Serialize;
use tracing::{debug, instrument};

use legible_core::sentences;

use super::{read_input, styled};

/// Arguments for the `sentences` subcommand.
#[derive(Args, Debug)]
pub struct SentencesArgs {
    /// File to segment (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Print each sentence instead of only the count.
    #[arg(long)]
    pub list: bool,
}

#[derive(Serialize)]
struct SentenceReport {
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentences: Option<Vec<String>>,
}

/// Count (and optionally list) the sentences in a file.
#[instrument(name = "cmd_sentences", skip_all, fields(file = %args.file))]
pub fn cmd_sentences(
    args: SentencesArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, list = args.list, "executing sentences command");

    let content = read_input(&args.file, max_input_bytes)?;
    // Same trimming as readability scoring, so a final newline adds no sentence.
    let found = sentences::split_into_sentences(content.trim_end());

    if global_json {
        let report = SentenceReport {
            count: found.len(),
            sentences: args.list.then_some(found),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.list {
        for (idx, sentence) in found.iter().enumerate() {
            let number = styled(format!("{:>3}", idx + 1), Style::new().dimmed());
            println!("{number} {}", sentence.trim());
        }
    } else {
        println!("{}", found.len());
    }

    Ok(())
}
