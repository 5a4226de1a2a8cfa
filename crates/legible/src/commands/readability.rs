//! Readability command: Flesch-Kincaid Grade Level and Flesch Reading Ease.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::Style;
use tracing::{debug, instrument};

use legible_core::readability::{self, ReadabilityReport};

use super::{read_input, styled};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze (`-` for stdin).
    pub file: Utf8PathBuf,

    /// Maximum acceptable grade level.
    #[arg(long)]
    pub max_grade: Option<f64>,

    /// Strip markdown before scoring (implied for `.md` files).
    #[arg(long)]
    pub markdown: bool,
}

/// Score readability of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config_max_grade: Option<f64>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, max_grade = ?args.max_grade, "executing readability command");

    let content = read_input(&args.file, max_input_bytes)?;

    if !global_json && content.trim().is_empty() {
        debug!("input is blank, nothing to score");
        return Ok(());
    }

    let strip_md = args.markdown || args.file.extension() == Some("md");
    let max_grade = args.max_grade.or(config_max_grade);

    let report = readability::check_readability(&content, strip_md, max_grade);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);

    if report.over_max {
        let max = report.max_grade.unwrap_or(0.0);
        bail!(
            "{} scores grade {:.2} (max: {:.2}). Shorten sentences or use shorter words.",
            args.file,
            report.grade_level,
            max,
        );
    } else if let Some(max) = report.max_grade {
        println!(
            "{} {} scores grade {:.2} (max: {:.2})",
            styled("PASS:", Style::new().green()),
            args.file,
            report.grade_level,
            max,
        );
    }

    Ok(())
}

fn print_report(report: &ReadabilityReport) {
    let label = |name: &str| styled(name, Style::new().dimmed());

    println!("{} {:.2}", label("Flesch-Kincaid Grade Level:"), report.grade_level);
    println!("{} {:.2}", label("Flesch Reading Ease Score:"), report.reading_ease);
    println!("{} {}", label("Total words:"), report.total_words);
    println!("{} {}", label("Total sentences:"), report.total_sentences);
    println!("{} {}", label("Total syllables:"), report.total_syllables);
    println!("{} {:.2}", label("Avg words/sentence:"), report.words_per_sentence);
    println!("{} {:.2}", label("Avg syllables/word:"), report.syllables_per_word);
}
