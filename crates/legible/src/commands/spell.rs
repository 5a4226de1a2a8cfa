//! Spell command: check text against a word list, or grow the list.

use std::collections::HashSet;

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Subcommand};
use owo_colors::Style;
use tracing::{debug, instrument};

use legible_core::SpellChecker;

use super::{read_input, styled};

/// Arguments for the `spell` subcommand.
#[derive(Args, Debug)]
pub struct SpellArgs {
    /// Word list file (one word per line). Overrides `word_list` in config.
    #[arg(long, value_name = "FILE")]
    pub word_list: Option<Utf8PathBuf>,

    /// What to do with the word list.
    #[command(subcommand)]
    pub action: SpellAction,
}

/// Spell checker actions.
#[derive(Subcommand, Debug)]
pub enum SpellAction {
    /// Report words that are not in the word list
    Check {
        /// File to check (`-` for stdin).
        file: Utf8PathBuf,
    },
    /// Append words to the word list
    Add {
        /// Words to add.
        #[arg(required = true)]
        words: Vec<String>,
    },
}

/// Run a spell checker action.
#[instrument(name = "cmd_spell", skip_all)]
pub fn cmd_spell(
    args: SpellArgs,
    global_json: bool,
    config_word_list: &Utf8Path,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let word_list = args
        .word_list
        .unwrap_or_else(|| config_word_list.to_path_buf());
    debug!(word_list = %word_list, action = ?args.action, "executing spell command");

    let checker = SpellChecker::open(&word_list).context("failed to load word list")?;

    match args.action {
        SpellAction::Check { file } => check(&checker, &file, global_json, max_input_bytes),
        SpellAction::Add { words } => add(&checker, &words, global_json),
    }
}

fn check(
    checker: &SpellChecker,
    file: &Utf8Path,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let content = read_input(file, max_input_bytes)?;
    let misspelled = checker.check_spelling(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&misspelled)?);
        return Ok(());
    }

    if misspelled.is_empty() {
        let pass = styled("PASS:", Style::new().green());
        println!("{pass} no misspelled words in {file}");
        return Ok(());
    }

    let mut by_position: Vec<(&String, &usize)> = misspelled.iter().collect();
    by_position.sort_by_key(|(_, position)| **position);
    for (word, position) in by_position {
        println!(
            "{} {}",
            styled(format!("{position:>5}"), Style::new().dimmed()),
            styled(word, Style::new().red())
        );
    }

    bail!(
        "{} misspelled word(s) in {file}. Fix them or add them with `legible spell add`.",
        misspelled.len()
    );
}

fn add(checker: &SpellChecker, words: &[String], global_json: bool) -> anyhow::Result<()> {
    // The checker's set is fixed at load time, so repeats within one call are tracked here.
    let mut written = HashSet::new();
    let mut added = Vec::new();
    for word in words {
        if written.contains(word.as_str()) {
            debug!(word = %word, "already added in this run");
            continue;
        }
        if checker.add_word(word)? {
            written.insert(word.as_str());
            added.push(word.as_str());
        } else if !global_json {
            println!("{} {word}", styled("known:", Style::new().yellow()));
        }
    }

    if global_json {
        println!("{}", serde_json::json!({ "added": added }));
    } else {
        for word in &added {
            println!("{} {word}", styled("added:", Style::new().green()));
        }
    }

    Ok(())
}
