//! Info command implementation

use clap::Args;
use legible_core::config::{Config, ConfigSources};
use owo_colors::Style;
use serde::Serialize;
use tracing::{debug, instrument};

use super::styled;

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_grade: Option<f64>,
    /// `None` when the limit is disabled.
    max_input_bytes: Option<usize>,
    word_list: String,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_grade: config.max_grade,
            max_input_bytes: config.input_limit(),
            word_list: config.word_list_path().to_string(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package and configuration information.
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let label = |name: &str| styled(name, Style::new().dimmed());

    let package = &full_info.package;
    println!(
        "{} {}",
        styled(package.name, Style::new().bold()),
        styled(package.version, Style::new().green())
    );
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", label("License"), package.license);
    }
    if !package.repository.is_empty() {
        println!(
            "{}: {}",
            label("Repository"),
            styled(package.repository, Style::new().cyan())
        );
    }

    let config = &full_info.config;
    println!();
    println!("{}", styled("Configuration", Style::new().bold().underline()));
    match config.config_file {
        Some(ref path) => println!("{}: {}", label("Config file"), styled(path, Style::new().cyan())),
        None => println!(
            "{}: {}",
            label("Config file"),
            styled("none loaded", Style::new().yellow())
        ),
    }
    println!("{}: {}", label("Log level"), config.log_level);
    if let Some(ref dir) = config.log_dir {
        println!("{}: {}", label("Log directory"), dir);
    }
    println!("{}: {}", label("Word list"), config.word_list);
    match config.max_input_bytes {
        Some(limit) => println!("{}: {limit} bytes", label("Input limit")),
        None => println!(
            "{}: {}",
            label("Input limit"),
            styled("disabled", Style::new().yellow())
        ),
    }
    match config.max_grade {
        Some(max) => println!("{}: {max:.1}", label("Max grade")),
        None => println!("{}: {}", label("Max grade"), label("(not set)")),
    }

    Ok(())
}
