//! Info command: version and effective configuration.

use clap::Args;
use lexstat_core::config::{Config, ConfigSources};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

/// Everything `info --json` prints.
#[derive(Serialize)]
struct InfoReport {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    license: &'static str,
    config: EffectiveConfig,
}

/// Resolved settings plus where they came from.
#[derive(Serialize)]
struct EffectiveConfig {
    /// Highest-precedence file, if any was loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    /// Every loaded file, lowest precedence first.
    sources: Vec<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wordlist: Option<String>,
    paragraph_split: &'static str,
    parallel: bool,
    /// `None` when the limit is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl InfoReport {
    fn new(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
            config: EffectiveConfig {
                config_file: sources.primary_file().map(ToString::to_string),
                sources: sources.layered().map(ToString::to_string).collect(),
                log_level: config.log_level.as_str(),
                log_dir: config.log_dir.as_ref().map(ToString::to_string),
                wordlist: config.wordlist.as_ref().map(ToString::to_string),
                paragraph_split: config.paragraph_split.as_str(),
                parallel: config.parallel,
                max_input_bytes: config.input_limit(),
            },
        }
    }

    fn print_text(&self) {
        println!("{} {}", self.name.bold(), self.version.green());
        println!("{}", self.description);
        row("License", self.license);

        let cfg = &self.config;
        section("Configuration");
        if cfg.sources.is_empty() {
            row("Files", "none loaded (defaults)".yellow());
        }
        for (i, file) in cfg.sources.iter().enumerate() {
            row(if i == 0 { "Files" } else { "" }, file.cyan());
        }
        row("Log level", cfg.log_level);
        if let Some(ref dir) = cfg.log_dir {
            row("Log directory", dir);
        }

        section("Scoring");
        match cfg.wordlist {
            Some(ref path) => row("Wordlist", path.cyan()),
            None => row("Wordlist", "not set (stats needs --wordlist)".yellow()),
        }
        row("Paragraph split", cfg.paragraph_split);
        row(
            "Execution",
            if cfg.parallel { "parallel" } else { "sequential" },
        );
        match cfg.max_input_bytes {
            Some(max) => row("Input limit", format!("{max} bytes")),
            None => row("Input limit", "disabled".dimmed()),
        }
    }
}

fn section(title: &str) {
    println!("\n{}", title.bold().underline());
}

fn row(label: &str, value: impl std::fmt::Display) {
    println!("  {:<16} {value}", label.dimmed());
}

/// Print the version and the configuration lexstat would run with.
#[instrument(name = "cmd_info", skip_all, fields(json_output = global_json))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(files = sources.layered().count(), "executing info command");

    let report = InfoReport::new(config, sources);
    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_text();
    }
    Ok(())
}
