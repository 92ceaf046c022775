//! Stats command: per-paragraph readability statistics.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{debug, info, instrument};

use lexstat_core::{
    BatchSummary, Config, DaleChallWordlist, Execution, ParagraphSplit, ParagraphStats,
    compute_batch_with_progress, markdown, text,
};

use super::read_input_file;

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to analyze (`-` reads standard input).
    pub file: Utf8PathBuf,

    /// Dale-Chall wordlist file, one word per line.
    #[arg(long, value_name = "FILE")]
    pub wordlist: Option<Utf8PathBuf>,

    /// How to cut the input into paragraphs.
    #[arg(long, value_enum)]
    pub split: Option<ParagraphSplit>,

    /// Treat markdown files as plain text.
    #[arg(long)]
    pub raw: bool,

    /// Score paragraphs one at a time on the current thread.
    #[arg(long)]
    pub sequential: bool,

    /// Print only the batch summary.
    #[arg(long)]
    pub summary: bool,
}

/// Full output of the `stats` command.
#[derive(Debug, Serialize, JsonSchema)]
pub struct StatsReport {
    /// One entry per paragraph, in input order.
    pub paragraphs: Vec<ParagraphStats>,
    /// Totals and mean scores.
    pub summary: BatchSummary,
}

/// Options resolved from the command line and configuration.
struct Resolved {
    wordlist: Utf8PathBuf,
    split: ParagraphSplit,
    execution: Execution,
}

impl Resolved {
    fn new(args: &StatsArgs, config: &Config, cwd: &Utf8Path) -> anyhow::Result<Self> {
        let Some(wordlist) = args
            .wordlist
            .as_ref()
            .map(|p| if p.is_relative() { cwd.join(p) } else { p.clone() })
            .or_else(|| config.wordlist_path(cwd))
        else {
            bail!(
                "no Dale-Chall wordlist configured. Pass --wordlist <FILE> or set `wordlist` in the config file."
            );
        };
        let execution = if args.sequential {
            Execution::Sequential
        } else {
            Execution::from_parallel(config.parallel)
        };
        Ok(Self {
            wordlist,
            split: args.split.unwrap_or(config.paragraph_split),
            execution,
        })
    }
}

/// Compute per-paragraph statistics for a file.
#[instrument(name = "cmd_stats", skip_all, fields(file = %args.file))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
    cwd: &Utf8Path,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, wordlist = ?args.wordlist, split = ?args.split, "executing stats command");

    let resolved = Resolved::new(&args, config, cwd)?;

    // Load the wordlist before touching the input so a bad path fails fast.
    let wordlist = DaleChallWordlist::from_path(&resolved.wordlist)
        .context("failed to load Dale-Chall wordlist")?;

    let content = read_input_file(&args.file, max_input_bytes)?;
    let paragraphs = if args.file.extension() == Some("md") && !args.raw {
        markdown::prose_paragraphs(&content)
    } else {
        text::split_paragraphs(&content, resolved.split)
    };
    info!(
        paragraphs = paragraphs.len(),
        wordlist_words = wordlist.len(),
        "scoring paragraphs"
    );

    let progress = progress_bar(paragraphs.len(), global_json || quiet);
    let stats = compute_batch_with_progress(&paragraphs, &wordlist, resolved.execution, || {
        progress.inc(1);
    });
    progress.finish_and_clear();

    let report = StatsReport {
        summary: BatchSummary::from_stats(&stats),
        paragraphs: stats,
    };

    if global_json {
        if args.summary {
            println!("{}", serde_json::to_string_pretty(&report.summary)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        return Ok(());
    }

    println!("{}", args.file.bold());
    if !args.summary {
        print_table(&report.paragraphs);
    }
    print_summary(&report.summary);

    Ok(())
}

fn progress_bar(len: usize, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} paragraphs")
    {
        bar.set_style(style);
    }
    bar
}

fn print_table(stats: &[ParagraphStats]) {
    println!(
        "\n  {:>4} {:>6} {:>5} {:>6} {:>6} {:>8} {:>7} {:>8} {:>7}",
        "#".dimmed(),
        "words".dimmed(),
        "sent".dimmed(),
        "syll".dimmed(),
        "hard".dimmed(),
        "ease".dimmed(),
        "grade".dimmed(),
        "modified".dimmed(),
        "dale".dimmed(),
    );
    for (i, s) in stats.iter().enumerate() {
        println!(
            "  {:>4} {:>6} {:>5} {:>6} {:>6} {} {} {} {}",
            i + 1,
            s.num_words,
            s.num_sentences,
            s.num_syllables,
            s.num_not_dale_chall,
            score(s.flesch_reading_ease, 8),
            score(s.flesch_grade_level, 7),
            score(s.flesch_modified, 8),
            score(s.dale_chall_score, 7),
        );
    }
}

fn print_summary(summary: &BatchSummary) {
    println!(
        "\n  {} {} paragraphs, {} words, {} sentences, {} syllables",
        "Totals:".cyan(),
        summary.paragraphs,
        summary.total_words,
        summary.total_sentences,
        summary.total_syllables,
    );
    println!(
        "  {} ease {}, grade {}, modified {}, dale-chall {}",
        "Means:".cyan(),
        mean(summary.mean_flesch_reading_ease),
        mean(summary.mean_flesch_grade_level),
        mean(summary.mean_flesch_modified),
        mean(summary.mean_dale_chall_score),
    );
    if summary.undefined_scores > 0 {
        println!(
            "  {} {} paragraphs have no words or no sentence terminators",
            "Note:".yellow(),
            summary.undefined_scores,
        );
    }
}

/// Right-aligned score cell; undefined values show as `n/a`.
fn score(value: f64, width: usize) -> String {
    if value.is_finite() {
        format!("{value:>width$.2}")
    } else {
        format!("{:>width$}", "n/a").yellow().to_string()
    }
}

fn mean(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}
