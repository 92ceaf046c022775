//! Schema command: JSON schema of the `stats --json` output.

use clap::Args;
use tracing::{debug, instrument};

use super::stats::StatsReport;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
    /// Describe only the summary object (`stats --summary --json`).
    #[arg(long)]
    pub summary: bool,
}

fn schema_json(summary: bool) -> serde_json::Result<String> {
    if summary {
        serde_json::to_string_pretty(&schemars::schema_for!(lexstat_core::BatchSummary))
    } else {
        serde_json::to_string_pretty(&schemars::schema_for!(StatsReport))
    }
}

/// Print the JSON schema. Always JSON, regardless of `--json`.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(args: SchemaArgs) -> anyhow::Result<()> {
    debug!(summary = args.summary, "executing schema command");
    println!("{}", schema_json(args.summary)?);
    Ok(())
}
