//! CLI argument parsing for the profile pipeline.
//!
//! The CLI is intentionally thin: default-input resolution and output
//! naming happen in the dispatch layer, so the workflow entry points can
//! stay policy-free and reusable.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint for the enrichment pipeline.
#[derive(Parser, Debug)]
#[command(
    name = "raprof",
    version,
    about = "Artist profile aggregation and enrichment pipeline",
    after_help = "Commands:\n  aggregate  Collapse an event log into unique artist profiles\n  template   Export profiles as a JSON template for external enrichment\n  import     Merge an enriched JSON document back into the profiles\n  demo       Fill placeholders with synthetic values end to end\n\nExamples:\n  raprof aggregate --data-dir data\n  raprof template --data-dir data\n  raprof import --data-dir data --enriched data/enrichment_template_2026-08-06.json\n  raprof demo --data-dir data",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level pipeline commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Aggregate(AggregateArgs),
    Template(TemplateArgs),
    Import(ImportArgs),
    Demo(DemoArgs),
}

/// Aggregate command inputs.
#[derive(Parser, Debug)]
#[command(about = "Collapse an event log into unique artist profiles")]
pub struct AggregateArgs {
    /// Working data directory for default input/output resolution
    #[arg(long, value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Event-log CSV to aggregate (default: newest events*.csv in the data dir)
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output path for the profile table (default: date-stamped in the data dir)
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Template command inputs.
#[derive(Parser, Debug)]
#[command(about = "Export profiles as a JSON template for external enrichment")]
pub struct TemplateArgs {
    /// Working data directory for default input/output resolution
    #[arg(long, value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Profile CSV to export (default: newest artist_profiles*.csv in the data dir)
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output path for the template JSON (default: date-stamped in the data dir)
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Import command inputs.
#[derive(Parser, Debug)]
#[command(about = "Merge an enriched JSON document back into the profiles")]
pub struct ImportArgs {
    /// Working data directory for default input/output resolution
    #[arg(long, value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Profile CSV to merge into (default: newest artist_profiles*.csv in the data dir)
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Externally enriched JSON document
    #[arg(long, value_name = "PATH")]
    pub enriched: PathBuf,

    /// Output path for the merged table (default: date-stamped in the data dir)
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Demo command inputs.
#[derive(Parser, Debug)]
#[command(about = "Fill placeholders with synthetic random values")]
pub struct DemoArgs {
    /// Working data directory for default input/output resolution
    #[arg(long, value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Profile CSV to enrich (default: newest artist_profiles*.csv in the data dir)
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output path for the demo table (default: date-stamped in the data dir)
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}
