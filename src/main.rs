use anyhow::{anyhow, Result};
use clap::Parser;
use ra_profiles::cli::{AggregateArgs, Command, DemoArgs, ImportArgs, RootArgs, TemplateArgs};
use ra_profiles::{paths, workflow};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();
    let args = RootArgs::parse();
    match args.command {
        Command::Aggregate(args) => cmd_aggregate(args),
        Command::Template(args) => cmd_template(args),
        Command::Import(args) => cmd_import(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}

fn cmd_aggregate(args: AggregateArgs) -> Result<()> {
    let input = resolve_input(args.input, &args.data_dir, paths::EVENTS_PREFIX, "csv")?;
    let out = args
        .out
        .unwrap_or_else(|| paths::profiles_output(&args.data_dir, today()));
    workflow::run_aggregate(&input, &out)
}

fn cmd_template(args: TemplateArgs) -> Result<()> {
    let input = resolve_input(args.input, &args.data_dir, paths::PROFILES_PREFIX, "csv")?;
    let out = args
        .out
        .unwrap_or_else(|| paths::template_output(&args.data_dir, today()));
    workflow::run_template(&input, &out)
}

fn cmd_import(args: ImportArgs) -> Result<()> {
    let input = resolve_input(args.input, &args.data_dir, paths::PROFILES_PREFIX, "csv")?;
    let out = args
        .out
        .unwrap_or_else(|| paths::merged_output(&args.data_dir, today()));
    workflow::run_import(&input, &args.enriched, &out)
}

fn cmd_demo(args: DemoArgs) -> Result<()> {
    let input = resolve_input(args.input, &args.data_dir, paths::PROFILES_PREFIX, "csv")?;
    let out = args
        .out
        .unwrap_or_else(|| paths::demo_output(&args.data_dir, today()));
    workflow::run_demo(&input, &out)
}

/// Resolve an input path: explicit wins, otherwise pick the newest matching
/// file in the data directory.
fn resolve_input(
    explicit: Option<PathBuf>,
    data_dir: &Path,
    prefix: &str,
    ext: &str,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    paths::newest_with_prefix(data_dir, prefix, ext)?.ok_or_else(|| {
        anyhow!(
            "no {prefix}*.{ext} files in {}; pass --input explicitly",
            data_dir.display()
        )
    })
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
