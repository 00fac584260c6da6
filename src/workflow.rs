//! Orchestration for the batch pipeline commands.
//!
//! Each step fully consumes its input and writes exactly one output
//! artifact; paths arrive fully resolved from the caller so this layer
//! stays free of ambient state.
use crate::aggregate;
use crate::merge;
use crate::provider::{EnrichmentProvider, RandomEnrichment};
use crate::store;
use crate::template;
use anyhow::{Context, Result};
use std::path::Path;

/// Aggregate an event log into artist profile rows.
///
/// Zero extracted artists is a valid (empty) outcome and still writes the
/// output; the caller decides whether to treat it as a no-op.
pub fn run_aggregate(input: &Path, out: &Path) -> Result<()> {
    let records = store::load_events(input)
        .with_context(|| format!("load events from {}", input.display()))?;
    let profiles = aggregate::aggregate_profiles(&records);
    if profiles.is_empty() {
        tracing::warn!(input = %input.display(), "no artists extracted from event log");
    }
    store::save_profiles(&profiles, out)
        .with_context(|| format!("write profiles to {}", out.display()))?;
    tracing::info!(
        events = records.len(),
        artists = profiles.len(),
        out = %out.display(),
        "aggregated event log"
    );
    Ok(())
}

/// Export profiles as a nested enrichment template.
pub fn run_template(input: &Path, out: &Path) -> Result<()> {
    let profiles = store::load_profiles(input)
        .with_context(|| format!("load profiles from {}", input.display()))?;
    let entries = template::export(&profiles);
    store::save_template(&entries, out)
        .with_context(|| format!("write template to {}", out.display()))?;
    tracing::info!(artists = entries.len(), out = %out.display(), "exported enrichment template");
    Ok(())
}

/// Merge an externally enriched document back into the profile table.
pub fn run_import(input: &Path, enriched: &Path, out: &Path) -> Result<()> {
    let mut profiles = store::load_profiles(input)
        .with_context(|| format!("load profiles from {}", input.display()))?;
    let entries = store::load_template(enriched)
        .with_context(|| format!("load enrichment document from {}", enriched.display()))?;
    let matched = merge::merge_enrichment(&mut profiles, &entries);
    store::save_profiles(&profiles, out)
        .with_context(|| format!("write merged profiles to {}", out.display()))?;
    tracing::info!(
        artists = profiles.len(),
        entries = entries.len(),
        matched,
        out = %out.display(),
        "merged enrichment document"
    );
    Ok(())
}

/// Round-trip profiles through a provider in memory: export the template,
/// enrich it, merge the result, write the merged table.
pub fn run_enriched(provider: &dyn EnrichmentProvider, input: &Path, out: &Path) -> Result<()> {
    let mut profiles = store::load_profiles(input)
        .with_context(|| format!("load profiles from {}", input.display()))?;
    let entries = provider
        .enrich(template::export(&profiles))
        .context("run enrichment provider")?;
    let matched = merge::merge_enrichment(&mut profiles, &entries);
    store::save_profiles(&profiles, out)
        .with_context(|| format!("write enriched profiles to {}", out.display()))?;
    tracing::info!(
        artists = profiles.len(),
        matched,
        out = %out.display(),
        "enriched profiles in-process"
    );
    Ok(())
}

/// Fill placeholders with synthetic random values for demonstration.
pub fn run_demo(input: &Path, out: &Path) -> Result<()> {
    run_enriched(&RandomEnrichment, input, out)
}
