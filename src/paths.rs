//! Data-directory naming conventions and input resolution.
//!
//! The pick-newest policy lives here so workflow entry points can take
//! explicit paths; callers opt into the policy instead of inheriting it.
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// File-name prefix of raw event-log exports.
pub const EVENTS_PREFIX: &str = "events";
/// File-name prefix of aggregated profile tables.
pub const PROFILES_PREFIX: &str = "artist_profiles";

/// Date-stamped output path for aggregated profiles.
pub fn profiles_output(dir: &Path, date: NaiveDate) -> PathBuf {
    stamped(dir, PROFILES_PREFIX, "csv", date)
}

/// Date-stamped output path for the enrichment template.
pub fn template_output(dir: &Path, date: NaiveDate) -> PathBuf {
    stamped(dir, "enrichment_template", "json", date)
}

/// Date-stamped output path for merged profiles.
pub fn merged_output(dir: &Path, date: NaiveDate) -> PathBuf {
    stamped(dir, "enriched_artists", "csv", date)
}

/// Date-stamped output path for demo-enriched profiles.
pub fn demo_output(dir: &Path, date: NaiveDate) -> PathBuf {
    stamped(dir, "demo_enriched_artists", "csv", date)
}

fn stamped(dir: &Path, prefix: &str, ext: &str, date: NaiveDate) -> PathBuf {
    dir.join(format!("{prefix}_{}.{ext}", date.format("%Y-%m-%d")))
}

/// Most recently modified file in `dir` whose name starts with `prefix` and
/// carries the `ext` extension (without the dot). Returns `None` when
/// nothing matches.
pub fn newest_with_prefix(dir: &Path, prefix: &str, ext: &str) -> Result<Option<PathBuf>> {
    let entries = fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))?;
    let suffix = format!(".{ext}");
    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if !name.starts_with(prefix) || !name.ends_with(&suffix) {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .with_context(|| format!("stat {}", path.display()))?;
        let newer = match &newest {
            Some((best, _)) => modified > *best,
            None => true,
        };
        if newer {
            newest = Some((modified, path));
        }
    }
    Ok(newest.map(|(_, path)| path))
}
