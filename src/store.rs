//! Storage collaborator: delimited tabular files and nested JSON documents.
//!
//! Writes are staged to a temporary sibling and renamed into place so an
//! on-disk artifact is always either absent or fully consistent.
use crate::error::PipelineError;
use crate::schema::{ArtistProfile, EventRecord, ARTISTS_COLUMN};
use crate::template::TemplateEntry;
use std::fmt::Display;
use std::fs;
use std::path::Path;

/// Load event records, verifying the artist column is present.
///
/// A missing artist column is a configuration error, not a parse error:
/// without it no row can contribute appearances and the run must abort.
pub fn load_events(path: &Path) -> Result<Vec<EventRecord>, PipelineError> {
    ensure_exists(path)?;
    let mut reader = csv::Reader::from_path(path).map_err(|err| parse_error(path, err))?;
    let headers = reader
        .headers()
        .map_err(|err| parse_error(path, err))?
        .clone();
    if !headers.iter().any(|header| header == ARTISTS_COLUMN) {
        return Err(PipelineError::Configuration {
            column: ARTISTS_COLUMN.to_string(),
            path: path.to_path_buf(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        });
    }
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: EventRecord = row.map_err(|err| parse_error(path, err))?;
        records.push(record);
    }
    Ok(records)
}

/// Load artist profile rows from a tabular file.
pub fn load_profiles(path: &Path) -> Result<Vec<ArtistProfile>, PipelineError> {
    ensure_exists(path)?;
    let mut reader = csv::Reader::from_path(path).map_err(|err| parse_error(path, err))?;
    let mut profiles = Vec::new();
    for row in reader.deserialize() {
        let profile: ArtistProfile = row.map_err(|err| parse_error(path, err))?;
        profiles.push(profile);
    }
    Ok(profiles)
}

/// Save profile rows, overwriting the destination.
pub fn save_profiles(profiles: &[ArtistProfile], path: &Path) -> Result<(), PipelineError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for profile in profiles {
        writer
            .serialize(profile)
            .map_err(|err| parse_error(path, err))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| parse_error(path, err))?;
    write_atomic(path, &bytes)
}

/// Load an enrichment document (array of template entries).
pub fn load_template(path: &Path) -> Result<Vec<TemplateEntry>, PipelineError> {
    ensure_exists(path)?;
    let bytes = fs::read(path)?;
    serde_json::from_slice(&bytes).map_err(|err| parse_error(path, err))
}

/// Save an enrichment document as pretty-printed JSON.
pub fn save_template(entries: &[TemplateEntry], path: &Path) -> Result<(), PipelineError> {
    let bytes = serde_json::to_vec_pretty(entries).map_err(|err| parse_error(path, err))?;
    write_atomic(path, &bytes)
}

/// Stage bytes to a temporary sibling, then rename into place.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("staged");
    let tmp_path = path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!(".{file_name}.tmp"));
    fs::write(&tmp_path, bytes)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn ensure_exists(path: &Path) -> Result<(), PipelineError> {
    if path.exists() {
        Ok(())
    } else {
        Err(PipelineError::NotFound(path.to_path_buf()))
    }
}

fn parse_error(path: &Path, err: impl Display) -> PipelineError {
    PipelineError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
