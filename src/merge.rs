//! Name-keyed merge of enrichment documents into profile rows.
//!
//! This module owns the nested-to-tabular flatten. Event-context fields are
//! never touched; rows without a matching entry pass through unchanged and
//! entries naming unknown artists are ignored. Provider output is reshaped,
//! not validated: out-of-range scores are copied verbatim.
use crate::schema::ArtistProfile;
use crate::template::{LabelWeights, TemplateEntry};
use serde_json::Value;
use std::collections::HashMap;

/// Apply enrichment entries to profile rows by exact name match.
///
/// Each row takes values from at most one entry. Returns the number of rows
/// that matched an entry.
pub fn merge_enrichment(profiles: &mut [ArtistProfile], entries: &[TemplateEntry]) -> usize {
    let by_name: HashMap<&str, &TemplateEntry> = entries
        .iter()
        .map(|entry| (entry.name.as_str(), entry))
        .collect();

    let mut matched = 0;
    for profile in profiles.iter_mut() {
        if let Some(entry) = by_name.get(profile.name.as_str()) {
            apply_entry(profile, entry);
            matched += 1;
        }
    }
    matched
}

fn apply_entry(profile: &mut ArtistProfile, entry: &TemplateEntry) {
    let dimensions = &entry.dimensions;
    profile.energy = flatten_score(dimensions.energy);
    profile.experimental = flatten_score(dimensions.experimental);
    profile.melodic = flatten_score(dimensions.melodic);
    profile.dark = flatten_score(dimensions.dark);
    profile.organic = flatten_score(dimensions.organic);
    profile.vocal = flatten_score(dimensions.vocal);
    profile.depth = flatten_score(dimensions.depth);
    profile.classic = flatten_score(dimensions.classic);

    let associations = &entry.associations;
    profile.genres = flatten_weights(associations.genres.as_ref());
    profile.scenes = flatten_weights(associations.scenes.as_ref());
    profile.moods = flatten_weights(associations.moods.as_ref());

    let metadata = &entry.metadata;
    profile.description = metadata.description.clone().unwrap_or_default();
    profile.similar_artists = flatten_list(metadata.similar_artists.as_ref());
    profile.soundcloud_url = metadata.soundcloud_url.clone().unwrap_or_default();
    profile.spotify_id = metadata.spotify_id.clone().unwrap_or_default();
}

/// Render a nullable dimension score verbatim; unset scores flatten to "".
pub fn flatten_score(score: Option<f64>) -> String {
    score.map(|value| value.to_string()).unwrap_or_default()
}

/// Flatten a weighted label map to `label:weight` pairs joined by `", "`.
///
/// The map's iteration order is preserved; a null map flattens to the empty
/// string, never the literal text "null".
pub fn flatten_weights(weights: Option<&LabelWeights>) -> String {
    let Some(weights) = weights else {
        return String::new();
    };
    weights
        .iter()
        .map(|(label, weight)| format!("{label}:{}", render_scalar(weight)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flatten list-valued metadata by joining with `", "`; scalars pass
/// through and null flattens to the empty string.
pub fn flatten_list(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(render_scalar)
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => render_scalar(other),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
