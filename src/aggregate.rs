//! Event-log aggregation into unique artist profiles.
//!
//! Grouping is exact post-trim string equality in first-seen order; this
//! module owns the appearance-counting invariant.
use crate::schema::{ArtistProfile, EventRecord, RA_ORIGIN, UNKNOWN};
use std::collections::HashMap;

/// Accumulated event context for one artist before flattening to a row.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistAggregate {
    pub name: String,
    pub resident_advisor_url: String,
    pub appearances: u32,
    pub event_names: Vec<String>,
    pub venues: Vec<String>,
    pub latest_event: String,
}

impl ArtistAggregate {
    fn new(name: String, first_event_date: String) -> Self {
        Self {
            name,
            resident_advisor_url: String::new(),
            appearances: 0,
            event_names: Vec::new(),
            venues: Vec::new(),
            latest_event: first_event_date,
        }
    }

    /// Flatten to a tabular profile row with unset enrichment placeholders.
    pub fn into_profile(self) -> ArtistProfile {
        ArtistProfile {
            name: self.name,
            resident_advisor_url: self.resident_advisor_url,
            appearances: self.appearances,
            events: self.event_names.join(", "),
            venues: self.venues.join(", "),
            latest_event: self.latest_event,
            ..ArtistProfile::default()
        }
    }
}

/// Split a raw artist field into individual names.
///
/// One layer of surrounding quotes is stripped before splitting on commas;
/// tokens are trimmed and empty tokens dropped.
pub fn split_artists(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed);
    unquoted
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Collapse event records into one aggregate per distinct artist name.
///
/// Records with an empty or missing artist field contribute no appearances.
/// The returned order is first-seen.
pub fn aggregate_events(records: &[EventRecord]) -> Vec<ArtistAggregate> {
    let mut aggregates: Vec<ArtistAggregate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(raw_artists) = record.artists.as_deref() else {
            continue;
        };

        let event_name = text_or_unknown(record.event_name.as_deref());
        let venue = text_or_unknown(record.venue.as_deref());
        let date = text_or_unknown(record.date.as_deref());
        let event_url = record
            .event_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty());

        for name in split_artists(raw_artists) {
            let slot = *index.entry(name.clone()).or_insert_with(|| {
                aggregates.push(ArtistAggregate::new(name, date.clone()));
                aggregates.len() - 1
            });
            let entry = &mut aggregates[slot];
            entry.appearances += 1;
            entry.event_names.push(event_name.clone());
            if !entry.venues.contains(&venue) {
                entry.venues.push(venue.clone());
            }
            if entry.resident_advisor_url.is_empty() {
                if let Some(url) = event_url {
                    entry.resident_advisor_url = format!("{RA_ORIGIN}{url}");
                }
            }
        }
    }

    aggregates
}

/// Aggregate and flatten in one pass, producing profile rows.
pub fn aggregate_profiles(records: &[EventRecord]) -> Vec<ArtistProfile> {
    aggregate_events(records)
        .into_iter()
        .map(ArtistAggregate::into_profile)
        .collect()
}

fn text_or_unknown(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
