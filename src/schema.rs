//! Record types and field names shared across the pipeline.
//!
//! Centralizing the tabular schema here keeps column handling consistent
//! between the aggregator, the template exporter, and the merger.
use serde::{Deserialize, Serialize};

/// Absolute origin prefixed onto event-relative URLs.
pub const RA_ORIGIN: &str = "https://ra.co";

/// Column carrying the comma-separated artist list in the event log.
pub const ARTISTS_COLUMN: &str = "Artists";

/// Placeholder for event fields absent from the source row.
pub const UNKNOWN: &str = "Unknown";

/// One row of the upstream event-log export.
///
/// Header names follow the event scraper's column titles. All fields are
/// optional at the parsing layer; normalization happens in the aggregator.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "Event name", default)]
    pub event_name: Option<String>,
    #[serde(rename = "Venue", default)]
    pub venue: Option<String>,
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "Event URL", default)]
    pub event_url: Option<String>,
    #[serde(rename = "Artists", default)]
    pub artists: Option<String>,
}

/// One row of the artist-profiles table.
///
/// Event-context columns are owned by the aggregator; the remaining columns
/// are enrichment placeholders that stay empty until a merge overwrites them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub name: String,
    pub resident_advisor_url: String,
    pub appearances: u32,
    pub events: String,
    pub venues: String,
    pub latest_event: String,

    // Dimensions, 0.0-1.0 scale once enriched.
    #[serde(default)]
    pub energy: String,
    #[serde(default)]
    pub experimental: String,
    #[serde(default)]
    pub melodic: String,
    #[serde(default)]
    pub dark: String,
    #[serde(default)]
    pub organic: String,
    #[serde(default)]
    pub vocal: String,
    #[serde(default)]
    pub depth: String,
    #[serde(default)]
    pub classic: String,

    // Weighted label sets, e.g. "Techno:0.8, House:0.4".
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub scenes: String,
    #[serde(default)]
    pub moods: String,

    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub similar_artists: String,
    #[serde(default)]
    pub soundcloud_url: String,
    #[serde(default)]
    pub spotify_id: String,
}
