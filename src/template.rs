//! Nested enrichment-template document exchanged with external providers.
//!
//! Every enrichable key is explicitly present and null in the export so a
//! provider can enumerate the full schema without prior knowledge of it.
//! Entries are name-unique and name-addressable; the name is immutable
//! across the round trip.
use crate::schema::ArtistProfile;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Weighted label set, e.g. `{"Techno": 0.8, "House": 0.4}`.
///
/// `serde_json`'s order-preserving map keeps the provider's label order
/// intact for the merge-side flatten.
pub type LabelWeights = Map<String, Value>;

/// One artist's enrichable document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub name: String,
    #[serde(default)]
    pub event_context: EventContext,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub associations: Associations,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Read-only event context mirrored from the aggregate; never merged back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventContext {
    pub events: String,
    pub venues: String,
    pub appearances: u32,
    pub latest_event: String,
    pub resident_advisor_url: String,
}

/// Nullable dimension scores on a 0.0-1.0 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub energy: Option<f64>,
    pub experimental: Option<f64>,
    pub melodic: Option<f64>,
    pub dark: Option<f64>,
    pub organic: Option<f64>,
    pub vocal: Option<f64>,
    pub depth: Option<f64>,
    pub classic: Option<f64>,
}

/// Nullable weighted label sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Associations {
    pub genres: Option<LabelWeights>,
    pub scenes: Option<LabelWeights>,
    pub moods: Option<LabelWeights>,
}

/// Nullable descriptive metadata. `similar_artists` stays a raw value so
/// providers may return either a list of names or a pre-joined string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub description: Option<String>,
    pub similar_artists: Option<Value>,
    pub soundcloud_url: Option<String>,
    pub spotify_id: Option<String>,
}

/// Build one template entry per profile, preserving input order.
///
/// Profiles are not mutated; placeholder sections serialize as explicit
/// nulls rather than being omitted.
pub fn export(profiles: &[ArtistProfile]) -> Vec<TemplateEntry> {
    profiles.iter().map(entry_for).collect()
}

fn entry_for(profile: &ArtistProfile) -> TemplateEntry {
    TemplateEntry {
        name: profile.name.clone(),
        event_context: EventContext {
            events: profile.events.clone(),
            venues: profile.venues.clone(),
            appearances: profile.appearances,
            latest_event: profile.latest_event.clone(),
            resident_advisor_url: profile.resident_advisor_url.clone(),
        },
        dimensions: Dimensions::default(),
        associations: Associations::default(),
        metadata: Metadata::default(),
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
