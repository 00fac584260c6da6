//! Enrichment providers: anything that fills template placeholders.
//!
//! Real enrichment happens outside the process by editing the exported
//! document; `RandomEnrichment` stands in for demonstration runs so the full
//! round trip can be exercised without an external provider.
use crate::template::{Associations, Dimensions, LabelWeights, Metadata, TemplateEntry};
use anyhow::Result;
use rand::Rng;
use serde_json::json;

/// A source of enrichment values for template entries.
///
/// Implementations fill the placeholder sections and leave names and event
/// context untouched.
pub trait EnrichmentProvider {
    fn enrich(&self, entries: Vec<TemplateEntry>) -> Result<Vec<TemplateEntry>>;
}

/// Synthetic provider producing random dimension scores and fixed example
/// associations. Demonstration only; values carry no meaning.
#[derive(Debug, Default)]
pub struct RandomEnrichment;

impl EnrichmentProvider for RandomEnrichment {
    fn enrich(&self, entries: Vec<TemplateEntry>) -> Result<Vec<TemplateEntry>> {
        let mut rng = rand::rng();
        Ok(entries
            .into_iter()
            .map(|entry| filled(entry, &mut rng))
            .collect())
    }
}

fn filled(mut entry: TemplateEntry, rng: &mut impl Rng) -> TemplateEntry {
    entry.dimensions = Dimensions {
        energy: Some(random_score(rng)),
        experimental: Some(random_score(rng)),
        melodic: Some(random_score(rng)),
        dark: Some(random_score(rng)),
        organic: Some(random_score(rng)),
        vocal: Some(random_score(rng)),
        depth: Some(random_score(rng)),
        classic: Some(random_score(rng)),
    };
    entry.associations = Associations {
        genres: Some(weights(&[("Techno", 0.8), ("House", 0.4), ("Minimal", 0.3)])),
        scenes: Some(weights(&[("Berlin Techno", 0.9), ("Detroit Techno", 0.3)])),
        moods: Some(weights(&[("Dark", 0.7), ("Hypnotic", 0.8)])),
    };
    entry.metadata = Metadata {
        description: Some(
            "This artist is known for deep, hypnotic techno with industrial influences."
                .to_string(),
        ),
        similar_artists: Some(json!(["Artist1", "Artist2", "Artist3"])),
        soundcloud_url: Some("https://soundcloud.com/example".to_string()),
        spotify_id: Some("spotify:artist:123456789".to_string()),
    };
    entry
}

/// Uniform score in [0.0, 1.0], rounded to two decimals.
fn random_score(rng: &mut impl Rng) -> f64 {
    (rng.random_range(0.0..=1.0_f64) * 100.0).round() / 100.0
}

fn weights(pairs: &[(&str, f64)]) -> LabelWeights {
    pairs
        .iter()
        .map(|(label, weight)| ((*label).to_string(), json!(weight)))
        .collect()
}
