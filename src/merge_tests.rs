use super::{flatten_list, flatten_score, flatten_weights, merge_enrichment};
use crate::aggregate::aggregate_profiles;
use crate::schema::{ArtistProfile, EventRecord};
use crate::template::{export, Associations, Dimensions, LabelWeights, Metadata, TemplateEntry};
use serde_json::json;

fn weights(pairs: &[(&str, f64)]) -> LabelWeights {
    pairs
        .iter()
        .map(|(label, weight)| ((*label).to_string(), json!(weight)))
        .collect()
}

fn profile(name: &str) -> ArtistProfile {
    ArtistProfile {
        name: name.to_string(),
        appearances: 1,
        events: "X".to_string(),
        venues: "V1".to_string(),
        latest_event: "2025-06-01".to_string(),
        ..ArtistProfile::default()
    }
}

fn entry(name: &str) -> TemplateEntry {
    TemplateEntry {
        name: name.to_string(),
        event_context: Default::default(),
        dimensions: Dimensions {
            energy: Some(0.8),
            ..Dimensions::default()
        },
        associations: Associations {
            genres: Some(weights(&[("Techno", 0.8), ("House", 0.4)])),
            ..Associations::default()
        },
        metadata: Metadata {
            description: Some("deep hypnotic techno".to_string()),
            similar_artists: Some(json!(["Artist1", "Artist2", "Artist3"])),
            ..Metadata::default()
        },
    }
}

#[test]
fn weights_flatten_in_map_order() {
    let map = weights(&[("Techno", 0.8), ("House", 0.4), ("Minimal", 0.3)]);
    assert_eq!(flatten_weights(Some(&map)), "Techno:0.8, House:0.4, Minimal:0.3");
}

#[test]
fn null_weights_flatten_to_empty_string() {
    assert_eq!(flatten_weights(None), "");
    assert_eq!(flatten_weights(Some(&LabelWeights::new())), "");
}

#[test]
fn list_metadata_joins_and_scalars_pass_through() {
    assert_eq!(
        flatten_list(Some(&json!(["Artist1", "Artist2"]))),
        "Artist1, Artist2"
    );
    assert_eq!(flatten_list(Some(&json!("Artist1, Artist2"))), "Artist1, Artist2");
    assert_eq!(flatten_list(Some(&json!(null))), "");
    assert_eq!(flatten_list(None), "");
}

#[test]
fn scores_render_verbatim_including_out_of_range() {
    assert_eq!(flatten_score(Some(0.8)), "0.8");
    assert_eq!(flatten_score(Some(1.7)), "1.7");
    assert_eq!(flatten_score(Some(-0.25)), "-0.25");
    assert_eq!(flatten_score(None), "");
}

#[test]
fn matching_rows_take_enrichment_values() {
    let mut profiles = vec![profile("A"), profile("B")];
    let matched = merge_enrichment(&mut profiles, &[entry("B")]);
    assert_eq!(matched, 1);

    let b = &profiles[1];
    assert_eq!(b.energy, "0.8");
    assert_eq!(b.genres, "Techno:0.8, House:0.4");
    assert_eq!(b.description, "deep hypnotic techno");
    assert_eq!(b.similar_artists, "Artist1, Artist2, Artist3");
    // Null sections of a matching entry flatten to unset.
    assert_eq!(b.melodic, "");
    assert_eq!(b.scenes, "");
    assert_eq!(b.soundcloud_url, "");
}

#[test]
fn unmatched_rows_are_untouched() {
    let mut profiles = vec![profile("A"), profile("B")];
    let before = profiles[0].clone();
    merge_enrichment(&mut profiles, &[entry("B")]);
    assert_eq!(profiles[0], before);
    assert_eq!(profiles[0].genres, "");
}

#[test]
fn entries_for_unknown_names_are_ignored() {
    let mut profiles = vec![profile("A")];
    let matched = merge_enrichment(&mut profiles, &[entry("Nobody")]);
    assert_eq!(matched, 0);
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0], profile("A"));
}

#[test]
fn merge_never_touches_event_context() {
    let mut profiles = vec![profile("B")];
    let mut enriched = entry("B");
    enriched.event_context.events = "tampered".to_string();
    merge_enrichment(&mut profiles, &[enriched]);
    assert_eq!(profiles[0].events, "X");
    assert_eq!(profiles[0].venues, "V1");
    assert_eq!(profiles[0].appearances, 1);
}

#[test]
fn merging_twice_equals_merging_once() {
    let entries = vec![entry("B")];
    let mut once = vec![profile("A"), profile("B")];
    merge_enrichment(&mut once, &entries);
    let mut twice = once.clone();
    merge_enrichment(&mut twice, &entries);
    assert_eq!(once, twice);
}

#[test]
fn unmodified_template_round_trips_to_the_original_profiles() {
    let records = vec![
        EventRecord {
            event_name: Some("X".to_string()),
            venue: Some("V1".to_string()),
            date: Some("2025-06-01".to_string()),
            event_url: Some("/events/1".to_string()),
            artists: Some("A, B".to_string()),
        },
        EventRecord {
            event_name: Some("Y".to_string()),
            venue: Some("V2".to_string()),
            date: Some("2025-06-08".to_string()),
            event_url: None,
            artists: Some("B".to_string()),
        },
    ];
    let original = aggregate_profiles(&records);
    let template = export(&original);

    let mut merged = original.clone();
    merge_enrichment(&mut merged, &template);
    assert_eq!(merged, original);
}
