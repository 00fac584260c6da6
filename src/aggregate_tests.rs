use super::{aggregate_events, aggregate_profiles, split_artists};
use crate::schema::EventRecord;

fn record(artists: Option<&str>, event: &str, venue: &str, date: &str, url: &str) -> EventRecord {
    EventRecord {
        event_name: Some(event.to_string()),
        venue: Some(venue.to_string()),
        date: Some(date.to_string()),
        event_url: Some(url.to_string()),
        artists: artists.map(ToString::to_string),
    }
}

#[test]
fn split_trims_and_drops_empty_tokens() {
    assert_eq!(split_artists("A, B"), vec!["A", "B"]);
    assert_eq!(split_artists(" A ,  , B ,"), vec!["A", "B"]);
    assert_eq!(split_artists(""), Vec::<String>::new());
    assert_eq!(split_artists(" , ,"), Vec::<String>::new());
}

#[test]
fn split_strips_one_layer_of_surrounding_quotes() {
    assert_eq!(split_artists("\"A, B\""), vec!["A", "B"]);
    // Only a balanced surrounding pair is removed; the inner layer stays.
    assert_eq!(split_artists("\"\"A\"\""), vec!["\"A\""]);
    assert_eq!(split_artists("\"A"), vec!["\"A"]);
}

#[test]
fn counts_appearances_and_dedupes_venues() {
    let records = vec![
        record(Some("A, B"), "X", "V1", "2025-06-01", ""),
        record(Some("B"), "Y", "V2", "2025-06-08", ""),
    ];
    let aggregates = aggregate_events(&records);
    assert_eq!(aggregates.len(), 2);

    let a = &aggregates[0];
    assert_eq!(a.name, "A");
    assert_eq!(a.appearances, 1);
    assert_eq!(a.event_names, vec!["X"]);
    assert_eq!(a.venues, vec!["V1"]);

    let b = &aggregates[1];
    assert_eq!(b.name, "B");
    assert_eq!(b.appearances, 2);
    assert_eq!(b.event_names, vec!["X", "Y"]);
    assert_eq!(b.venues, vec!["V1", "V2"]);
}

#[test]
fn event_names_keep_duplicates_and_order() {
    let records = vec![
        record(Some("A"), "X", "V1", "2025-06-01", ""),
        record(Some("A"), "X", "V1", "2025-06-02", ""),
    ];
    let aggregates = aggregate_events(&records);
    assert_eq!(aggregates[0].event_names, vec!["X", "X"]);
    assert_eq!(aggregates[0].venues, vec!["V1"]);
}

#[test]
fn grouping_is_case_sensitive() {
    let records = vec![record(Some("A, a"), "X", "V1", "2025-06-01", "")];
    let aggregates = aggregate_events(&records);
    assert_eq!(aggregates.len(), 2);
    assert_eq!(aggregates[0].name, "A");
    assert_eq!(aggregates[1].name, "a");
}

#[test]
fn url_is_first_non_empty_qualified_with_origin() {
    let records = vec![
        record(Some("A"), "X", "V1", "2025-06-01", ""),
        record(Some("A"), "Y", "V2", "2025-06-08", "/events/123"),
        record(Some("A"), "Z", "V3", "2025-06-15", "/events/456"),
    ];
    let aggregates = aggregate_events(&records);
    assert_eq!(aggregates[0].resident_advisor_url, "https://ra.co/events/123");
}

#[test]
fn url_stays_empty_when_no_event_carries_one() {
    let records = vec![record(Some("A"), "X", "V1", "2025-06-01", "")];
    assert_eq!(aggregate_events(&records)[0].resident_advisor_url, "");
}

#[test]
fn latest_event_is_first_seen_not_chronological() {
    // The first-seen row's date is kept even when a later row is newer.
    let records = vec![
        record(Some("A"), "X", "V1", "2025-06-01", ""),
        record(Some("A"), "Y", "V2", "2025-07-01", ""),
    ];
    assert_eq!(aggregate_events(&records)[0].latest_event, "2025-06-01");
}

#[test]
fn rows_without_artists_contribute_nothing() {
    let records = vec![
        record(None, "X", "V1", "2025-06-01", ""),
        record(Some(""), "Y", "V2", "2025-06-08", ""),
        record(Some(" , "), "Z", "V3", "2025-06-15", ""),
    ];
    assert!(aggregate_events(&records).is_empty());
}

#[test]
fn missing_event_fields_default_to_unknown() {
    let records = vec![EventRecord {
        event_name: None,
        venue: Some("  ".to_string()),
        date: None,
        event_url: None,
        artists: Some("A".to_string()),
    }];
    let aggregates = aggregate_events(&records);
    assert_eq!(aggregates[0].event_names, vec!["Unknown"]);
    assert_eq!(aggregates[0].venues, vec!["Unknown"]);
    assert_eq!(aggregates[0].latest_event, "Unknown");
}

#[test]
fn profiles_flatten_context_and_leave_placeholders_unset() {
    let records = vec![
        record(Some("A, B"), "X", "V1", "2025-06-01", "/events/1"),
        record(Some("B"), "Y", "V2", "2025-06-08", ""),
    ];
    let profiles = aggregate_profiles(&records);
    let b = &profiles[1];
    assert_eq!(b.name, "B");
    assert_eq!(b.appearances, 2);
    assert_eq!(b.events, "X, Y");
    assert_eq!(b.venues, "V1, V2");
    assert_eq!(b.resident_advisor_url, "https://ra.co/events/1");
    assert_eq!(b.energy, "");
    assert_eq!(b.genres, "");
    assert_eq!(b.description, "");
}
