use medkb_assistant::store::metadata::{merge, MetadataRecord};

fn pair(relation: &str, value: &str) -> (String, String) {
    (relation.to_string(), value.to_string())
}

#[test]
fn absent_record_starts_fresh() {
    let merged = merge(None, &[pair("IS_SYMPTOM_OF", "Fever")]);
    assert_eq!(merged.relationships, vec!["IS_SYMPTOM_OF"]);
    assert_eq!(merged.associated_conditions, vec!["Fever"]);
}

#[test]
fn sequences_stay_parallel_across_merges() {
    let first = merge(None, &[pair("HAS_SIGN", "Uveitis"), pair("HAS_SYMPTOM", "Fever")]);
    assert_eq!(first.relationships.len(), first.associated_conditions.len());

    let second = merge(Some(&first), &[pair("HAS_COMPLICATION", "Vasculitis")]);
    assert_eq!(second.relationships.len(), second.associated_conditions.len());
    assert_eq!(second.len(), 3);
}

#[test]
fn repeated_merge_does_not_grow() {
    let pairs = vec![pair("HAS_SIGN", "Uveitis"), pair("HAS_SYMPTOM", "Fever")];
    let once = merge(None, &pairs);
    let twice = merge(Some(&once), &pairs);
    assert_eq!(once, twice);
}

#[test]
fn dedup_is_by_value_not_relation() {
    let existing = merge(None, &[pair("HAS_SIGN", "Uveitis")]);
    // Same value under a new relation is still dropped.
    let merged = merge(Some(&existing), &[pair("IS_SIGN_OF", "Uveitis")]);
    assert_eq!(merged.len(), 1);
    // Same relation with a new value is kept.
    let merged = merge(Some(&existing), &[pair("HAS_SIGN", "Fever")]);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged.relationships, vec!["HAS_SIGN", "HAS_SIGN"]);
}

#[test]
fn prior_order_is_preserved() {
    let existing = merge(
        None,
        &[pair("HAS_SIGN", "Uveitis"), pair("HAS_SYMPTOM", "Fever")],
    );
    let merged = merge(Some(&existing), &[pair("TRIGGERS", "Tetany")]);
    assert_eq!(
        merged.associated_conditions,
        vec!["Uveitis", "Fever", "Tetany"]
    );
}

#[test]
fn drifted_lengths_truncate_to_shorter() {
    let drifted = MetadataRecord {
        relationships: vec!["HAS_SIGN".into(), "HAS_SYMPTOM".into(), "TRIGGERS".into()],
        associated_conditions: vec!["Uveitis".into(), "Fever".into()],
    };
    let merged = merge(Some(&drifted), &[]);
    assert_eq!(merged.relationships, vec!["HAS_SIGN", "HAS_SYMPTOM"]);
    assert_eq!(merged.associated_conditions, vec!["Uveitis", "Fever"]);
}

#[test]
fn empty_merge_of_empty_is_empty() {
    let merged = merge(None, &[]);
    assert!(merged.is_empty());
}

#[test]
fn wire_fields_round_trip() {
    let record = merge(
        None,
        &[pair("HAS_SIGN", "Uveitis"), pair("HAS_SYMPTOM", "Fever")],
    );
    let fields = record.to_fields();
    assert_eq!(fields["relationships"], "HAS_SIGN, HAS_SYMPTOM");
    assert_eq!(fields["associated_conditions"], "Uveitis, Fever");
    assert_eq!(MetadataRecord::from_fields(&fields), record);
}

#[test]
fn empty_and_missing_wire_fields_parse_to_empty() {
    let parsed = MetadataRecord::from_fields(&serde_json::json!({
        "relationships": "",
    }));
    assert!(parsed.relationships.is_empty());
    assert!(parsed.associated_conditions.is_empty());
}
