use medkb_assistant::nlp::llm::{parse_markup, sanitize_content, LlmError};

const BEHCET: &str = r#"{
  "markup": [
    {
      "id": "Behcet",
      "values": {
        "name": "Behcet",
        "synonyms": ["Behcet disease"],
        "details": "A condition associated with painful genital ulcers and uveitis.",
        "relationship": ["HAS_SYMPTOM", "HAS_SYMPTOM"],
        "target": ["Genital Ulcers", "Uveitis"]
      }
    },
    {
      "id": "Uveitis",
      "values": {
        "name": "Uveitis",
        "details": "Inflammation of the uvea.",
        "relationship": "IS_SYMPTOM_OF",
        "source": "Behcet"
      }
    }
  ]
}"#;

#[test]
fn parses_markup_records() {
    let records = parse_markup(BEHCET).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "Behcet");
    assert_eq!(records[0].values.target, vec!["Genital Ulcers", "Uveitis"]);
    // A scalar relationship field still parses as a one-element list.
    assert_eq!(records[1].values.relationship, vec!["IS_SYMPTOM_OF"]);
    assert_eq!(records[1].values.source.as_deref(), Some("Behcet"));
    assert!(records[1].values.synonyms.is_empty());
}

#[test]
fn strips_code_fences_before_parsing() {
    let fenced = format!("```json\n{BEHCET}\n```");
    let records = parse_markup(&fenced).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn unescapes_apostrophes() {
    assert_eq!(sanitize_content(r"Crohn\'s"), "Crohn's");
}

#[test]
fn missing_markup_key_is_an_error() {
    let err = parse_markup(r#"{"entities": []}"#).unwrap_err();
    assert!(matches!(err, LlmError::MissingMarkup));
}

#[test]
fn empty_content_is_an_error() {
    assert!(matches!(parse_markup("   "), Err(LlmError::EmptyResponse)));
}

#[test]
fn invalid_json_is_an_error() {
    assert!(matches!(parse_markup("not json"), Err(LlmError::Malformed(_))));
}

#[test]
fn entries_without_id_or_values_are_skipped() {
    let content = r#"{"markup": [
        {"values": {"name": "no id"}},
        {"id": "no values"},
        {"id": "Fever", "values": {"name": "Fever"}}
    ]}"#;
    let records = parse_markup(content).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "Fever");
}
