use medkb_assistant::nlp::spans::EntitySpan;
use medkb_assistant::session::{choose_id, combined_text, Selection};
use uuid::Uuid;

fn span(entity_type: &str, text: &str) -> EntitySpan {
    EntitySpan {
        entity_type: entity_type.to_string(),
        text: text.to_string(),
    }
}

#[test]
fn toggle_adds_then_removes() {
    let mut selection = Selection::default();
    let fever = span("SIGN_SYMPTOM", "fever");

    selection.toggle(fever.clone());
    assert!(selection.contains(&fever));

    selection.toggle(fever.clone());
    assert!(!selection.contains(&fever));
    assert!(selection.is_empty());
}

#[test]
fn combined_text_joins_with_commas() {
    let spans = vec![span("DISEASE_DISORDER", "Behcet"), span("SIGN_SYMPTOM", "uveitis")];
    assert_eq!(combined_text(&spans), "Behcet, uveitis");
}

#[test]
fn id_comes_from_first_disease_disorder_span() {
    let spans = vec![
        span("SIGN_SYMPTOM", "fever"),
        span("DISEASE_DISORDER", "Behcet"),
        span("DISEASE_DISORDER", "Sarcoidosis"),
    ];
    assert_eq!(choose_id(&spans), "Behcet");
}

#[test]
fn id_falls_back_to_uuid_without_disease_span() {
    let spans = vec![span("SIGN_SYMPTOM", "fever")];
    let id = choose_id(&spans);
    assert!(Uuid::parse_str(&id).is_ok());
}
