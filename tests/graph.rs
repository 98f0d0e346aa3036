use medkb_assistant::graph::build;
use medkb_assistant::store::Match;

fn hit(id: &str, relationships: &str, conditions: &str) -> Match {
    Match {
        id: id.to_string(),
        score: 0.9,
        metadata: Some(serde_json::json!({
            "relationships": relationships,
            "associated_conditions": conditions,
        })),
    }
}

#[test]
fn match_ids_are_highlighted_nodes() {
    let doc = build(&[hit("Behcet", "HAS_SYMPTOM", "Uveitis")]);
    let behcet = doc.nodes.iter().find(|n| n.id == "Behcet").unwrap();
    assert_eq!(behcet.size, 30);
    let uveitis = doc.nodes.iter().find(|n| n.id == "Uveitis").unwrap();
    assert_eq!(uveitis.size, 10);
}

#[test]
fn relationships_become_edges_from_the_match() {
    let doc = build(&[hit("Behcet", "HAS_SYMPTOM, HAS_SIGN", "Uveitis, Fever")]);
    let titles: Vec<&str> = doc
        .edges
        .iter()
        .filter(|e| e.source == "Behcet")
        .map(|e| e.title.as_str())
        .collect();
    assert!(titles.contains(&"HAS_SYMPTOM"));
    assert!(titles.contains(&"HAS_SIGN"));
}

#[test]
fn shared_conditions_connect_match_ids() {
    let doc = build(&[
        hit("Behcet", "HAS_SYMPTOM", "Uveitis"),
        hit("Sarcoidosis", "HAS_SIGN", "Uveitis"),
    ]);
    assert!(doc
        .edges
        .iter()
        .any(|e| e.source == "Behcet" && e.target == "Sarcoidosis"));
}

#[test]
fn unshared_conditions_do_not_connect_match_ids() {
    let doc = build(&[
        hit("Behcet", "HAS_SYMPTOM", "Uveitis"),
        hit("Hypocalcemia", "HAS_SIGN", "Tetany"),
    ]);
    assert!(!doc
        .edges
        .iter()
        .any(|e| e.source == "Behcet" && e.target == "Hypocalcemia"));
}

#[test]
fn match_without_metadata_contributes_only_its_node() {
    let doc = build(&[Match {
        id: "Orphan".to_string(),
        score: 0.5,
        metadata: None,
    }]);
    assert_eq!(doc.nodes.len(), 1);
    assert!(doc.edges.is_empty());
}

#[test]
fn empty_matches_build_an_empty_document() {
    let doc = build(&[]);
    assert!(doc.nodes.is_empty());
    assert!(doc.edges.is_empty());
}
