//! Lightweight dictionary-based token tagger. Swap with a transformer
//! pipeline behind the same trait when one is available.

use std::sync::Arc;

use anyhow::Result;
use once_cell::sync::Lazy;

use crate::{config::Settings, nlp::spans::TokenTag};

/// Trait for token-classification implementations producing BIO tags.
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TokenTag>;
}

/// Lexicon of lowercased phrases mapped to their entity type.
static LEXICON: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("calcium gluconate", "MEDICATION"),
        ("aspirin", "MEDICATION"),
        ("colchicine", "MEDICATION"),
        ("prednisone", "MEDICATION"),
        ("azathioprine", "MEDICATION"),
        ("behcet disease", "DISEASE_DISORDER"),
        ("behcet", "DISEASE_DISORDER"),
        ("hypocalcemia", "DISEASE_DISORDER"),
        ("vasculitis", "DISEASE_DISORDER"),
        ("genital ulcers", "SIGN_SYMPTOM"),
        ("aphthous ulcers", "SIGN_SYMPTOM"),
        ("oral ulcers", "SIGN_SYMPTOM"),
        ("erythema nodosum", "SIGN_SYMPTOM"),
        ("uveitis", "SIGN_SYMPTOM"),
        ("fever", "SIGN_SYMPTOM"),
        ("tetany", "SIGN_SYMPTOM"),
        ("paresthesia", "SIGN_SYMPTOM"),
    ]
});

struct DictionaryTagger;

impl Tagger for DictionaryTagger {
    fn tag(&self, text: &str) -> Vec<TokenTag> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let lowered: Vec<String> = words.iter().map(|w| normalise(w)).collect();

        let mut tags = Vec::with_capacity(words.len());
        let mut idx = 0;
        while idx < words.len() {
            match longest_match(&lowered, idx) {
                Some((len, label)) => {
                    tags.push(TokenTag::new(format!("B-{label}"), words[idx]));
                    for offset in 1..len {
                        tags.push(TokenTag::new(format!("I-{label}"), words[idx + offset]));
                    }
                    idx += len;
                }
                None => {
                    tags.push(TokenTag::new("O", words[idx]));
                    idx += 1;
                }
            }
        }
        tags
    }
}

fn normalise(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase()
}

fn longest_match(lowered: &[String], start: usize) -> Option<(usize, &'static str)> {
    let mut best: Option<(usize, &'static str)> = None;
    for (phrase, label) in LEXICON.iter() {
        let parts: Vec<&str> = phrase.split(' ').collect();
        if start + parts.len() > lowered.len() {
            continue;
        }
        let matched = parts
            .iter()
            .zip(&lowered[start..start + parts.len()])
            .all(|(p, w)| *p == w.as_str());
        if matched && best.map_or(true, |(len, _)| parts.len() > len) {
            best = Some((parts.len(), label));
        }
    }
    best
}

/// Load a dictionary-backed tagger implementation.
pub async fn load_tagger(_settings: &Settings) -> Result<Arc<dyn Tagger>> {
    Ok(Arc::new(DictionaryTagger) as Arc<dyn Tagger>)
}
