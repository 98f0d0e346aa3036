//! Merging of BIO-tagged token runs into entity spans.
//!
//! Token classifiers emit one tag per (sub-)token: `B-<TYPE>` opens a span,
//! `I-<TYPE>` continues one, anything else closes it. This module collapses a
//! tagged token stream back into human-readable `(type, text)` spans.

use serde::{Deserialize, Serialize};

/// Sub-word continuation marker emitted by SentencePiece-style tokenizers.
const SUBWORD_MARKER: char = '\u{2581}';

/// One token-classifier output unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTag {
    pub tag: String,
    pub text: String,
}

impl TokenTag {
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
        }
    }
}

/// A contiguous run of same-entity tokens, joined into one text value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub entity_type: String,
    pub text: String,
}

/// Collapse an ordered BIO-tagged token stream into entity spans.
///
/// Single left-to-right pass. A `B-` tag always opens a fresh span, even when
/// the previous span has the same type; two adjacent `B-DRUG` tokens yield two
/// spans. An `I-` tag continues whatever span is open regardless of its own
/// type suffix, and is dropped when no span is open. Tokens are stripped of
/// the sub-word marker and whitespace before joining; tokens that clean to an
/// empty string contribute nothing. Never errors: malformed sequences degrade
/// to fewer spans, not failures.
pub fn merge(tokens: &[TokenTag]) -> Vec<EntitySpan> {
    let mut spans = Vec::new();
    let mut current_type: Option<String> = None;
    let mut current_words: Vec<String> = Vec::new();

    for token in tokens {
        let cleaned = clean_token(&token.text);

        if let Some(entity_type) = token.tag.strip_prefix("B-") {
            flush(&mut spans, &mut current_type, &mut current_words);
            current_type = Some(entity_type.to_string());
            if !cleaned.is_empty() {
                current_words.push(cleaned);
            }
        } else if token.tag.starts_with("I-") && current_type.is_some() {
            if !cleaned.is_empty() {
                current_words.push(cleaned);
            }
        } else {
            // Non-entity tag, or an orphan I- with nothing open.
            flush(&mut spans, &mut current_type, &mut current_words);
        }
    }

    flush(&mut spans, &mut current_type, &mut current_words);
    spans
}

fn clean_token(text: &str) -> String {
    text.replace(SUBWORD_MARKER, "").trim().to_string()
}

fn flush(
    spans: &mut Vec<EntitySpan>,
    current_type: &mut Option<String>,
    current_words: &mut Vec<String>,
) {
    if let Some(entity_type) = current_type.take() {
        if !entity_type.is_empty() && !current_words.is_empty() {
            spans.push(EntitySpan {
                entity_type,
                text: current_words.join(" "),
            });
        }
    }
    current_words.clear();
}
