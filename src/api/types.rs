//! Shared DTOs for JSON requests and responses.

use serde::{Deserialize, Serialize};

use crate::nlp::spans::EntitySpan;

#[derive(Debug, Deserialize)]
pub struct NotesRequest {
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    pub spans: Vec<EntitySpan>,
}

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub text: String,
    pub top_k: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchDto {
    pub id: String,
    pub score: f32,
}
