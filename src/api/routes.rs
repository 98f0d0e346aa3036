//! HTTP route handlers for Axum.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::types::{IngestRequest, MatchDto, NotesRequest, QueryParams},
    graph::{self, GraphDoc},
    nlp::{llm::MarkupRecord, spans},
    session::{self, IngestOutcome, Selection},
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

pub async fn extract_markup(
    State(state): State<AppState>,
    Json(req): Json<NotesRequest>,
) -> ApiResult<Vec<MarkupRecord>> {
    let records = state.chat.extract(&req.notes).await.map_err(internal)?;
    Ok(Json(records))
}

pub async fn extract_spans(
    State(state): State<AppState>,
    Json(req): Json<NotesRequest>,
) -> ApiResult<Vec<spans::EntitySpan>> {
    let tagged = state.tagger.tag(&req.notes);
    Ok(Json(spans::merge(&tagged)))
}

pub async fn ingest(
    State(state): State<AppState>,
    Json(req): Json<IngestRequest>,
) -> ApiResult<Option<IngestOutcome>> {
    let mut selection = Selection::new(req.spans);
    let outcome = session::ingest_spans(&state.settings, &state.store, &state.embedder, &mut selection)
        .await
        .map_err(internal)?;
    Ok(Json(outcome))
}

pub async fn query(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> ApiResult<Vec<MatchDto>> {
    let matches = run_query(&state, &params, false).await?;
    Ok(Json(
        matches
            .into_iter()
            .map(|m| MatchDto {
                id: m.id,
                score: m.score,
            })
            .collect(),
    ))
}

pub async fn graph(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> ApiResult<GraphDoc> {
    let matches = run_query(&state, &params, true).await?;
    Ok(Json(graph::build(&matches)))
}

async fn run_query(
    state: &AppState,
    params: &QueryParams,
    include_metadata: bool,
) -> Result<Vec<crate::store::Match>, (StatusCode, String)> {
    let vector = state
        .embedder
        .embed_query(&params.text)
        .await
        .map_err(internal)?;
    let top_k = params.top_k.unwrap_or(state.settings.top_k);
    state
        .store
        .query(&vector, top_k, &state.settings.namespace, include_metadata)
        .await
        .map_err(internal)
}

fn internal(err: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{err:#}"))
}
