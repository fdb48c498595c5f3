//! Axum REST API handlers.
//!
//! Read-only: every route serves indexed history and none touches the
//! contract.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db;
use crate::errors::{IndexerError, Result};
use crate::events::{EventRecord, SubjectKind};

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

// ─────────────────────────────────────────────────────────
// Request / response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    /// Restrict to one stored event type, e.g. `ownership_transferred`.
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

#[derive(Serialize)]
pub struct SubjectEventsResponse {
    pub subject_kind: &'static str,
    pub subject_id: u64,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /events?type=<event_type>`
pub async fn get_all_events(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<AllEventsResponse>> {
    let events = db::get_all_events(&state.pool, query.event_type.as_deref()).await?;
    Ok(Json(AllEventsResponse {
        count: events.len(),
        events,
    }))
}

/// `GET /parcels/:id/events`
pub async fn get_parcel_events(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<SubjectEventsResponse>> {
    subject_events(&state.pool, SubjectKind::Parcel, &id).await
}

/// `GET /programs/:id/events`
pub async fn get_program_events(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<SubjectEventsResponse>> {
    subject_events(&state.pool, SubjectKind::Program, &id).await
}

async fn subject_events(
    pool: &SqlitePool,
    kind: SubjectKind,
    raw_id: &str,
) -> Result<Json<SubjectEventsResponse>> {
    let subject_id = parse_id(raw_id)?;
    let events = db::get_events_for_subject(pool, kind.as_str(), &subject_id.to_string()).await?;
    Ok(Json(SubjectEventsResponse {
        subject_kind: kind.as_str(),
        subject_id,
        count: events.len(),
        events,
    }))
}

/// Parcel and program ids are positive integers.
fn parse_id(raw: &str) -> Result<u64> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(IndexerError::InvalidRequest(format!(
            "expected a positive integer id, got `{raw}`"
        ))),
    }
}
