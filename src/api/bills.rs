//! 1:1 proxy handlers for the accounts service's bill CRUD API.
//!
//! Bodies are relayed as raw JSON in both directions; the upstream
//! service owns the bill schema. Failures surface the upstream status
//! and body, or a fixed per-operation message when there is none.

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use shared::Result;
use std::sync::Arc;

/// GET /api/bills — a missing upstream body normalizes to `[]`.
pub async fn list_bills(State(state): State<Arc<AppState>>) -> Result<Json<Value>> {
    let bills = state.accounts.list_bills().await?;

    if bills.is_null() {
        return Ok(Json(Value::Array(Vec::new())));
    }
    Ok(Json(bills))
}

/// GET /api/bills/:id
pub async fn get_bill(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let bill = state.accounts.get_bill(&id).await?;
    Ok(Json(bill))
}

/// POST /api/bills
pub async fn create_bill(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>)> {
    let created: Value = state.accounts.create_bill(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/bills/:id
pub async fn update_bill(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>> {
    let updated = state.accounts.update_bill(&id, &payload).await?;
    Ok(Json(updated))
}

/// DELETE /api/bills/:id
pub async fn delete_bill(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let ack = state.accounts.delete_bill(&id).await?;
    Ok(Json(ack))
}
