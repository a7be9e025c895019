//! HTTP surface of the BFF.

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub mod bills;
pub mod health;
pub mod parser;

pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/bills", get(bills::list_bills).post(bills::create_bill))
        .route(
            "/api/bills/:id",
            get(bills::get_bill)
                .put(bills::update_bill)
                .delete(bills::delete_bill),
        )
        .route("/api/parser/parse", post(parser::parse_receipt))
}
