//! Receipt upload endpoint: parse an image, optionally persist a bill.

use crate::{
    services::bill_parser::{self, ParseOptions, ParseOutcome},
    state::AppState,
    MAX_IMAGE_BYTES,
};
use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Json, Response},
};
use shared::{AppError, Result};
use std::sync::Arc;
use tracing::{info, warn};

struct Upload {
    bytes: Vec<u8>,
    filename: String,
    content_type: String,
}

/// POST /api/parser/parse
///
/// Multipart fields: `image` (required file), `create_bill`
/// (`"true"`/`"false"` text), `title` (optional text).
pub async fn parse_receipt(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response> {
    let mut upload: Option<Upload> = None;
    let mut create_bill = false;
    let mut title: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {}", e)))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "image" => {
                let filename = field.file_name().unwrap_or("receipt").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::validation(format!("Error reading uploaded file: {}", e))
                })?;
                info!("received image file: {} ({} bytes)", filename, bytes.len());
                upload = Some(Upload {
                    bytes: bytes.to_vec(),
                    filename,
                    content_type,
                });
            }
            "create_bill" => {
                let text = field.text().await.map_err(|e| {
                    AppError::validation(format!("Error reading create_bill field: {}", e))
                })?;
                create_bill = text == "true";
            }
            "title" => {
                let text = field.text().await.map_err(|e| {
                    AppError::validation(format!("Error reading title field: {}", e))
                })?;
                if !text.is_empty() {
                    title = Some(text);
                }
            }
            other => warn!("unexpected field in multipart request: {}", other),
        }
    }

    let upload = upload.ok_or_else(|| AppError::validation("No image file provided"))?;
    if upload.bytes.is_empty() {
        return Err(AppError::validation("No image file provided"));
    }
    if upload.bytes.len() > MAX_IMAGE_BYTES {
        return Err(AppError::payload_too_large("Image file too large (max 5MB)"));
    }

    let outcome = bill_parser::parse_and_maybe_create(
        &state.parser,
        &state.accounts,
        upload.bytes,
        upload.filename,
        &upload.content_type,
        ParseOptions { create_bill, title },
    )
    .await?;

    Ok(match outcome {
        ParseOutcome::Parsed(receipt) => Json(receipt).into_response(),
        ParseOutcome::Created(created) => Json(created).into_response(),
    })
}
