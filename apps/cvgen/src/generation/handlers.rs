//! Axum route handler for CV document generation.

use axum::{
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::generation::filename::create_filename;
use crate::models::CvData;
use crate::state::AppState;
use crate::template::build_document;

/// Parses the request body; an empty body is treated as `{}`.
pub fn parse_cv(body: &[u8]) -> Result<CvData, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CvData::default());
    }
    Ok(serde_json::from_slice(body)?)
}

/// POST /generate
///
/// Body: JSON CV record. Responds with the rendered document as an attachment.
/// Template assembly and packaging run on the blocking pool.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let body = body.map_err(|rejection| AppError::Body(rejection.body_text()))?;
    let cv = parse_cv(&body)?;
    let filename = create_filename(&cv);

    let engine = state.engine.clone();
    let style = state.style.clone();
    let document = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, AppError> {
        let doc = build_document(&cv, &style)?;
        Ok(engine.render(&doc)?)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Document generation aborted: {e}")))??;

    info!(filename = %filename, bytes = document.len(), "CV document generated");

    // Non-ASCII letters survive as raw UTF-8 header bytes.
    let disposition = format!("attachment; filename=\"{filename}\"");
    let disposition = HeaderValue::from_bytes(disposition.as_bytes())
        .map_err(|e| AppError::InvalidHeader(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static(state.engine.content_type()),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document,
    )
        .into_response())
}
