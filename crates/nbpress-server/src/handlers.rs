//! HTTP request handlers for API endpoints

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use nbpress_core::{output_filename, NbpressError, OutputFormat};
use tracing::{error, info};

use crate::types::{BannerResponse, HealthResponse};
use crate::AppState;

/// Service banner endpoint
pub async fn root() -> impl IntoResponse {
    Json(BannerResponse {
        message: "Notebook Converter API".to_string(),
        status: "running".to_string(),
    })
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Convert an uploaded notebook to HTML
pub async fn convert_html(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    convert(state, multipart, OutputFormat::Html).await
}

/// Convert an uploaded notebook to PDF
pub async fn convert_pdf(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    convert(state, multipart, OutputFormat::Pdf).await
}

async fn convert(
    state: AppState,
    mut multipart: Multipart,
    format: OutputFormat,
) -> Result<(HeaderMap, Vec<u8>), (StatusCode, String)> {
    let (filename, data) = read_upload(&mut multipart).await?;

    if !filename.ends_with(".ipynb") {
        return Err((
            StatusCode::BAD_REQUEST,
            "File must be a .ipynb notebook".to_string(),
        ));
    }

    info!(
        "Converting {} ({} bytes) to {}",
        filename,
        data.len(),
        format.extension()
    );

    // Conversion is CPU-bound; keep it off the async workers
    let converter = state.converter.clone();
    let bytes = tokio::task::spawn_blocking(move || match format {
        OutputFormat::Html => converter.convert_to_html(&data),
        OutputFormat::Pdf => converter.convert_to_pdf(&data),
    })
    .await
    .map_err(|e| {
        error!("Conversion task panicked: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Conversion failed: {e}"),
        )
    })?
    .map_err(|e| {
        error!("Conversion of {} failed: {}", filename, e);
        let status = match &e {
            NbpressError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, format!("Conversion failed: {e}"))
    })?;

    let download_name = output_filename(&filename, format);
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(format.media_type()),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename={download_name}")).map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Conversion failed: invalid download filename: {e}"),
            )
        })?,
    );

    Ok((headers, bytes))
}

/// Pull the notebook file out of the multipart upload
async fn read_upload(
    multipart: &mut Multipart,
) -> Result<(String, Vec<u8>), (StatusCode, String)> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            format!("Invalid multipart upload: {e}"),
        )
    })? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("notebook.ipynb").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| {
                    (
                        StatusCode::BAD_REQUEST,
                        format!("Failed to read upload: {e}"),
                    )
                })?
                .to_vec();
            return Ok((filename, data));
        }
    }

    Err((
        StatusCode::BAD_REQUEST,
        "Missing file field in upload".to_string(),
    ))
}
