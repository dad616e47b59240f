use anyhow::Context;
use axum::{body::Body, extract::Path, http::StatusCode, response::{IntoResponse, Response}};
use tokio_util::io::ReaderStream;
use tracing::info;

use crate::definitions_store::{check_language, definitions_relative_path, get_definitions_store};

async fn _download_definitions(language: String) -> anyhow::Result<Response> {
    info!("Downloading definitions: {}", language);
    check_language(&language)?;

    let headers: [(String, String); 2] = [
        ("Content-Type".to_string(), "application/json".to_string()),
        (
            "Content-Disposition".to_string(),
            format!("attachment; filename=\"definitions-{}.json\"", language),
        ),
    ];

    let store = get_definitions_store();
    if let Some(path) = store.local_definitions_path(&language) {
        let file = tokio::fs::File::open(&path)
            .await
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let body = Body::from_stream(ReaderStream::new(file));
        return Ok((headers, body).into_response());
    }

    let Some(url) = store.remote_url(&definitions_relative_path(&language)) else {
        anyhow::bail!("No definitions source configured");
    };
    let response = reqwest::get(&url).await.with_context(|| format!("Failed to fetch {}", url))?;
    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("Error fetching {}: {}", url, status);
    }
    let bytes = response.bytes().await?;
    Ok((headers, Body::from(bytes)).into_response())
}

pub async fn download_definitions(Path(language): Path<String>) -> Response {
    match _download_definitions(language).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("download_definitions: request failed: {:#?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Body::from(e.to_string())).into_response()
        }
    }
}
