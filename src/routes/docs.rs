use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use crate::error::AppError;

#[derive(RustEmbed)]
#[folder = "api-docs/"]
struct ApiDocs;

/// `GET /api-docs`: the documentation viewer.
pub async fn docs_index() -> Response {
    serve_asset("index.html")
}

/// `GET /api-docs/*path`: the OpenAPI document and any viewer assets.
pub async fn docs_asset(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return serve_asset("index.html");
    }
    serve_asset(path)
}

fn serve_asset(path: &str) -> Response {
    let Some(content) = ApiDocs::get(path) else {
        return AppError::RouteNotFound.into_response();
    };

    let mime = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime)],
        Body::from(content.data.into_owned()),
    )
        .into_response()
}
