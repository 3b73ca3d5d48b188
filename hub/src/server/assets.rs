//! Static shell page hosting the panel and toast surfaces.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "assets/"]
struct ShellAssets;

/// Serve the panel shell at `/panel`.
pub async fn panel_index() -> Response {
    serve_embedded::<ShellAssets>("panel.html")
}

fn serve_embedded<A: Embed>(path: &str) -> Response {
    match A::get(path) {
        Some(file) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                file.data.into_owned(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}
