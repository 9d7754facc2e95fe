use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failures the view layer can produce on its own.
///
/// Backend-side failures (bad credentials, CSRF mismatch, missing fields)
/// never appear here; they are surfaced back into the views through
/// [`crate::forms::ValidationErrors`] on re-render.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The render call site supplied an empty CSRF token.
    #[error("CSRF token must not be empty")]
    EmptyCsrfToken,

    /// The template engine failed to render a page.
    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "failed to render view");
        (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
    }
}
