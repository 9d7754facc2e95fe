//! Login page view.

use askama::Template;
use askama_web::WebTemplate;

use crate::csrf::CsrfToken;
use crate::error::ViewError;
use crate::forms::ValidationErrors;

/// Template for the login page.
///
/// Renders `templates/login.html` inside the shared `templates/base.html`
/// layout with:
/// - Email and password inputs, marked `is-invalid` when
///   [`ValidationErrors`] carries a message for them
/// - Inline `invalid-feedback` messages directly beneath the affected inputs
/// - A hidden `_token` field carrying the CSRF token
/// - A "Remember Me" checkbox
///
/// The form posts to the URL it was served from (empty `action`), so the
/// page works on whatever route the backend mounts it.
///
/// All interpolated values are HTML-escaped by the template engine.
#[derive(Debug, Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub csrf_token: CsrfToken,
    pub errors: ValidationErrors,
}

impl LoginPage {
    /// First render: no validation feedback yet.
    pub fn new(csrf_token: CsrfToken) -> Self {
        Self {
            csrf_token,
            errors: ValidationErrors::new(),
        }
    }

    /// Re-render after a failed submission, with the backend's per-field
    /// messages.
    pub fn with_errors(csrf_token: CsrfToken, errors: ValidationErrors) -> Self {
        Self { csrf_token, errors }
    }

    /// Renders the page to a string, for call sites that are not answering
    /// an HTTP request directly.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Render`] if the template engine fails.
    pub fn render_html(&self) -> Result<String, ViewError> {
        Ok(self.render()?)
    }
}
