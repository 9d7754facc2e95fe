//! # Auth Views
//!
//! Server-rendered authentication pages built with Axum and Askama.
//!
//! The crate ships the login page of a web application as a reusable view
//! layer: the templates, the view-model types the render call site supplies,
//! and the typed contract for what the form posts back. Credential checking,
//! session issuance, and CSRF token generation/verification stay in the
//! consuming backend; failures come back into the view purely as per-field
//! messages.
//!
//! ## Architecture
//!
//! - **Views** ([`views`]) - Askama page templates composed into a shared layout
//! - **Forms** ([`forms`]) - validation-error view model and the submission contract
//! - **CSRF** ([`csrf`]) - the anti-forgery token value embedded in every form
//! - **Errors** ([`error`]) - view-layer failures mapped to HTTP responses
//!
//! ## Quick Start
//!
//! A backend handler renders the page by constructing it; [`LoginPage`]
//! implements `IntoResponse` through `askama_web`:
//!
//! ```ignore
//! use auth_views::{CsrfToken, LoginPage, ViewError};
//!
//! async fn login_form(session: Session) -> Result<LoginPage, ViewError> {
//!     let token = CsrfToken::new(session.csrf_token())?;
//!     Ok(LoginPage::new(token))
//! }
//! ```
//!
//! On a failed submission the backend re-renders with the messages it wants
//! shown inline:
//!
//! ```ignore
//! use auth_views::{LoginField, LoginPage, ValidationErrors};
//!
//! let errors = ValidationErrors::new()
//!     .with(LoginField::Email, "The email field is required.");
//! LoginPage::with_errors(token, errors)
//! ```

pub mod csrf;
pub mod error;
pub mod forms;
pub mod views;

pub use csrf::{CSRF_FIELD, CsrfToken};
pub use error::ViewError;
pub use forms::{LoginField, LoginForm, ValidationErrors};
pub use views::LoginPage;
