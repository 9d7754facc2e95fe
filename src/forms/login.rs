//! View model and wire contract for the login form.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Login form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    /// Wire name of the field, as submitted by the browser.
    pub fn name(self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }
}

/// Per-field error messages produced by backend form validation.
///
/// Absence of a field means the field is valid; the map is empty on first
/// render. Entries are keyed by [`LoginField`], so an unknown field name is
/// unrepresentable, and iteration order is fixed so rendering stays
/// reproducible.
///
/// # Examples
///
/// ```ignore
/// let errors = ValidationErrors::new()
///     .with(LoginField::Email, "The email field is required.");
///
/// assert!(errors.contains(LoginField::Email));
/// assert!(errors.get(LoginField::Password).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: BTreeMap<LoginField, String>,
}

impl ValidationErrors {
    /// Creates an empty error map (first render).
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`, replacing any previous one.
    pub fn insert(&mut self, field: LoginField, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, field: LoginField, message: impl Into<String>) -> Self {
        self.insert(field, message);
        self
    }

    /// The message for `field`, if validation failed for it.
    pub fn get(&self, field: LoginField) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    /// Whether validation failed for `field`.
    pub fn contains(&self, field: LoginField) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Template accessor for the email field message.
    pub fn email(&self) -> Option<&str> {
        self.get(LoginField::Email)
    }

    /// Template accessor for the password field message.
    pub fn password(&self) -> Option<&str> {
        self.get(LoginField::Password)
    }
}

/// What the browser posts back from the login form
/// (`application/x-www-form-urlencoded`).
///
/// Extract it with `axum::Form` in the backend's submission handler. The
/// CSRF token arrives under the [`CSRF_FIELD`](crate::csrf::CSRF_FIELD) name
/// and must be verified against the session before the credentials are
/// looked at.
#[derive(Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Raw checkbox value. Browsers omit the field entirely when the box is
    /// unchecked and send `on` when it is checked.
    #[serde(default)]
    remember: Option<String>,
    #[serde(rename = "_token")]
    pub csrf_token: String,
}

impl LoginForm {
    /// Whether the "Remember Me" checkbox was ticked.
    ///
    /// Presence of the field is what counts; the value itself is
    /// browser-defined and not inspected.
    pub fn remember(&self) -> bool {
        self.remember.is_some()
    }
}

// Credentials and tokens stay out of log output.
impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"***")
            .field("remember", &self.remember.is_some())
            .field("csrf_token", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_match_wire_format() {
        assert_eq!(LoginField::Email.name(), "email");
        assert_eq!(LoginField::Password.name(), "password");
    }

    #[test]
    fn test_new_map_is_empty() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert!(!errors.contains(LoginField::Email));
        assert!(!errors.contains(LoginField::Password));
    }

    #[test]
    fn test_insert_records_message() {
        let mut errors = ValidationErrors::new();
        errors.insert(LoginField::Email, "The email field is required.");

        assert!(errors.contains(LoginField::Email));
        assert_eq!(
            errors.get(LoginField::Email),
            Some("The email field is required.")
        );
    }

    #[test]
    fn test_insert_replaces_previous_message() {
        let mut errors = ValidationErrors::new();
        errors.insert(LoginField::Email, "first");
        errors.insert(LoginField::Email, "second");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(LoginField::Email), Some("second"));
    }

    #[test]
    fn test_absent_field_is_valid() {
        let errors = ValidationErrors::new().with(LoginField::Email, "required");

        assert!(!errors.contains(LoginField::Password));
        assert!(errors.get(LoginField::Password).is_none());
        assert!(errors.password().is_none());
    }

    #[test]
    fn test_with_builder_chains() {
        let errors = ValidationErrors::new()
            .with(LoginField::Email, "required")
            .with(LoginField::Password, "too short");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.email(), Some("required"));
        assert_eq!(errors.password(), Some("too short"));
    }

    #[test]
    fn test_template_accessors_mirror_get() {
        let errors = ValidationErrors::new().with(LoginField::Password, "too short");

        assert_eq!(errors.password(), errors.get(LoginField::Password));
        assert_eq!(errors.email(), errors.get(LoginField::Email));
    }

    #[test]
    fn test_form_without_remember_field() {
        let form: LoginForm = serde_json::from_value(serde_json::json!({
            "email": "user@example.com",
            "password": "hunter2",
            "_token": "tok-123",
        }))
        .unwrap();

        assert!(!form.remember());
        assert_eq!(form.email, "user@example.com");
        assert_eq!(form.csrf_token, "tok-123");
    }

    #[test]
    fn test_form_with_remember_field() {
        let form: LoginForm = serde_json::from_value(serde_json::json!({
            "email": "user@example.com",
            "password": "hunter2",
            "remember": "on",
            "_token": "tok-123",
        }))
        .unwrap();

        assert!(form.remember());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let form: LoginForm = serde_json::from_value(serde_json::json!({
            "email": "user@example.com",
            "password": "hunter2",
            "_token": "tok-123",
        }))
        .unwrap();

        let output = format!("{:?}", form);
        assert!(output.contains("user@example.com"));
        assert!(!output.contains("hunter2"));
        assert!(!output.contains("tok-123"));
    }
}
