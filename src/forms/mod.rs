//! Form view models and submission contracts.

mod login;

pub use login::{LoginField, LoginForm, ValidationErrors};
