//! HTML page views composed from the shared layout.

mod login;

pub use login::LoginPage;
