mod auth;

pub use auth::AuthService;
