//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Durable storage key for the persisted session
    pub const AUTH_STORAGE_KEY: &'static str = "auth-storage";

    /// Login entry point for unauthenticated visitors
    pub const LOGIN_PATH: &'static str = "/login";

    /// Landing page for signed-in visitors hitting auth-only pages
    pub const LANDING_PATH: &'static str = "/dashboard";

    /// API base URL used when no window origin is available
    pub const DEFAULT_API_BASE_URL: &'static str = "http://localhost:3000";
}
