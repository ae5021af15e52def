//! Common frontend building blocks for Campus web apps
//!
//! Provides the session context (backed by durable browser storage), the
//! configured API client, and the route guard that gates protected views.

pub mod client;
pub mod components;
pub mod config;
pub mod guard;
pub mod redirect;
pub mod services;
pub mod session;
pub mod storage;

pub use config::AuthConfig;
pub use guard::{GuardDecision, RouteGuard};
pub use session::{
    use_api_client, use_is_authenticated, use_session, ApiContext, SessionContext, SessionProvider,
};
pub use storage::LocalSessionStore;
