//! Campus proxy: server-side relay between the web frontend and the backend
//! service, so the browser never needs direct backend addressing.

pub mod config;
pub mod error;
pub mod server;

pub use config::ProxyConfig;
pub use error::{ProxyError, Result};
pub use server::HttpServer;
