//! Client configuration and construction

use std::rc::Rc;

use campus_core::SessionManager;
use campus_http::CampusClient;

use crate::config::AuthConfig;
use crate::redirect::redirect_to;

/// Base URL for API calls: the window origin, falling back to the
/// documented localhost default outside a browser context.
pub fn api_base_url() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }

    AuthConfig::DEFAULT_API_BASE_URL.to_string()
}

/// Build the shared client: bearer injection from the session manager, plus
/// a 401 hook that sends the browser to the login entry point.
pub fn create_client(session: Rc<SessionManager>) -> CampusClient {
    CampusClient::builder()
        .base_url(api_base_url())
        .session(session)
        .on_unauthorized(|| redirect_to(AuthConfig::LOGIN_PATH))
        .build()
        .expect("failed to construct API client")
}
