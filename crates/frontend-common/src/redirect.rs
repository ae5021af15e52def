//! Hard browser navigation

use tracing::warn;

/// Point the browser at `path`, bypassing any in-app router state.
pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(path).is_err() {
            warn!("failed to redirect to {path}");
        }
    }
}
