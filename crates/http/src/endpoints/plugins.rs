//! Plugin operations

use super::{ApiRequest, API_PREFIX};
use crate::types::{PluginConfigUpdate, PluginExecuteRequest, PluginInstallRequest};

pub fn list() -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/plugins/"))
}

/// Install a plugin from its manifest.
pub fn install(request: &PluginInstallRequest) -> ApiRequest {
    ApiRequest::post(format!("{API_PREFIX}/plugins/"), request)
}

pub fn get(plugin_id: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/plugins/{plugin_id}"))
}

pub fn configure(plugin_id: &str, update: &PluginConfigUpdate) -> ApiRequest {
    ApiRequest::put(format!("{API_PREFIX}/plugins/{plugin_id}/config"), update)
}

pub fn activate(plugin_id: &str) -> ApiRequest {
    ApiRequest::post_empty(format!("{API_PREFIX}/plugins/{plugin_id}/activate"))
}

pub fn deactivate(plugin_id: &str) -> ApiRequest {
    ApiRequest::post_empty(format!("{API_PREFIX}/plugins/{plugin_id}/deactivate"))
}

pub fn execute(plugin_id: &str, request: &PluginExecuteRequest) -> ApiRequest {
    ApiRequest::post(format!("{API_PREFIX}/plugins/{plugin_id}/execute"), request)
}

pub fn uninstall(plugin_id: &str) -> ApiRequest {
    ApiRequest::delete(format!("{API_PREFIX}/plugins/{plugin_id}"))
}
