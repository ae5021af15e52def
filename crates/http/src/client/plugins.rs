//! Plugin endpoints

use serde_json::Value;

use super::{error::ClientError, CampusClient};
use crate::endpoints;
use crate::types::{PluginConfigUpdate, PluginExecuteRequest, PluginInstallRequest, PluginResponse};

impl CampusClient {
    pub async fn list_plugins(&self) -> Result<Vec<PluginResponse>, ClientError> {
        self.send(endpoints::plugins::list()).await
    }

    /// Install a plugin from its manifest.
    pub async fn install_plugin(
        &self,
        request: &PluginInstallRequest,
    ) -> Result<PluginResponse, ClientError> {
        self.send(endpoints::plugins::install(request)).await
    }

    pub async fn get_plugin(&self, plugin_id: &str) -> Result<PluginResponse, ClientError> {
        self.send(endpoints::plugins::get(plugin_id)).await
    }

    pub async fn configure_plugin(
        &self,
        plugin_id: &str,
        update: &PluginConfigUpdate,
    ) -> Result<PluginResponse, ClientError> {
        self.send(endpoints::plugins::configure(plugin_id, update))
            .await
    }

    pub async fn activate_plugin(&self, plugin_id: &str) -> Result<Value, ClientError> {
        self.send(endpoints::plugins::activate(plugin_id)).await
    }

    pub async fn deactivate_plugin(&self, plugin_id: &str) -> Result<Value, ClientError> {
        self.send(endpoints::plugins::deactivate(plugin_id)).await
    }

    pub async fn execute_plugin(
        &self,
        plugin_id: &str,
        request: &PluginExecuteRequest,
    ) -> Result<Value, ClientError> {
        self.send(endpoints::plugins::execute(plugin_id, request))
            .await
    }

    pub async fn uninstall_plugin(&self, plugin_id: &str) -> Result<Value, ClientError> {
        self.send(endpoints::plugins::uninstall(plugin_id)).await
    }
}
