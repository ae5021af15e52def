//! Resource endpoints

use serde_json::Value;

use super::{error::ClientError, CampusClient};
use crate::endpoints::{self, FileUpload};
use crate::types::{ResourceCreate, ResourceResponse, ResourceUpdate, ResourceUploadMeta};

impl CampusClient {
    pub async fn list_resources(&self) -> Result<Vec<ResourceResponse>, ClientError> {
        self.send(endpoints::resources::list()).await
    }

    pub async fn create_resource(
        &self,
        resource: &ResourceCreate,
    ) -> Result<ResourceResponse, ClientError> {
        self.send(endpoints::resources::create(resource)).await
    }

    pub async fn get_resource(&self, resource_id: &str) -> Result<ResourceResponse, ClientError> {
        self.send(endpoints::resources::get(resource_id)).await
    }

    pub async fn update_resource(
        &self,
        resource_id: &str,
        update: &ResourceUpdate,
    ) -> Result<ResourceResponse, ClientError> {
        self.send(endpoints::resources::update(resource_id, update))
            .await
    }

    pub async fn delete_resource(&self, resource_id: &str) -> Result<Value, ClientError> {
        self.send(endpoints::resources::delete(resource_id)).await
    }

    /// Upload a file as a new resource.
    pub async fn upload_resource(
        &self,
        file: FileUpload,
        meta: &ResourceUploadMeta,
    ) -> Result<ResourceResponse, ClientError> {
        self.send(endpoints::resources::upload(file, meta)).await
    }

    /// Full-text search across the caller's resources.
    pub async fn search_resources(&self, query: &str) -> Result<Vec<ResourceResponse>, ClientError> {
        self.send(endpoints::resources::search(query)).await
    }
}
