//! Assignment endpoints

use serde_json::Value;

use super::{error::ClientError, CampusClient};
use crate::endpoints;
use crate::types::{AssignmentCreate, AssignmentResponse, AssignmentUpdate};

impl CampusClient {
    pub async fn list_assignments(&self) -> Result<Vec<AssignmentResponse>, ClientError> {
        self.send(endpoints::assignments::list()).await
    }

    pub async fn create_assignment(
        &self,
        assignment: &AssignmentCreate,
    ) -> Result<AssignmentResponse, ClientError> {
        self.send(endpoints::assignments::create(assignment)).await
    }

    pub async fn get_assignment(
        &self,
        assignment_id: &str,
    ) -> Result<AssignmentResponse, ClientError> {
        self.send(endpoints::assignments::get(assignment_id)).await
    }

    pub async fn update_assignment(
        &self,
        assignment_id: &str,
        update: &AssignmentUpdate,
    ) -> Result<AssignmentResponse, ClientError> {
        self.send(endpoints::assignments::update(assignment_id, update))
            .await
    }

    pub async fn delete_assignment(&self, assignment_id: &str) -> Result<Value, ClientError> {
        self.send(endpoints::assignments::delete(assignment_id)).await
    }
}
