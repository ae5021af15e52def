//! Course endpoints

use serde_json::Value;

use super::{error::ClientError, CampusClient};
use crate::endpoints;
use crate::types::{CourseCreate, CourseResponse, CourseUpdate};

impl CampusClient {
    pub async fn list_courses(&self) -> Result<Vec<CourseResponse>, ClientError> {
        self.send(endpoints::courses::list()).await
    }

    pub async fn create_course(&self, course: &CourseCreate) -> Result<CourseResponse, ClientError> {
        self.send(endpoints::courses::create(course)).await
    }

    pub async fn get_course(&self, course_id: &str) -> Result<CourseResponse, ClientError> {
        self.send(endpoints::courses::get(course_id)).await
    }

    pub async fn update_course(
        &self,
        course_id: &str,
        update: &CourseUpdate,
    ) -> Result<CourseResponse, ClientError> {
        self.send(endpoints::courses::update(course_id, update)).await
    }

    pub async fn delete_course(&self, course_id: &str) -> Result<Value, ClientError> {
        self.send(endpoints::courses::delete(course_id)).await
    }
}
