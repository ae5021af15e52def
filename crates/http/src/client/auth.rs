//! Authentication endpoints

use campus_core::User;

use super::{error::ClientError, CampusClient};
use crate::endpoints;
use crate::types::{RegisterRequest, TokenResponse};

impl CampusClient {
    /// Exchange credentials for a token pair (form-encoded, see
    /// [`endpoints::auth::login`]).
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, ClientError> {
        self.send(endpoints::auth::login(username, password)).await
    }

    /// Create an account; the backend signs it in immediately.
    pub async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ClientError> {
        self.send(endpoints::auth::register(request)).await
    }

    /// Fetch the identity behind the current token.
    pub async fn me(&self) -> Result<User, ClientError> {
        self.send(endpoints::auth::me()).await
    }
}
