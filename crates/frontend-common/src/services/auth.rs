//! Authentication API service
//!
//! Ties credential exchanges on the client to session mutations, so pages
//! never touch tokens directly.

use std::rc::Rc;

use campus_core::{SessionManager, User, UserPatch};
use campus_http::types::RegisterRequest;
use campus_http::CampusClient;

/// Authentication API service
#[derive(Clone)]
pub struct AuthService {
    client: Rc<CampusClient>,
    session: Rc<SessionManager>,
}

impl AuthService {
    pub fn new(client: Rc<CampusClient>, session: Rc<SessionManager>) -> Self {
        Self { client, session }
    }

    /// Log in and populate the session from the token exchange.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, String> {
        let token = self
            .client
            .login(username, password)
            .await
            .map_err(|e| e.to_string())?;
        self.session
            .set_auth(token.user.clone(), token.access_token, token.refresh_token);
        Ok(token.user)
    }

    /// Register a new account; the backend signs it in immediately.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, String> {
        let token = self
            .client
            .register(request)
            .await
            .map_err(|e| e.to_string())?;
        self.session
            .set_auth(token.user.clone(), token.access_token, token.refresh_token);
        Ok(token.user)
    }

    /// Drop the session. Purely local; the backend holds no session state.
    pub fn logout(&self) {
        self.session.clear_auth();
    }

    /// Re-fetch the identity record and fold it into the session.
    pub async fn refresh_current_user(&self) -> Result<User, String> {
        let user = self.client.me().await.map_err(|e| e.to_string())?;
        self.session.update_user(UserPatch {
            email: Some(user.email.clone()),
            username: Some(user.username.clone()),
            first_name: Some(user.first_name.clone()),
            last_name: Some(user.last_name.clone()),
            is_active: Some(user.is_active),
        });
        Ok(user)
    }
}
