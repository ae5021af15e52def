//! Campus API client
//!
//! Reads the access token from the session manager at dispatch time and
//! attaches it as a bearer credential. A 401 response clears the session,
//! fires the unauthorized hook exactly once for that response, and is never
//! retried; every other failure is passed through to the caller.

pub mod error;

mod agents;
mod assignments;
mod auth;
mod courses;
mod plugins;
mod resources;
mod workflows;

use std::rc::Rc;
use std::time::Duration;

use reqwest::{header, Client, ClientBuilder, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use campus_core::SessionManager;

use crate::endpoints::{ApiRequest, RequestBody};
use error::ClientError;

/// Default ceiling for any single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Hook fired when the backend rejects the session's credential.
pub type UnauthorizedHook = Rc<dyn Fn()>;

/// Campus API client
#[derive(Clone)]
pub struct CampusClient {
    http: Client,
    base_url: String,
    session: Rc<SessionManager>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl CampusClient {
    /// Create a new client builder
    pub fn builder() -> CampusClientBuilder {
        CampusClientBuilder::new()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session manager this client reads its credential from.
    pub fn session(&self) -> &Rc<SessionManager> {
        &self.session
    }

    /// Create a request builder, attaching the current bearer token when the
    /// session holds one. The token is read here, at dispatch time; a later
    /// rotation does not affect this request.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, url);

        if let Some(token) = self.session.access_token() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }

    /// Turn a descriptor into a ready-to-send request.
    pub fn prepare(&self, api: ApiRequest) -> Result<reqwest::RequestBuilder, ClientError> {
        let request = self.request(api.method, &api.path);
        Ok(match api.body {
            RequestBody::None => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Form(fields) => request.form(&fields),
            RequestBody::Multipart(upload) => {
                let part = reqwest::multipart::Part::bytes(upload.data)
                    .file_name(upload.file_name)
                    .mime_str(&upload.content_type)?;
                request.multipart(reqwest::multipart::Form::new().part("file", part))
            }
        })
    }

    /// Execute a descriptor and deserialize the JSON response.
    pub async fn send<T: DeserializeOwned>(&self, api: ApiRequest) -> Result<T, ClientError> {
        let request = self.prepare(api)?;
        self.execute(request).await
    }

    /// Execute a request and handle common errors.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            if status == StatusCode::UNAUTHORIZED {
                debug!("credential rejected, clearing session");
                self.session.clear_auth();
                if let Some(hook) = &self.on_unauthorized {
                    hook();
                }
            }
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for [`CampusClient`]
pub struct CampusClientBuilder {
    base_url: Option<String>,
    session: Option<Rc<SessionManager>>,
    timeout: Duration,
    user_agent: Option<String>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl CampusClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            session: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            on_unauthorized: None,
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the session manager the client reads its credential from
    pub fn session(mut self, session: Rc<SessionManager>) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the request timeout ceiling
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set the hook fired after a 401 clears the session
    pub fn on_unauthorized(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<CampusClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let session = self
            .session
            .ok_or_else(|| ClientError::Configuration("session manager is required".into()))?;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| "campus-client/0.1.0".to_string());

        #[cfg(not(target_arch = "wasm32"))]
        let http = ClientBuilder::new()
            .user_agent(user_agent)
            .timeout(self.timeout)
            .build()?;

        #[cfg(target_arch = "wasm32")]
        let http = {
            let _ = self.timeout; // Timeouts not supported on WASM
            ClientBuilder::new().user_agent(user_agent).build()?
        };

        Ok(CampusClient {
            http,
            base_url,
            session,
            on_unauthorized: self.on_unauthorized,
        })
    }
}

impl Default for CampusClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
