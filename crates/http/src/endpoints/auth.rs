//! Authentication operations

use reqwest::Method;

use super::{ApiRequest, RequestBody, API_PREFIX};
use crate::types::RegisterRequest;

/// Exchange credentials for a token pair.
///
/// The backend's login route consumes an OAuth2 password form, so the
/// credentials go out form-urlencoded under `username`/`password` rather
/// than as JSON. The `username` field also accepts the account email.
pub fn login(username: &str, password: &str) -> ApiRequest {
    ApiRequest {
        method: Method::POST,
        path: format!("{API_PREFIX}/auth/login"),
        body: RequestBody::Form(vec![
            ("username", username.to_owned()),
            ("password", password.to_owned()),
        ]),
    }
}

/// Create an account; the backend signs it in immediately.
pub fn register(request: &RegisterRequest) -> ApiRequest {
    ApiRequest::post(format!("{API_PREFIX}/auth/register"), request)
}

/// Fetch the identity behind the current token.
pub fn me() -> ApiRequest {
    ApiRequest::get(format!("{API_PREFIX}/auth/me"))
}
