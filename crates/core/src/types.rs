//! Identity types shared between the session store and the API client

use serde::{Deserialize, Serialize};

/// Identity record of the signed-in account.
///
/// Field names follow the backend wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

/// Partial identity update; `None` fields keep their prior value.
///
/// The id is not patchable; identities are only ever replaced whole via
/// [`SessionManager::set_auth`](crate::session::SessionManager::set_auth).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub email: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_active: Option<bool>,
}

impl User {
    /// Merge a partial update into this record.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}
