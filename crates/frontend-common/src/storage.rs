//! Durable browser persistence for the session

use campus_core::{CoreError, CoreResult, Session, SessionStore};
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};

use crate::config::AuthConfig;

/// Session store over the browser's `localStorage`.
///
/// The whole session lives in one JSON entry under
/// [`AuthConfig::AUTH_STORAGE_KEY`], so a fresh page load can rehydrate the
/// last known session before any network call completes.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSessionStore;

impl LocalSessionStore {
    pub fn new() -> Self {
        Self
    }
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> CoreResult<Option<Session>> {
        match LocalStorage::get(AuthConfig::AUTH_STORAGE_KEY) {
            Ok(session) => Ok(Some(session)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(CoreError::storage(err.to_string())),
        }
    }

    fn save(&self, session: &Session) -> CoreResult<()> {
        LocalStorage::set(AuthConfig::AUTH_STORAGE_KEY, session)
            .map_err(|err| CoreError::storage(err.to_string()))
    }

    fn clear(&self) -> CoreResult<()> {
        LocalStorage::delete(AuthConfig::AUTH_STORAGE_KEY);
        Ok(())
    }
}
