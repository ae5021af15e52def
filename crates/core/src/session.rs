//! Session state and its durable store
//!
//! The session is the single source of truth for the current authentication
//! state. Every mutation is written through a [`SessionStore`] so a fresh
//! process can rehydrate the last known session before any network call.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CoreResult;
use crate::types::{User, UserPatch};

/// Snapshot of the authentication session.
///
/// Either everything is set (`is_authenticated == true`) or nothing is;
/// partial states are unrepresentable through [`SessionManager`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_authenticated: bool,
}

impl Session {
    fn is_empty(&self) -> bool {
        self.user.is_none()
            && self.access_token.is_none()
            && self.refresh_token.is_none()
            && !self.is_authenticated
    }

    /// User and both tokens present together.
    fn is_complete(&self) -> bool {
        self.is_authenticated
            && self.user.is_some()
            && self.access_token.is_some()
            && self.refresh_token.is_some()
    }
}

/// Durable key-value persistence for the session.
///
/// Implementations own the storage location (e.g. a single `localStorage`
/// entry in the browser); the manager only sees load/save/clear.
pub trait SessionStore {
    /// Load the persisted session, if any.
    fn load(&self) -> CoreResult<Option<Session>>;

    /// Persist the given session, replacing any previous entry.
    fn save(&self, session: &Session) -> CoreResult<()>;

    /// Remove the persisted session.
    fn clear(&self) -> CoreResult<()>;
}

impl<S: SessionStore> SessionStore for Rc<S> {
    fn load(&self) -> CoreResult<Option<Session>> {
        (**self).load()
    }

    fn save(&self, session: &Session) -> CoreResult<()> {
        (**self).save(session)
    }

    fn clear(&self) -> CoreResult<()> {
        (**self).clear()
    }
}

/// In-process store for tests and native tooling.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entry: RefCell<Option<Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> CoreResult<Option<Session>> {
        Ok(self.entry.borrow().clone())
    }

    fn save(&self, session: &Session) -> CoreResult<()> {
        *self.entry.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        *self.entry.borrow_mut() = None;
        Ok(())
    }
}

/// Handle returned by [`SessionManager::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

/// Change listener invoked with a snapshot after every applied mutation.
pub type Listener = Box<dyn Fn(&Session)>;

/// Single owner of the session state.
///
/// Mutations are atomic single-step replacements; readers always observe a
/// full snapshot. The manager is single-threaded (event-loop driven) and is
/// shared via `Rc` between the API client and view code. A token rotation
/// only affects requests dispatched after it; in-flight requests keep the
/// token they read at dispatch.
///
/// Listeners must not subscribe or unsubscribe from within their callback.
pub struct SessionManager {
    state: RefCell<Session>,
    store: Box<dyn SessionStore>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener: Cell<u64>,
}

impl SessionManager {
    /// Create an empty session backed by the given store.
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self {
            state: RefCell::new(Session::default()),
            store,
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
        }
    }

    /// Rehydrate from the durable store.
    ///
    /// Only a fully-authenticated persisted session is accepted; an
    /// incomplete entry is discarded so the all-or-nothing invariant holds
    /// even against a tampered store. Returns whether a session was restored.
    pub fn restore(&self) -> bool {
        match self.store.load() {
            Ok(Some(persisted)) if persisted.is_complete() => {
                *self.state.borrow_mut() = persisted;
                self.notify();
                true
            }
            Ok(Some(_)) => {
                warn!("discarding incomplete persisted session");
                if let Err(err) = self.store.clear() {
                    warn!("failed to clear persisted session: {err}");
                }
                false
            }
            Ok(None) => false,
            Err(err) => {
                warn!("failed to load persisted session: {err}");
                false
            }
        }
    }

    /// Replace the whole session after a successful credential exchange.
    ///
    /// Tokens are opaque; no format validation is performed.
    pub fn set_auth(
        &self,
        user: User,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) {
        *self.state.borrow_mut() = Session {
            user: Some(user),
            access_token: Some(access_token.into()),
            refresh_token: Some(refresh_token.into()),
            is_authenticated: true,
        };
        self.persist();
        self.notify();
    }

    /// Wipe the session.
    ///
    /// Calling this on an already-empty session is a no-op: nothing is
    /// written and listeners are not notified.
    pub fn clear_auth(&self) {
        if self.state.borrow().is_empty() {
            return;
        }
        *self.state.borrow_mut() = Session::default();
        if let Err(err) = self.store.clear() {
            warn!("failed to clear persisted session: {err}");
        }
        self.notify();
    }

    /// Merge identity fields into the current user.
    ///
    /// Without a signed-in user this does nothing; a patch never creates
    /// one. Tokens and the authenticated flag are untouched.
    pub fn update_user(&self, patch: UserPatch) {
        {
            let mut state = self.state.borrow_mut();
            let Some(user) = state.user.as_mut() else {
                debug!("ignoring identity patch: no user in session");
                return;
            };
            user.apply(patch);
        }
        self.persist();
        self.notify();
    }

    /// Atomic snapshot of the current session.
    ///
    /// Usable from plain request-construction code, outside any rendering
    /// context.
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Access token as of this instant.
    pub fn access_token(&self) -> Option<String> {
        self.state.borrow().access_token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    /// Register a change listener, run after every applied mutation.
    pub fn subscribe(&self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }

    fn persist(&self) {
        let state = self.state.borrow();
        if let Err(err) = self.store.save(&state) {
            warn!("failed to persist session: {err}");
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for (_, listener) in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("state", &self.state.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use mockall::mock;

    mock! {
        Store {}

        impl SessionStore for Store {
            fn load(&self) -> CoreResult<Option<Session>>;
            fn save(&self, session: &Session) -> CoreResult<()>;
            fn clear(&self) -> CoreResult<()>;
        }
    }

    fn test_user() -> User {
        User {
            id: "1".into(),
            email: "a@b.com".into(),
            username: "ab".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            is_active: true,
        }
    }

    fn manager_with_shared_store() -> (SessionManager, Rc<MemoryStore>) {
        let store = Rc::new(MemoryStore::new());
        let manager = SessionManager::new(Box::new(Rc::clone(&store)));
        (manager, store)
    }

    #[test]
    fn set_then_clear_leaves_everything_absent() {
        let (manager, store) = manager_with_shared_store();

        manager.set_auth(test_user(), "tok1", "ref1");
        assert!(manager.is_authenticated());

        manager.clear_auth();
        let session = manager.snapshot();
        assert!(session.user.is_none());
        assert!(session.access_token.is_none());
        assert!(session.refresh_token.is_none());
        assert!(!session.is_authenticated);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn clear_on_empty_session_is_a_noop() {
        let (manager, _store) = manager_with_shared_store();
        let notified = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&notified);
        manager.subscribe(Box::new(move |_| counter.set(counter.get() + 1)));

        manager.clear_auth();
        assert_eq!(notified.get(), 0);

        manager.set_auth(test_user(), "tok", "ref");
        manager.clear_auth();
        manager.clear_auth();
        assert_eq!(notified.get(), 2);
    }

    #[test]
    fn patch_without_user_never_synthesizes_one() {
        let (manager, store) = manager_with_shared_store();

        manager.update_user(UserPatch {
            first_name: Some("Z".into()),
            ..UserPatch::default()
        });

        assert!(manager.snapshot().user.is_none());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn patch_changes_only_named_fields() {
        let (manager, _store) = manager_with_shared_store();
        manager.set_auth(test_user(), "tok1", "ref1");

        manager.update_user(UserPatch {
            first_name: Some("Z".into()),
            ..UserPatch::default()
        });

        let session = manager.snapshot();
        let user = session.user.unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.username, "ab");
        assert_eq!(user.first_name, "Z");
        assert_eq!(user.last_name, "B");
        assert!(user.is_active);
        assert_eq!(session.access_token.as_deref(), Some("tok1"));
        assert_eq!(session.refresh_token.as_deref(), Some("ref1"));
        assert!(session.is_authenticated);
    }

    #[test]
    fn every_mutation_is_persisted() {
        let (manager, store) = manager_with_shared_store();

        manager.set_auth(test_user(), "tok1", "ref1");
        assert_eq!(store.load().unwrap(), Some(manager.snapshot()));

        manager.update_user(UserPatch {
            last_name: Some("C".into()),
            ..UserPatch::default()
        });
        let persisted = store.load().unwrap().unwrap();
        assert_eq!(persisted.user.unwrap().last_name, "C");
    }

    #[test]
    fn restore_accepts_a_complete_session() {
        let store = Rc::new(MemoryStore::new());
        store
            .save(&Session {
                user: Some(test_user()),
                access_token: Some("tok1".into()),
                refresh_token: Some("ref1".into()),
                is_authenticated: true,
            })
            .unwrap();

        let manager = SessionManager::new(Box::new(Rc::clone(&store)));
        assert!(manager.restore());
        assert!(manager.is_authenticated());
        assert_eq!(manager.access_token().as_deref(), Some("tok1"));
    }

    #[test]
    fn restore_discards_a_partial_session() {
        let store = Rc::new(MemoryStore::new());
        store
            .save(&Session {
                access_token: Some("tok1".into()),
                ..Session::default()
            })
            .unwrap();

        let manager = SessionManager::new(Box::new(Rc::clone(&store)));
        assert!(!manager.restore());
        assert!(manager.snapshot().user.is_none());
        assert!(!manager.is_authenticated());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn restore_on_empty_store_leaves_session_empty() {
        let (manager, _store) = manager_with_shared_store();
        assert!(!manager.restore());
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn persistence_failure_does_not_lose_the_in_memory_session() {
        let mut store = MockStore::new();
        store
            .expect_save()
            .returning(|_| Err(CoreError::storage("disk full")));
        store.expect_load().returning(|| Ok(None));

        let manager = SessionManager::new(Box::new(store));
        manager.set_auth(test_user(), "tok1", "ref1");

        assert!(manager.is_authenticated());
        assert_eq!(manager.access_token().as_deref(), Some("tok1"));
    }

    #[test]
    fn listeners_observe_mutations_until_unsubscribed() {
        let (manager, _store) = manager_with_shared_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = manager.subscribe(Box::new(move |session: &Session| {
            sink.borrow_mut().push(session.is_authenticated);
        }));

        manager.set_auth(test_user(), "tok1", "ref1");
        manager.clear_auth();
        assert_eq!(*seen.borrow(), vec![true, false]);

        manager.unsubscribe(id);
        manager.set_auth(test_user(), "tok2", "ref2");
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn session_round_trips_through_json() {
        let session = Session {
            user: Some(test_user()),
            access_token: Some("tok1".into()),
            refresh_token: Some("ref1".into()),
            is_authenticated: true,
        };
        let raw = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, session);
    }
}
