//! Session context and provider

use std::rc::Rc;

use yew::prelude::*;

use campus_core::{Session, SessionManager};
use campus_http::CampusClient;

use crate::client::create_client;
use crate::storage::LocalSessionStore;

/// Shared session handle carried through Yew context.
#[derive(Clone)]
pub struct SessionContext {
    manager: Rc<SessionManager>,
    snapshot: Session,
    /// True until rehydration from durable storage has completed.
    pub loading: bool,
}

impl SessionContext {
    pub fn manager(&self) -> &Rc<SessionManager> {
        &self.manager
    }

    pub fn snapshot(&self) -> &Session {
        &self.snapshot
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.is_authenticated
    }
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.manager, &other.manager)
            && self.snapshot == other.snapshot
            && self.loading == other.loading
    }
}

/// Shared API client carried through Yew context.
#[derive(Clone)]
pub struct ApiContext(pub Rc<CampusClient>);

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Provides the session manager and the configured API client to the
/// subtree.
///
/// The session is rehydrated from durable storage in a mount effect; until
/// that completes consumers observe `loading == true`. Mutations applied
/// through the manager (from anywhere, including the client's 401 handling)
/// reach consumers via the manager's subscription.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let manager = use_memo((), |_| {
        SessionManager::new(Box::new(LocalSessionStore::new()))
    });
    let client = use_memo((), {
        let manager = Rc::clone(&manager);
        move |_| create_client(manager)
    });

    let snapshot = use_state(Session::default);
    let loading = use_state(|| true);

    {
        let manager = Rc::clone(&manager);
        let snapshot = snapshot.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            let observed = snapshot.clone();
            let id = manager.subscribe(Box::new(move |session: &Session| {
                observed.set(session.clone());
            }));

            manager.restore();
            snapshot.set(manager.snapshot());
            loading.set(false);

            let manager = Rc::clone(&manager);
            move || manager.unsubscribe(id)
        });
    }

    let context = SessionContext {
        manager: Rc::clone(&manager),
        snapshot: (*snapshot).clone(),
        loading: *loading,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            <ContextProvider<ApiContext> context={ApiContext(Rc::clone(&client))}>
                { props.children.clone() }
            </ContextProvider<ApiContext>>
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Wrap your component tree in SessionProvider")
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    use_session().is_authenticated()
}

/// Hook to get the configured API client
#[hook]
pub fn use_api_client() -> Rc<CampusClient> {
    use_context::<ApiContext>()
        .expect("ApiContext not found. Wrap your component tree in SessionProvider")
        .0
}
