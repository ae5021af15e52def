//! Campus core types and the session store

pub mod error;
pub mod session;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use session::{ListenerId, MemoryStore, Session, SessionManager, SessionStore};
pub use types::{User, UserPatch};
