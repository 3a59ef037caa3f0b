use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Session, SessionId};

/// A live session. Holding the lock serializes actions on that session.
pub type SessionHandle = Arc<Mutex<Session>>;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: Session) -> SessionHandle;

    async fn get(&self, id: SessionId) -> Option<SessionHandle>;

    /// Returns `false` when no session with `id` existed.
    async fn remove(&self, id: SessionId) -> bool;

    async fn count(&self) -> usize;
}
