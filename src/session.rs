//! Session credential storage.
//!
//! The SDK never owns the session token. It asks a [`SessionStore`] for the
//! current token before every backend request and never writes it back.
//! Persisting the token after `authenticate` and clearing it on logout are
//! the caller's job.

use async_lock::RwLock;
use async_trait::async_trait;
use std::sync::Arc;

/// Read access to a previously persisted session token.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The current session token, if any.
    async fn session_token(&self) -> Option<String>;
}

/// Store that never holds a token. Requests go out without authorization.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSession;

#[async_trait]
impl SessionStore for NoSession {
    async fn session_token(&self) -> Option<String> {
        None
    }
}

/// Process-local token store, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    token: Arc<RwLock<Option<String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }

    pub async fn set(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }

    pub async fn clear(&self) {
        *self.token.write().await = None;
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn session_token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}
