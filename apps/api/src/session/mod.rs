//! In-memory per-session state.
//!
//! A session is the explicit context object for one user's interaction
//! flow: the optional session-scoped API key, the products found by the
//! last lookup, and the last generated strategy. Nothing is durable —
//! sessions live exactly as long as the process, or until reset.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::catalog::ProductRecord;

pub mod handlers;

/// Transient state for one user session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Key supplied through the password input when no deployment key exists.
    pub api_key: Option<String>,
    /// Products found by the most recent catalog lookup.
    pub products: Vec<ProductRecord>,
    /// The most recent generated strategy, verbatim.
    pub strategy: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    fn new() -> Self {
        Self {
            api_key: None,
            products: Vec::new(),
            strategy: None,
            created_at: Utc::now(),
        }
    }
}

/// Shared handle to all live sessions. Cloning is cheap; all clones see the
/// same map. Critical sections are short and never held across an await.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh session and returns its id.
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner
            .write()
            .expect("session store lock poisoned")
            .insert(id, Session::new());
        id
    }

    /// Returns a snapshot of the session, or `None` if the id is unknown.
    pub fn get(&self, id: Uuid) -> Option<Session> {
        self.inner
            .read()
            .expect("session store lock poisoned")
            .get(&id)
            .cloned()
    }

    /// Stores a session-scoped API key. Returns `false` for unknown ids.
    pub fn set_api_key(&self, id: Uuid, key: String) -> bool {
        let mut sessions = self.inner.write().expect("session store lock poisoned");
        match sessions.get_mut(&id) {
            Some(session) => {
                session.api_key = Some(key);
                true
            }
            None => false,
        }
    }

    /// Records the outcome of a submission: the products the lookup found
    /// and the generated (or failure-marked) strategy text.
    pub fn record_result(
        &self,
        id: Uuid,
        products: Vec<ProductRecord>,
        strategy: String,
    ) -> bool {
        let mut sessions = self.inner.write().expect("session store lock poisoned");
        match sessions.get_mut(&id) {
            Some(session) => {
                session.products = products;
                session.strategy = Some(strategy);
                true
            }
            None => false,
        }
    }

    /// Discards the session entirely — the "New Analysis" reset.
    pub fn remove(&self, id: Uuid) -> bool {
        self.inner
            .write()
            .expect("session store lock poisoned")
            .remove(&id)
            .is_some()
    }
}
