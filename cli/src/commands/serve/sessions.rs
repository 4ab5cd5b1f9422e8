//! # Web Session Store
//!
//! File: cli/src/commands/serve/sessions.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/bloombot
//!
//! ## Overview
//!
//! Keeps one `ChatSession` per browser. Browsers are told apart by an opaque
//! random id carried in the `bloombot_session` cookie; nothing else about the
//! visitor is stored. Transcripts live in memory only and disappear when the
//! server stops.
//!
//! The store is the only mutable state shared between request handlers. It
//! is a bounded `moka` cache: at most `max_sessions` transcripts are held,
//! the least recently used one is evicted first, and a transcript nobody has
//! touched for the idle timeout is dropped. Each transcript sits behind its
//! own async `Mutex`, so two browsers never wait on each other. The trained
//! dispatcher is passed in by reference and never locked.
//!
use crate::chat::{ChatEntry, ChatSession, Clock, Exchange};
use crate::intent::Dispatcher;
use axum::http::{header, HeaderMap, HeaderValue};
use moka::policy::EvictionPolicy;
use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "bloombot_session";

/// Most transcripts held at once unless configured otherwise.
pub const DEFAULT_MAX_SESSIONS: u64 = 10_000;

/// How long an untouched transcript is kept unless configured otherwise.
pub const DEFAULT_SESSION_IDLE: Duration = Duration::from_secs(30 * 60);

/// A session id, and whether it was freshly minted for this request
/// (in which case the response must set the cookie).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId {
    pub id: Uuid,
    pub is_new: bool,
}

impl SessionId {
    /// Reads the session id from the request's `Cookie` headers, minting a
    /// new one when the cookie is missing or malformed.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let existing = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok());

        match existing {
            Some(id) => Self { id, is_new: false },
            None => {
                let id = Uuid::new_v4();
                debug!("Starting new chat session {}", id);
                Self { id, is_new: true }
            }
        }
    }

    /// `Set-Cookie` value for this id.
    pub fn cookie(&self) -> Option<HeaderValue> {
        let value = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE, self.id
        );
        match HeaderValue::from_str(&value) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Could not build session cookie header: {}", e);
                None
            }
        }
    }
}

type SharedSession = Arc<Mutex<ChatSession>>;

#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Cache<Uuid, SharedSession>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_IDLE)
    }
}

impl SessionStore {
    /// A store holding at most `max_sessions` transcripts, each dropped after
    /// `idle` without a read or a write.
    pub fn new(max_sessions: u64, idle: Duration) -> Self {
        let sessions = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_idle(idle)
            .eviction_policy(EvictionPolicy::lru())
            .eviction_listener(|id: Arc<Uuid>, _, cause| {
                debug!("Dropping chat session {} ({:?})", id, cause);
            })
            .build();
        Self { sessions }
    }

    /// A copy of the session's transcript (empty for unknown or expired sessions).
    pub async fn entries(&self, id: Uuid) -> Vec<ChatEntry> {
        let Some(session) = self.sessions.get(&id) else {
            return Vec::new();
        };
        let session = session.lock().await;
        session.entries().to_vec()
    }

    /// Submits `text` to the session, creating it on first use.
    ///
    /// Blank input neither creates a session nor appends entries.
    pub async fn submit(
        &self,
        id: Uuid,
        dispatcher: &Dispatcher,
        text: &str,
        clock: &dyn Clock,
    ) -> Option<Exchange> {
        if text.trim().is_empty() {
            return None;
        }
        let shared = self
            .sessions
            .get_with(id, || Arc::new(Mutex::new(ChatSession::new())));
        let mut session = shared.lock().await;
        session.submit(dispatcher, text, clock)
    }

    /// Clears the session's transcript. Unknown sessions are left alone.
    pub async fn clear(&self, id: Uuid) {
        if let Some(shared) = self.sessions.get(&id) {
            shared.lock().await.clear_all();
        }
    }

    /// Number of sessions currently held, after pending evictions have run.
    pub fn session_count(&self) -> u64 {
        self.sessions.run_pending_tasks();
        self.sessions.entry_count()
    }
}
