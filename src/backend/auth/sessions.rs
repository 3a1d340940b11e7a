/**
 * Session Management
 *
 * This module holds server-side sessions and signs the cookie that selects
 * them.
 *
 * # Design
 *
 * - Session records live in memory (`SessionStore`), keyed by a random id.
 * - The cookie carries only the id, wrapped in an HS256 JWT so a client
 *   cannot forge or extend it.
 * - A session is created for every visitor on first contact; login records
 *   the username in it.
 * - Expired records are dropped by `purge_expired`, which the server runs
 *   periodically.
 */

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Name of the cookie carrying the signed session id
pub const SESSION_COOKIE: &str = "blogwaka.sid";

// Ten years; longer lifetimes are clamped.
const MAX_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Session cookie claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Session id
    pub sid: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Sign a session id for the cookie
///
/// # Arguments
/// * `session_id` - Session to point at
/// * `secret` - Signing key
/// * `ttl_secs` - Cookie lifetime in seconds
pub fn sign_session_id(
    session_id: Uuid,
    secret: &str,
    ttl_secs: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp().max(0) as u64;

    let claims = Claims {
        sid: session_id.to_string(),
        exp: now + ttl_secs.min(MAX_TTL_SECS),
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), &claims, &key)
}

/// Verify a session cookie and extract its session id
///
/// Returns `None` for tampered, expired, or malformed cookies; the caller
/// then starts a fresh session.
pub fn verify_session_token(token: &str, secret: &str) -> Option<Uuid> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let claims = match decode::<Claims>(token, &key, &Validation::default()) {
        Ok(data) => data.claims,
        Err(e) => {
            tracing::debug!("Rejected session cookie: {:?}", e);
            return None;
        }
    };

    Uuid::parse_str(&claims.sid).ok()
}

#[derive(Debug, Clone)]
struct SessionRecord {
    username: Option<String>,
    expires_at: DateTime<Utc>,
}

/// In-memory session store shared by all requests
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    records: Arc<RwLock<HashMap<Uuid, SessionRecord>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an anonymous session living `ttl_secs` seconds
    pub async fn create(&self, ttl_secs: u64) -> Uuid {
        let id = Uuid::new_v4();
        let ttl = Duration::seconds(ttl_secs.min(MAX_TTL_SECS) as i64);
        let record = SessionRecord {
            username: None,
            expires_at: Utc::now() + ttl,
        };
        self.records.write().await.insert(id, record);
        id
    }

    /// Whether `id` names a session that has not expired
    pub async fn is_live(&self, id: Uuid) -> bool {
        let now = Utc::now();
        self.records
            .read()
            .await
            .get(&id)
            .is_some_and(|record| record.expires_at > now)
    }

    /// Record the logged-in user of a session
    ///
    /// Returns `false` if the session no longer exists.
    pub async fn set_user(&self, id: Uuid, username: &str) -> bool {
        match self.records.write().await.get_mut(&id) {
            Some(record) => {
                record.username = Some(username.to_string());
                true
            }
            None => false,
        }
    }

    /// Logged-in user of a session, if any
    pub async fn user(&self, id: Uuid) -> Option<String> {
        self.records
            .read()
            .await
            .get(&id)
            .and_then(|record| record.username.clone())
    }

    /// Drop expired sessions, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| record.expires_at > now);
        before - records.len()
    }

    /// Number of sessions held (live or not yet purged)
    pub(crate) async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

/// Handle on the current request's session
///
/// Inserted into request extensions by the session middleware.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    store: SessionStore,
}

impl Session {
    pub fn new(id: Uuid, store: SessionStore) -> Self {
        Self { id, store }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Remember who logged in with this session
    pub async fn set_user(&self, username: &str) {
        if !self.store.set_user(self.id, username).await {
            tracing::warn!("Session {} vanished before login could be recorded", self.id);
        }
    }
}
