/**
 * Session Middleware
 *
 * This module attaches a server-side session to every API request.
 *
 * The middleware:
 * 1. Reads the `blogwaka.sid` cookie from the Cookie header(s)
 * 2. Verifies its signature and expiry
 * 3. Reuses the session it names if still live, or starts a new one
 * 4. Inserts a `Session` into request extensions for the handlers
 * 5. Sets the cookie on the response when a session was started
 *
 * Requests are never rejected here; a bad cookie just yields a fresh session.
 */

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{sign_session_id, verify_session_token, Session, SESSION_COOKIE};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Session middleware
///
/// # Errors
///
/// Fails only if a new session cookie cannot be signed or encoded as a
/// header, which is reported through the usual error envelope.
pub async fn session_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let config = &app_state.config;
    let sessions = &app_state.sessions;

    let existing = match cookie_value(request.headers(), SESSION_COOKIE) {
        Some(token) => verify_session_token(token, &config.session_secret),
        None => None,
    };

    let live = match existing {
        Some(id) => sessions.is_live(id).await.then_some(id),
        None => None,
    };

    let (session_id, new_cookie) = match live {
        Some(id) => (id, None),
        None => {
            let id = sessions.create(config.session_ttl_secs).await;
            let token = sign_session_id(id, &config.session_secret, config.session_ttl_secs)?;
            tracing::debug!("Started session {}", id);
            (id, Some(session_cookie(&token, config.session_ttl_secs)?))
        }
    };

    request
        .extensions_mut()
        .insert(Session::new(session_id, sessions.clone()));

    let mut response = next.run(request).await;
    if let Some(cookie) = new_cookie {
        response.headers_mut().append(SET_COOKIE, cookie);
    }

    Ok(response)
}

/// Find a cookie by name across every Cookie header
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
}

fn session_cookie(token: &str, ttl_secs: u64) -> Result<HeaderValue, BackendError> {
    let cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl_secs}"
    );
    Ok(HeaderValue::from_str(&cookie)?)
}
