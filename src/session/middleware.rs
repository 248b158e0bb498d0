//! Per-request session middleware.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::http::server::AppState;
use crate::lifecycle::TerminationEvent;
use crate::session::cookie;
use crate::session::store::SessionRecord;

/// Context attached to every request after the middleware ran.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub id: String,
    /// True when the session was created by this request.
    pub fresh: bool,
}

/// Load the request's session or create a fresh one, setting the cookie on
/// the way out when a new session was issued.
///
/// A store failure answers 500 and escalates through the termination
/// channel: any unhandled failure tears the whole process down.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let presented_id = req
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(cookie::from_header)
        .and_then(|value| cookie::verify(&state.config.secret, value))
        .map(str::to_owned);

    let existing = match presented_id {
        Some(id) => match state.sessions.load(&id).await {
            Ok(record) => record,
            Err(err) => {
                tracing::error!(error = %err, "Session store read failed");
                state.shutdown.raise(TerminationEvent::UnhandledError);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        },
        None => None,
    };

    let (context, issued) = match existing {
        Some(record) => (SessionContext { id: record.id, fresh: false }, None),
        None => {
            let record = SessionRecord::new(Uuid::new_v4().to_string());
            if let Err(err) = state.sessions.save(&record).await {
                tracing::error!(error = %err, "Session store write failed");
                state.shutdown.raise(TerminationEvent::UnhandledError);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
            let value = cookie::encode(&state.config.secret, &record.id);
            (
                SessionContext { id: record.id, fresh: true },
                Some(cookie::set_cookie_value(&value)),
            )
        }
    };

    req.extensions_mut().insert(context);
    let mut response = next.run(req).await;

    if let Some(set_cookie) = issued {
        match header::HeaderValue::from_str(&set_cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(err) => tracing::error!(error = %err, "Session cookie not header-safe"),
        }
    }

    response
}
