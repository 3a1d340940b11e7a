/**
 * Error Conversion
 *
 * This module turns backend errors and envelopes into HTTP responses.
 *
 * # Response Format
 *
 * Errors are reported inside the regular response envelope with a `200 OK`
 * status, the way the front-end expects every blog API answer:
 *
 * ```json
 * {
 *   "errorCode": 11000,
 *   "data": "该用户已注册"
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::backend::error::types::BackendError;
use crate::shared::response::Envelope;

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl IntoResponse for BackendError {
    /// Log the error and report it as `{errorCode, data}`
    ///
    /// This is the single place where request failures are logged.
    fn into_response(self) -> Response {
        let code = self.error_code();
        let message = self.message();
        tracing::error!(error_code = code, "Request failed: {}", self);

        Envelope::with_raw_code(code, message).into_response()
    }
}
