//! Shared response types for API handlers.

use serde::Serialize;

/// Plain `{ "message": ... }` acknowledgement body, returned by update and
/// delete regardless of whether a row matched.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
