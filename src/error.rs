//! # Endpoint Errors
//!
//! This module defines errors returned by the verification offer endpoints.

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Errors returned by the verification offer endpoints.
#[derive(Error, Debug, Deserialize)]
pub enum Error {
    /// The request is missing a required parameter, includes an unsupported
    /// parameter value, or is otherwise malformed. Offer construction fails
    /// with this error before anything is saved.
    #[error(r#"{{"error": "invalid_request", "error_description": "{0}"}}"#)]
    InvalidRequest(String),

    /// No verification offer is saved under the requested identifier. Covers
    /// identifiers that were never saved as well as syntactically invalid
    /// ones.
    #[error(r#"{{"error": "not_found", "error_description": "{0}"}}"#)]
    NotFound(String),

    /// An offer with the same identifier but different contents has already
    /// been saved. Saved offers are immutable.
    #[error(r#"{{"error": "conflict", "error_description": "{0}"}}"#)]
    Conflict(String),

    /// The server encountered an unexpected condition that prevented it from
    /// fulfilling the request.
    #[error(r#"{{"error": "server_error", "error_description": "{0}"}}"#)]
    ServerError(String),
}

/// Error response returned to callers of the verification offer endpoints.
#[allow(clippy::module_name_repetitions)]
#[derive(Deserialize, Serialize)]
pub struct ErrorResponse {
    /// Error code.
    pub error: String,

    /// Error description.
    pub error_description: String,
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::Error as SerdeError;

        let Ok(error) = serde_json::from_str::<ErrorResponse>(&self.to_string()) else {
            return Err(SerdeError::custom("issue serializing error"));
        };
        error.serialize(serializer)
    }
}

impl Error {
    /// Transform error to a JSON object.
    #[must_use]
    pub fn to_json(self) -> serde_json::Value {
        serde_json::from_str(&self.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    // Test that error details are returned as json.
    #[test]
    fn err_json() {
        let err = Error::InvalidRequest("bad request".into());
        let ser: Value = serde_json::from_str(&err.to_string()).unwrap();
        assert_eq!(ser, json!({"error":"invalid_request", "error_description": "bad request"}));
    }

    // Test that errors serialize to the external response shape.
    #[test]
    fn err_serialize() {
        let err = Error::NotFound("no offer found for id: invalid".into());
        let ser = serde_json::to_value(&err).unwrap();
        assert_eq!(
            ser,
            json!({"error":"not_found", "error_description": "no offer found for id: invalid"})
        );
    }
}
