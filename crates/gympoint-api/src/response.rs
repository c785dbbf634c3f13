//! The uniform JSON response envelope.
//!
//! Every response, success or failure, has the shape
//! `{success, message, data?, error?}` with a matching HTTP status.

use serde::Serialize;

/// The success/error wrapper returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    /// Whether the request succeeded.
    pub success: bool,

    /// Human-readable outcome summary.
    pub message: String,

    /// Payload, present on success when the operation yields data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error detail, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// A success envelope carrying data.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    /// A success envelope without a payload.
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    /// A failure envelope with a detail string.
    pub fn err(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_omits_error() {
        let envelope = Envelope::ok("Done", serde_json::json!({"id": 1}));
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Done");
        assert_eq!(json["data"]["id"], 1);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn empty_envelope_omits_data() {
        let envelope: Envelope<()> = Envelope::ok_empty("Deleted");
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json.get("data").is_none());
    }

    #[test]
    fn err_envelope_carries_detail() {
        let envelope: Envelope<()> = Envelope::err("Validation failed", "email is required");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "email is required");
    }
}
