//! Page/Worker Wire Messages
//!
//! The small command vocabulary posted from the page to the offline
//! worker, and the push notification payload the worker renders.

use serde::{Deserialize, Serialize};

/// Commands the page can post to the worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ControlMessage {
    /// Activate a waiting worker version immediately
    SkipWaiting,
    /// Drop every cache bucket, current version included
    ClearCaches,
}

/// Push notification payload; missing fields fall back to defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushPayload {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Opened when the notification is clicked
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for PushPayload {
    fn default() -> Self {
        Self {
            title: default_title(),
            body: String::new(),
            url: default_url(),
        }
    }
}

fn default_title() -> String {
    "Bingo".to_string()
}

fn default_url() -> String {
    "/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_messages_use_tagged_form() {
        let json = serde_json::to_string(&ControlMessage::SkipWaiting).unwrap();
        assert_eq!(json, r#"{"type":"skip-waiting"}"#);
        let back: ControlMessage = serde_json::from_str(r#"{"type":"clear-caches"}"#).unwrap();
        assert_eq!(back, ControlMessage::ClearCaches);
    }

    #[test]
    fn unknown_control_message_is_an_error() {
        assert!(serde_json::from_str::<ControlMessage>(r#"{"type":"reboot"}"#).is_err());
    }

    #[test]
    fn push_payload_defaults_missing_fields() {
        let payload: PushPayload = serde_json::from_str(r#"{"body":"new boards!"}"#).unwrap();
        assert_eq!(payload.title, "Bingo");
        assert_eq!(payload.body, "new boards!");
        assert_eq!(payload.url, "/");
    }
}
