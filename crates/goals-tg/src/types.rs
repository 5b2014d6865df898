//! Wire types for the Telegram Bot API
//!
//! Every nested field is optional. Telegram delivers many update kinds
//! (edits, channel posts, callback queries) that carry no `message`, and a
//! message may have no `text` or no `from`. Decoding must never fail on
//! those; the relay loop just skips them.

use serde::Deserialize;

/// Envelope for every Bot API response
#[derive(Debug, Clone, Deserialize)]
pub struct TgResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

/// A single update from `getUpdates`
#[derive(Debug, Clone, Deserialize)]
pub struct TgUpdate {
    pub update_id: i64,
    pub message: Option<TgMessage>,
}

/// An incoming message
#[derive(Debug, Clone, Deserialize)]
pub struct TgMessage {
    pub message_id: i64,
    pub chat: TgChat,
    pub from: Option<TgUser>,
    pub text: Option<String>,
}

/// The chat a message arrived in
#[derive(Debug, Clone, Deserialize)]
pub struct TgChat {
    pub id: i64,
    #[serde(rename = "type")]
    pub chat_type: Option<String>,
}

/// The sender of a message
#[derive(Debug, Clone, Deserialize)]
pub struct TgUser {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_update() {
        let json = r#"{
            "update_id": 100,
            "message": {
                "message_id": 7,
                "chat": {"id": 42, "type": "private"},
                "from": {"id": 9, "username": "alice", "first_name": "Alice"},
                "text": "/goals"
            }
        }"#;
        let update: TgUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.update_id, 100);
        let message = update.message.unwrap();
        assert_eq!(message.chat.id, 42);
        assert_eq!(message.text.as_deref(), Some("/goals"));
        assert_eq!(message.from.unwrap().username.as_deref(), Some("alice"));
    }

    #[test]
    fn test_decode_update_without_message() {
        let json = r#"{"update_id": 101, "edited_message": {"message_id": 8}}"#;
        let update: TgUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.update_id, 101);
        assert!(update.message.is_none());
    }

    #[test]
    fn test_decode_message_without_text_or_sender() {
        let json = r#"{
            "update_id": 102,
            "message": {"message_id": 9, "chat": {"id": 5}}
        }"#;
        let update: TgUpdate = serde_json::from_str(json).unwrap();
        let message = update.message.unwrap();
        assert!(message.text.is_none());
        assert!(message.from.is_none());
        assert!(message.chat.chat_type.is_none());
    }
}
