/// Data models for chat-service
///
/// View structures produced by the service layer and serialized to the web
/// client. Ids travel as strings in message and directory payloads; chat ids
/// stay numeric.
use serde::Serialize;
use utoipa::ToSchema;

/// Directory entry for the chat list.
///
/// `last_message`, `timestamp` and `unread` are static placeholders; the
/// directory does not compute real conversation metadata.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummary {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub online: bool,
    pub last_message: String,
    pub timestamp: String,
    pub unread: i32,
}

/// One message as seen by a specific viewer.
///
/// `sender` is the perspective label: `"me"` when the stored sender id equals
/// the viewer id, `"other"` otherwise.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: String,
    pub text: Option<String>,
    pub sender: String,
    pub sender_name: String,
    pub timestamp: String,
    pub file_url: Option<String>,
    pub file_type: Option<String>,
}

/// Counterpart profile attached to a message-history response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PeerInfo {
    pub name: String,
    pub avatar: Option<String>,
    pub online: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_view_serializes_camel_case() {
        let view = MessageView {
            id: "7".into(),
            text: Some("hi".into()),
            sender: "me".into(),
            sender_name: "Alice".into(),
            timestamp: "14:05".into(),
            file_url: None,
            file_type: None,
        };
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["senderName"], "Alice");
        assert_eq!(value["fileUrl"], serde_json::Value::Null);
        assert_eq!(value["sender"], "me");
    }

    #[test]
    fn chat_summary_keeps_placeholder_fields() {
        let summary = ChatSummary {
            id: "2".into(),
            name: "Bob".into(),
            avatar: None,
            online: true,
            last_message: "Start a conversation".into(),
            timestamp: "Just now".into(),
            unread: 0,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["lastMessage"], "Start a conversation");
        assert_eq!(value["unread"], 0);
    }
}
