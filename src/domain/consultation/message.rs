//! Chat transcript messages.
//!
//! Messages are immutable records of user/assistant exchanges. Attachments
//! ride along as opaque bytes; nothing in the crate looks inside them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{MessageId, Timestamp};

/// Role of a message sender in a consultation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Patient input.
    User,
    /// Assistant reply.
    Assistant,
}

/// A file the user attached to a turn.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub media_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }
}

// Byte contents stay out of logs.
impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// An immutable message in a consultation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: MessageId,
    role: Role,
    content: String,
    attachment: Option<Attachment>,
    created_at: Timestamp,
}

impl ChatMessage {
    /// Creates a user message. Content may be empty when an attachment is present.
    pub fn user(content: impl Into<String>, attachment: Option<Attachment>) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::User,
            content: content.into(),
            attachment,
            created_at: Timestamp::now(),
        }
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::Assistant,
            content: content.into(),
            attachment: None,
            created_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_carries_attachment_untouched() {
        let bytes = vec![0xFF, 0xD8, 0xFF, 0x00];
        let attachment = Attachment::new("rash.jpg", "image/jpeg", bytes.clone());
        let msg = ChatMessage::user("", Some(attachment));

        assert_eq!(msg.role(), Role::User);
        assert_eq!(msg.attachment().unwrap().bytes, bytes);
        assert_eq!(msg.attachment().unwrap().media_type, "image/jpeg");
    }

    #[test]
    fn assistant_message_has_no_attachment() {
        let msg = ChatMessage::assistant("How long have you had this?");
        assert_eq!(msg.role(), Role::Assistant);
        assert!(msg.attachment().is_none());
    }

    #[test]
    fn messages_get_distinct_ids() {
        assert_ne!(ChatMessage::assistant("a").id(), ChatMessage::assistant("a").id());
    }

    #[test]
    fn debug_output_hides_bytes() {
        let attachment = Attachment::new("scan.pdf", "application/pdf", vec![1, 2, 3]);
        let rendered = format!("{:?}", attachment);
        assert!(rendered.contains("size: 3"));
        assert!(!rendered.contains("[1, 2, 3]"));
    }

    #[test]
    fn role_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }
}
