// ABOUTME: Chat message model for the friends screen
// ABOUTME: Plain text messages and shared-workout messages share one shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a message carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Plain chat text
    #[default]
    Text,
    /// A workout shared into the conversation
    Workout,
}

/// One chat message between two users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Stable identifier
    pub id: String,
    /// Sending user id
    pub sender_id: String,
    /// Receiving user id
    pub receiver_id: String,
    /// Message body; for workout messages, the workout name
    pub text: String,
    /// Message kind
    #[serde(rename = "type", default)]
    pub kind: MessageKind,
    /// When the message was sent
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// New plain text message
    pub fn text(
        sender_id: impl Into<String>,
        receiver_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender_id: sender_id.into(),
            receiver_id: receiver_id.into(),
            text: text.into(),
            kind: MessageKind::Text,
            timestamp: Utc::now(),
        }
    }

    /// New shared-workout message
    pub fn workout(
        sender_id: impl Into<String>,
        receiver_id: impl Into<String>,
        workout_name: impl Into<String>,
    ) -> Self {
        Self {
            kind: MessageKind::Workout,
            ..Self::text(sender_id, receiver_id, workout_name)
        }
    }

    /// Whether this message belongs to the conversation between two users
    pub fn is_between(&self, user_a: &str, user_b: &str) -> bool {
        (self.sender_id == user_a && self.receiver_id == user_b)
            || (self.sender_id == user_b && self.receiver_id == user_a)
    }
}
