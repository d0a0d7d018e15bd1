use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One chat message in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub text: String,
}

/// Append-only conversation history for one interactive session.
/// Never persisted; a new session starts empty.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<ConversationTurn>,
}

impl Transcript {
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(ConversationTurn {
            role: Role::User,
            text: text.into(),
        });
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(ConversationTurn {
            role: Role::Assistant,
            text: text.into(),
        });
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Per-session state owned by the shell.
///
/// The last prediction is deliberately session-scoped, not process-global:
/// a host serving several sessions from one process must never leak one
/// session's forecast into another's chat replies.
#[derive(Debug, Default)]
pub struct Session {
    last_prediction: Option<f64>,
    pub transcript: Transcript,
}

impl Session {
    pub fn record_prediction(&mut self, price: f64) {
        self.last_prediction = Some(price);
    }

    pub fn last_prediction(&self) -> Option<f64> {
        self.last_prediction
    }
}
