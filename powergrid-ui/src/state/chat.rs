//! Copilot Chat Session
//!
//! Idle → Pending → Idle request/response cycle behind the chat view.

use crate::api::{AskOutcome, Citation};

/// Shown in place of an answer when the copilot cannot be reached
pub const FALLBACK_MESSAGE: &str = "Sorry, I could not reach the intelligence service.";

/// What the chat view displays below the input
#[derive(Clone, Debug, PartialEq)]
pub enum ChatReply {
    Answer {
        text: String,
        citations: Vec<Citation>,
    },
    Unreachable,
}

impl ChatReply {
    pub fn text(&self) -> &str {
        match self {
            ChatReply::Answer { text, .. } => text,
            ChatReply::Unreachable => FALLBACK_MESSAGE,
        }
    }

    /// One line per citation, document and section joined by an em dash, in received order
    pub fn citation_lines(&self) -> Vec<String> {
        match self {
            ChatReply::Answer { citations, .. } => citations
                .iter()
                .map(|c| format!("{} — {}", c.document, c.section))
                .collect(),
            ChatReply::Unreachable => Vec::new(),
        }
    }
}

impl From<AskOutcome> for ChatReply {
    fn from(outcome: AskOutcome) -> Self {
        match outcome {
            AskOutcome::Answered(response) => ChatReply::Answer {
                text: response.answer,
                citations: response.citations,
            },
            AskOutcome::Unreachable => ChatReply::Unreachable,
        }
    }
}

/// Chat view state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    query: String,
    pending: bool,
    reply: Option<ChatReply>,
}

impl ChatSession {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn reply(&self) -> Option<&ChatReply> {
        self.reply.as_ref()
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.pending {
            "Thinking..."
        } else {
            "Ask"
        }
    }

    /// Start a request for the current query.
    ///
    /// Returns the question to send, or `None` when the query is empty or a
    /// request is already pending. Whitespace is sent as typed. Clears the
    /// previous reply.
    pub fn submit(&mut self) -> Option<String> {
        if self.pending || self.query.is_empty() {
            return None;
        }

        self.pending = true;
        self.reply = None;
        Some(self.query.clone())
    }

    /// Finish the pending request
    pub fn resolve(&mut self, outcome: AskOutcome) {
        if !self.pending {
            return;
        }

        self.pending = false;
        self.reply = Some(outcome.into());
    }
}
