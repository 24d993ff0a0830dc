//! Tool invocation context and results.

use std::sync::Arc;

use thiserror::Error;

use superpowers_skills::SkillLibrary;
use superpowers_types::{SessionHost, SyntheticMessage};

/// State a tool handler may use.
#[derive(Clone)]
pub struct ToolContext {
    /// Session the tool call belongs to.
    pub session_id: String,
    /// Agent that issued the call, if the host reports one.
    pub agent: Option<String>,
    pub library: Arc<SkillLibrary>,
}

impl ToolContext {
    pub fn new(session_id: impl Into<String>, library: Arc<SkillLibrary>) -> Self {
        Self {
            session_id: session_id.into(),
            agent: None,
            library,
        }
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }
}

/// What a handler produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Tool result returned to the model.
    pub text: String,
    /// Messages the host should insert into the calling session.
    pub messages: Vec<SyntheticMessage>,
    /// Result to return instead of `text` when the messages cannot be inserted.
    pub fallback: Option<String>,
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            messages: Vec::new(),
            fallback: None,
        }
    }

    /// Insert any messages through `host` and return the final tool result.
    pub fn deliver(self, ctx: &ToolContext, host: &dyn SessionHost) -> String {
        if self.messages.is_empty() {
            return self.text;
        }

        match host.insert_messages(&ctx.session_id, ctx.agent.as_deref(), &self.messages) {
            Ok(()) => self.text,
            Err(e) => {
                tracing::warn!(session = %ctx.session_id, "Message insertion failed: {e}");
                self.fallback.unwrap_or(self.text)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),
    #[error("failed to load skill '{skill}': {reason}")]
    Load { skill: String, reason: String },
}
