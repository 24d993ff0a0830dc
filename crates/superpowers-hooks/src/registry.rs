//! Session hooks — turn lifecycle events into text the host injects.

use std::sync::Arc;

use superpowers_skills::SkillLibrary;
use superpowers_types::{SessionHost, SyntheticMessage};

use crate::bootstrap::{BootstrapMode, render_bootstrap};
use crate::events::HookEvent;

/// Text to insert into a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    pub session_id: String,
    pub text: String,
}

/// Produces bootstrap payloads for session lifecycle events.
///
/// Nothing here talks to the host; callers pass the returned [`Injection`]
/// to [`deliver`] or their own transport.
pub struct SessionHooks {
    library: Arc<SkillLibrary>,
    bootstrap_skill: String,
}

impl SessionHooks {
    pub fn new(library: Arc<SkillLibrary>, bootstrap_skill: impl Into<String>) -> Self {
        Self {
            library,
            bootstrap_skill: bootstrap_skill.into(),
        }
    }

    /// Build the bootstrap text, or `None` if the bootstrap skill is not
    /// installed (or cannot be read).
    ///
    /// The project root is never consulted for the bootstrap skill.
    pub fn bootstrap_content(&self, mode: BootstrapMode) -> Option<String> {
        let loaded = match self.library.load_shared(&self.bootstrap_skill) {
            Ok(Some(loaded)) => loaded,
            Ok(None) => {
                tracing::debug!(skill = %self.bootstrap_skill, "Bootstrap skill not installed");
                return None;
            }
            Err(e) => {
                tracing::warn!(skill = %self.bootstrap_skill, "Failed to load bootstrap skill: {e:#}");
                return None;
            }
        };

        Some(render_bootstrap(
            &self.bootstrap_skill,
            &loaded.content,
            mode,
            &self.library.roots().personal,
        ))
    }

    pub fn on_session_start(&self, session_id: &str) -> Option<Injection> {
        self.inject(session_id, BootstrapMode::Full)
    }

    pub fn on_context_compacted(&self, session_id: &str) -> Option<Injection> {
        self.inject(session_id, BootstrapMode::Compact)
    }

    /// Dispatch an event to the matching hook.
    pub fn handle(&self, event: &HookEvent) -> Option<Injection> {
        tracing::debug!(event = event.kind(), session = %event.session_id(), "Hook event");
        match event {
            HookEvent::SessionCreated { session_id } => self.on_session_start(session_id),
            HookEvent::SessionCompacted { session_id } => self.on_context_compacted(session_id),
        }
    }

    fn inject(&self, session_id: &str, mode: BootstrapMode) -> Option<Injection> {
        if session_id.is_empty() {
            return None;
        }
        let text = self.bootstrap_content(mode)?;
        Some(Injection {
            session_id: session_id.to_string(),
            text,
        })
    }
}

/// Hand an injection to the host. Returns whether the host accepted it.
pub fn deliver(injection: &Injection, host: &dyn SessionHost) -> bool {
    let messages = [SyntheticMessage::new(injection.text.clone())];
    match host.insert_messages(&injection.session_id, None, &messages) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(session = %injection.session_id, "Failed to inject bootstrap: {e}");
            false
        }
    }
}
