//! Hook event types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Session lifecycle events the skills layer reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HookEvent {
    /// A new session has been created, before its first user message.
    SessionCreated { session_id: String },
    /// A session's context has been compacted.
    SessionCompacted { session_id: String },
}

impl HookEvent {
    pub fn session_id(&self) -> &str {
        match self {
            HookEvent::SessionCreated { session_id } | HookEvent::SessionCompacted { session_id } => {
                session_id
            }
        }
    }

    /// Name of the host event this corresponds to.
    pub fn kind(&self) -> &'static str {
        match self {
            HookEvent::SessionCreated { .. } => "session.created",
            HookEvent::SessionCompacted { .. } => "session.compacted",
        }
    }

    /// Interpret a raw host event payload.
    ///
    /// The session id may sit at `properties.info.id`, `properties.sessionID`
    /// or `session.id` depending on the event. Returns `None` for other event
    /// types or when no session id is present.
    pub fn from_host_event(event: &Value) -> Option<Self> {
        let session_id = [
            event.pointer("/properties/info/id"),
            event.pointer("/properties/sessionID"),
            event.pointer("/session/id"),
        ]
        .into_iter()
        .flatten()
        .find_map(|v| v.as_str().filter(|id| !id.is_empty()))?
        .to_string();

        match event.get("type")?.as_str()? {
            "session.created" => Some(HookEvent::SessionCreated { session_id }),
            "session.compacted" => Some(HookEvent::SessionCompacted { session_id }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_host_event_id_locations() {
        let created = json!({"type": "session.created", "properties": {"info": {"id": "s1"}}});
        assert_eq!(
            HookEvent::from_host_event(&created),
            Some(HookEvent::SessionCreated { session_id: "s1".into() })
        );

        let compacted = json!({"type": "session.compacted", "properties": {"sessionID": "s2"}});
        assert_eq!(
            HookEvent::from_host_event(&compacted),
            Some(HookEvent::SessionCompacted { session_id: "s2".into() })
        );

        let nested = json!({"type": "session.created", "session": {"id": "s3"}});
        assert_eq!(HookEvent::from_host_event(&nested).unwrap().session_id(), "s3");
    }

    #[test]
    fn test_from_host_event_skips_empty_ids() {
        let event = json!({
            "type": "session.created",
            "properties": {"info": {"id": ""}, "sessionID": "s2"}
        });
        assert_eq!(HookEvent::from_host_event(&event).unwrap().session_id(), "s2");

        let blank = json!({"type": "session.created", "properties": {"info": {"id": ""}}});
        assert_eq!(HookEvent::from_host_event(&blank), None);
    }

    #[test]
    fn test_from_host_event_ignores_others() {
        let other = json!({"type": "message.updated", "properties": {"sessionID": "s1"}});
        assert_eq!(HookEvent::from_host_event(&other), None);

        let no_id = json!({"type": "session.created", "properties": {}});
        assert_eq!(HookEvent::from_host_event(&no_id), None);
    }

    #[test]
    fn test_serde_shape() {
        let event = HookEvent::SessionCompacted { session_id: "abc".into() };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value, json!({"type": "session_compacted", "session_id": "abc"}));
        assert_eq!(event.kind(), "session.compacted");
    }
}
