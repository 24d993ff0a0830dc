//! A `SessionHost` that prints synthetic messages instead of inserting them.

use std::io::Write;

use superpowers_types::{SessionHost, SyntheticMessage};

pub struct StdoutHost;

impl SessionHost for StdoutHost {
    fn insert_messages(
        &self,
        session_id: &str,
        agent: Option<&str>,
        messages: &[SyntheticMessage],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut out = std::io::stdout().lock();
        for message in messages {
            match agent {
                Some(agent) => writeln!(out, "--- synthetic message (session {session_id}, agent {agent}) ---")?,
                None => writeln!(out, "--- synthetic message (session {session_id}) ---")?,
            }
            writeln!(out, "{}\n", message.text)?;
        }
        Ok(())
    }
}
