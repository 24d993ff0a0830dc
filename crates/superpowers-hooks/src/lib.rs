//! superpowers-hooks: Session lifecycle hooks.
//!
//! When a session is created, or its context is compacted, the
//! `using-superpowers` skill is rendered into a bootstrap payload for the
//! host to insert into that session.

pub mod bootstrap;
pub mod events;
pub mod registry;

pub use bootstrap::BootstrapMode;
pub use events::HookEvent;
pub use registry::{Injection, SessionHooks, deliver};
