//! superpowers-tools: Agent-callable skill tools.
//!
//! Provides:
//! - `use_skill` — resolve a skill and insert it into the calling session
//! - `find_skills` — list skills from every root with their namespaces
//! - Tool context and output types shared by the handlers

pub mod context;
pub mod tools;

pub use context::{ToolContext, ToolError, ToolOutput};
pub use tools::{SKILL_TOOLS, ToolSpec, execute, find_tool};
