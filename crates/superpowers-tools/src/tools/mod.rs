//! Skill tool implementations.
//!
//! Each tool is a `{name, description, parameters, handler}` entry in
//! [`SKILL_TOOLS`]; hosts register the table however their API wants.

pub mod find_skills;
pub mod use_skill;

use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::Value;

use crate::context::{ToolContext, ToolError, ToolOutput};

/// Handler signature shared by all skill tools.
pub type ToolHandler = fn(&ToolContext, &Value) -> Result<ToolOutput, ToolError>;

/// A tool definition plus its handler.
#[derive(Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON schema of the arguments object.
    pub parameters: Value,
    #[serde(skip)]
    pub handler: ToolHandler,
}

impl std::fmt::Debug for ToolSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSpec")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// All skill tools.
pub static SKILL_TOOLS: Lazy<Vec<ToolSpec>> = Lazy::new(|| {
    vec![
        ToolSpec {
            name: use_skill::NAME,
            description: use_skill::DESCRIPTION,
            parameters: use_skill::parameters(),
            handler: use_skill::execute,
        },
        ToolSpec {
            name: find_skills::NAME,
            description: find_skills::DESCRIPTION,
            parameters: find_skills::parameters(),
            handler: find_skills::execute,
        },
    ]
});

/// Look a tool up by name.
pub fn find_tool(name: &str) -> Option<&'static ToolSpec> {
    SKILL_TOOLS.iter().find(|t| t.name == name)
}

/// Run a tool by name.
pub fn execute(name: &str, ctx: &ToolContext, params: &Value) -> Result<ToolOutput, ToolError> {
    let tool = find_tool(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
    (tool.handler)(ctx, params)
}
