//! `find_skills` tool — list every available skill.

use std::fmt::Write;

use serde_json::{Value, json};

use superpowers_types::SkillDescriptor;

use crate::context::{ToolContext, ToolError, ToolOutput};

pub const NAME: &str = "find_skills";

pub const DESCRIPTION: &str =
    "List all available skills in the project, personal, and superpowers skill libraries.";

pub fn parameters() -> Value {
    json!({
        "type": "object",
        "properties": {},
        "required": []
    })
}

pub fn execute(ctx: &ToolContext, _params: &Value) -> Result<ToolOutput, ToolError> {
    let skills = ctx.library.resolve_all();

    if skills.is_empty() {
        let roots = ctx.library.roots();
        return Ok(ToolOutput::text(format!(
            "No skills found. Install superpowers skills to {}/ or add personal skills to {}/",
            roots.superpowers.display(),
            roots.personal.display()
        )));
    }

    Ok(ToolOutput::text(format_listing(&skills)))
}

/// Render skills as `Available skills:` followed by one block per skill.
pub fn format_listing(skills: &[SkillDescriptor]) -> String {
    let mut output = String::from("Available skills:\n\n");
    for skill in skills {
        let _ = writeln!(output, "{}", skill.qualified_name());
        if let Some(description) = &skill.description {
            let _ = writeln!(output, "  {description}");
        }
        let _ = writeln!(output, "  Directory: {}\n", skill.path.display());
    }
    output
}
