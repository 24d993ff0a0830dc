//! `use_skill` tool — load a skill into the calling session.

use serde::Deserialize;
use serde_json::{Value, json};

use superpowers_types::SyntheticMessage;

use crate::context::{ToolContext, ToolError, ToolOutput};

pub const NAME: &str = "use_skill";

pub const DESCRIPTION: &str = "Load and read a specific skill to guide your work. Skills contain \
     proven workflows, mandatory processes, and expert techniques.";

pub fn parameters() -> Value {
    json!({
        "type": "object",
        "properties": {
            "skill_name": {
                "type": "string",
                "description": "Name of the skill to load (e.g., \"superpowers:brainstorming\", \"my-custom-skill\", or \"project:my-skill\")"
            }
        },
        "required": ["skill_name"]
    })
}

#[derive(Debug, Deserialize)]
struct Args {
    skill_name: String,
}

pub fn execute(ctx: &ToolContext, params: &Value) -> Result<ToolOutput, ToolError> {
    let Args { skill_name } = Args::deserialize(params)?;

    let loaded = match ctx.library.load(&skill_name) {
        Ok(Some(loaded)) => loaded,
        Ok(None) => {
            return Ok(ToolOutput::text(format!(
                "Error: Skill \"{skill_name}\" not found.\n\nRun find_skills to see available skills."
            )));
        }
        Err(e) => {
            return Err(ToolError::Load {
                skill: skill_name,
                reason: format!("{e:#}"),
            });
        }
    };

    let display_name = loaded.metadata.name.as_deref().unwrap_or(skill_name.as_str());
    let header = format!(
        "# {display_name}\n# {}\n# Supporting tools and docs are in {}\n# ============================================",
        loaded.metadata.description.as_deref().unwrap_or_default(),
        loaded.directory.display(),
    );
    let body = format!("{header}\n\n{}", loaded.content);

    tracing::info!(
        skill = %skill_name,
        source = %loaded.resolved.source_type,
        session = %ctx.session_id,
        "Loading skill"
    );

    Ok(ToolOutput {
        text: format!("Launching skill: {display_name}"),
        messages: vec![
            SyntheticMessage::new(format!("Loading skill: {display_name}")),
            SyntheticMessage::new(body.clone()),
        ],
        fallback: Some(body),
    })
}
