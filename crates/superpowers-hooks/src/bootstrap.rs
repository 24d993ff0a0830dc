//! Bootstrap text injected into new and freshly compacted sessions.

use std::path::Path;

/// Which variant of the bootstrap text to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapMode {
    /// Session start: full tool mapping and naming rules.
    Full,
    /// After compaction: a short reminder to save tokens.
    Compact,
}

fn tool_mapping(mode: BootstrapMode, personal_dir: &Path) -> String {
    match mode {
        BootstrapMode::Compact => "**Tool Mapping:** TodoWrite->update_plan, Task->@mention, Skill->use_skill\n\n\
             **Skills naming (priority order):** project: > personal > superpowers:"
            .to_string(),
        BootstrapMode::Full => format!(
            "**Tool Mapping for OpenCode:**\n\
             When skills reference tools you don't have, substitute OpenCode equivalents:\n\
             - `TodoWrite` → `update_plan`\n\
             - `Task` tool with subagents → Use OpenCode's subagent system (@mention)\n\
             - `Skill` tool → `use_skill` custom tool\n\
             - `Read`, `Write`, `Edit`, `Bash` → Your native tools\n\n\
             **Skills naming (priority order):**\n\
             - Project skills: `project:skill-name` (in .opencode/skills/)\n\
             - Personal skills: `skill-name` (in {}/)\n\
             - Superpowers skills: `superpowers:skill-name`\n\
             - Project skills override personal, which override superpowers when names match",
            personal_dir.display()
        ),
    }
}

/// Wrap the bootstrap skill's body into the injected payload.
pub fn render_bootstrap(
    skill_name: &str,
    content: &str,
    mode: BootstrapMode,
    personal_dir: &Path,
) -> String {
    format!(
        "<EXTREMELY_IMPORTANT>\n\
         You have superpowers.\n\n\
         **IMPORTANT: The {skill_name} skill content is included below. It is ALREADY LOADED - \
         you are currently following it. Do NOT use the use_skill tool to load \"{skill_name}\" - \
         that would be redundant. Use use_skill only for OTHER skills.**\n\n\
         {content}\n\n\
         {mapping}\n\
         </EXTREMELY_IMPORTANT>",
        mapping = tool_mapping(mode, personal_dir),
    )
}
