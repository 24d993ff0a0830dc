use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name of a skill's primary document.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

// ──────────────────── Skill Types ────────────────────

/// Which root a skill was found under.
///
/// Declaration order is priority order: project overrides personal,
/// personal overrides superpowers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Project-local skills (`<project>/.opencode/skills/`).
    Project,
    /// User skills from the config directory.
    Personal,
    /// Skills shipped with the superpowers library.
    Superpowers,
}

impl SourceType {
    /// All source types, highest priority first.
    pub const ALL: [SourceType; 3] = [
        SourceType::Project,
        SourceType::Personal,
        SourceType::Superpowers,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::Project => "project",
            SourceType::Personal => "personal",
            SourceType::Superpowers => "superpowers",
        }
    }

    /// Prefix shown in front of a skill name when listing.
    ///
    /// Personal skills are addressed without a prefix.
    pub fn namespace(self) -> &'static str {
        match self {
            SourceType::Project => "project:",
            SourceType::Personal => "",
            SourceType::Superpowers => "superpowers:",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata parsed from a skill document's header block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SkillMetadata {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// A skill located by a single lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSkill {
    /// Absolute path of the skill's `SKILL.md`.
    pub skill_file: PathBuf,
    /// Root the skill was found under.
    pub source_type: SourceType,
    /// Identifier used for the lookup, namespace prefix removed.
    pub skill_path: String,
}

impl ResolvedSkill {
    /// Directory holding the skill document and its supporting files.
    pub fn directory(&self) -> PathBuf {
        self.skill_file
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default()
    }
}

/// A skill found while enumerating a root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDescriptor {
    /// Display name from the header block, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// One-line summary from the header block, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Skill directory.
    pub path: PathBuf,
    /// The skill's `SKILL.md`.
    pub skill_file: PathBuf,
    pub source_type: SourceType,
}

impl SkillDescriptor {
    /// Name to show for this skill, falling back to the directory name.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }

    /// Display name with the source namespace in front (e.g. `project:tdd`).
    pub fn qualified_name(&self) -> String {
        format!("{}{}", self.source_type.namespace(), self.display_name())
    }
}

// ──────────────────── Host Types ────────────────────

/// A text part the host inserts into a session without expecting a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticMessage {
    pub text: String,
}

impl SyntheticMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The agent host, as seen from skills tooling.
///
/// Implemented by whatever embeds the library (an editor plugin bridge, the
/// CLI's stdout printer, a test recorder).
pub trait SessionHost {
    /// Insert synthetic text parts into a session.
    fn insert_messages(
        &self,
        session_id: &str,
        agent: Option<&str>,
        messages: &[SyntheticMessage],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type_serde() {
        let json = serde_json::to_string(&SourceType::Superpowers).unwrap();
        assert_eq!(json, "\"superpowers\"");
        let parsed: SourceType = serde_json::from_str("\"project\"").unwrap();
        assert_eq!(parsed, SourceType::Project);
    }

    #[test]
    fn test_source_type_priority_order() {
        let mut sorted = vec![
            SourceType::Superpowers,
            SourceType::Project,
            SourceType::Personal,
        ];
        sorted.sort();
        assert_eq!(sorted, SourceType::ALL.to_vec());
    }

    #[test]
    fn test_descriptor_display_name_fallback() {
        let desc = SkillDescriptor {
            name: None,
            description: None,
            path: PathBuf::from("/s/testing/tdd"),
            skill_file: PathBuf::from("/s/testing/tdd/SKILL.md"),
            source_type: SourceType::Superpowers,
        };
        assert_eq!(desc.display_name(), "tdd");
        assert_eq!(desc.qualified_name(), "superpowers:tdd");

        let named = SkillDescriptor {
            name: Some("brainstorming".into()),
            source_type: SourceType::Personal,
            ..desc
        };
        assert_eq!(named.qualified_name(), "brainstorming");
    }

    #[test]
    fn test_descriptor_serde_skips_unset_fields() {
        let desc = SkillDescriptor {
            name: None,
            description: None,
            path: PathBuf::from("/p/foo"),
            skill_file: PathBuf::from("/p/foo/SKILL.md"),
            source_type: SourceType::Project,
        };
        let value = serde_json::to_value(&desc).unwrap();
        assert!(value.get("name").is_none());
        assert_eq!(value["source_type"], "project");
    }

    #[test]
    fn test_resolved_skill_directory() {
        let resolved = ResolvedSkill {
            skill_file: PathBuf::from("/h/bar/SKILL.md"),
            source_type: SourceType::Personal,
            skill_path: "bar".into(),
        };
        assert_eq!(resolved.directory(), PathBuf::from("/h/bar"));
    }
}
