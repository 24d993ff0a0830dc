//! Priority-ordered lookup and listing across the three skill roots.

use std::path::{Path, PathBuf};

use anyhow::Context;

use superpowers_config::SkillRoots;
use superpowers_types::{ResolvedSkill, SkillDescriptor, SkillMetadata, SourceType};

use crate::discovery::{DEFAULT_MAX_DEPTH, find_skills_in_dir};
use crate::frontmatter::{parse_frontmatter, strip_frontmatter};
use crate::resolver::{Resolution, resolve_in_roots};

const PROJECT_PREFIX: &str = "project:";
const SUPERPOWERS_PREFIX: &str = "superpowers:";

/// Namespace prefix carried by a skill identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// `project:` — project root only.
    Project,
    /// `superpowers:` — personal then superpowers, project skipped.
    Superpowers,
    /// No prefix — project, personal, superpowers.
    Unqualified,
}

/// Split a namespace prefix off an identifier.
pub fn split_namespace(identifier: &str) -> (Namespace, &str) {
    if let Some(rest) = identifier.strip_prefix(PROJECT_PREFIX) {
        (Namespace::Project, rest)
    } else if let Some(rest) = identifier.strip_prefix(SUPERPOWERS_PREFIX) {
        (Namespace::Superpowers, rest)
    } else {
        (Namespace::Unqualified, identifier)
    }
}

/// A resolved skill with its document read and split.
#[derive(Debug, Clone)]
pub struct LoadedSkill {
    pub resolved: ResolvedSkill,
    pub metadata: SkillMetadata,
    /// Document body with the header block removed.
    pub content: String,
    /// Directory holding the document and its supporting files.
    pub directory: PathBuf,
}

/// Entry point for skill lookups.
///
/// Holds no state besides the roots; every call reads the filesystem afresh.
#[derive(Debug, Clone)]
pub struct SkillLibrary {
    roots: SkillRoots,
    max_depth: usize,
}

impl SkillLibrary {
    pub fn new(roots: SkillRoots) -> Self {
        Self {
            roots,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn roots(&self) -> &SkillRoots {
        &self.roots
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn project_roots(&self) -> [(&Path, SourceType); 1] {
        [(self.roots.project.as_path(), SourceType::Project)]
    }

    fn fallback_roots(&self) -> [(&Path, SourceType); 2] {
        [
            (self.roots.personal.as_path(), SourceType::Personal),
            (self.roots.superpowers.as_path(), SourceType::Superpowers),
        ]
    }

    /// Resolve one identifier with priority project > personal > superpowers.
    ///
    /// `project:` pins the lookup to the project root; `superpowers:` skips it.
    pub fn resolve_one(&self, identifier: &str) -> Resolution {
        let (namespace, name) = split_namespace(identifier);
        match namespace {
            Namespace::Project => resolve_in_roots(name, &self.project_roots()),
            Namespace::Superpowers => resolve_in_roots(name, &self.fallback_roots()),
            Namespace::Unqualified => resolve_in_roots(name, &self.project_roots())
                .or_else(|| resolve_in_roots(name, &self.fallback_roots())),
        }
    }

    /// Resolve a skill outside the project root.
    ///
    /// Used for the session bootstrap skill, which a project must not shadow.
    /// A `project:` identifier never matches here.
    pub fn resolve_shared(&self, identifier: &str) -> Resolution {
        match split_namespace(identifier) {
            (Namespace::Project, _) => {
                tracing::debug!(skill = %identifier, "Project skills are not shared");
                Resolution::NotFound
            }
            (_, name) => resolve_in_roots(name, &self.fallback_roots()),
        }
    }

    /// List every skill of every root, project first, then personal, then
    /// superpowers.
    ///
    /// Names present in several roots are listed once per root.
    pub fn resolve_all(&self) -> Vec<SkillDescriptor> {
        self.roots
            .in_priority_order()
            .into_iter()
            .flat_map(|(root, source_type)| find_skills_in_dir(root, source_type, self.max_depth))
            .collect()
    }

    /// Resolve and read a skill document.
    ///
    /// `Ok(None)` when nothing matches; an error only if a matching document
    /// cannot be read.
    pub fn load(&self, identifier: &str) -> anyhow::Result<Option<LoadedSkill>> {
        match self.resolve_one(identifier) {
            Resolution::Found(resolved) => read_skill(resolved).map(Some),
            Resolution::NotFound => Ok(None),
        }
    }

    /// Like [`SkillLibrary::load`], using [`SkillLibrary::resolve_shared`].
    pub fn load_shared(&self, identifier: &str) -> anyhow::Result<Option<LoadedSkill>> {
        match self.resolve_shared(identifier) {
            Resolution::Found(resolved) => read_skill(resolved).map(Some),
            Resolution::NotFound => Ok(None),
        }
    }
}

fn read_skill(resolved: ResolvedSkill) -> anyhow::Result<LoadedSkill> {
    let raw = std::fs::read_to_string(&resolved.skill_file)
        .with_context(|| format!("failed to read {}", resolved.skill_file.display()))?;

    let metadata = parse_frontmatter(&raw);
    let content = strip_frontmatter(&raw).trim().to_string();
    let directory = resolved.directory();

    tracing::debug!(
        skill = %resolved.skill_path,
        source = %resolved.source_type,
        "Loaded skill"
    );

    Ok(LoadedSkill {
        resolved,
        metadata,
        content,
        directory,
    })
}
