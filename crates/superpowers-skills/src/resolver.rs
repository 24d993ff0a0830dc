//! Direct lookup of a skill identifier across an ordered list of roots.

use std::path::{Component, Path, PathBuf};

use superpowers_types::{ResolvedSkill, SKILL_FILE_NAME, SourceType};

/// Outcome of a skill lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The first root, in the order searched, holding the document.
    Found(ResolvedSkill),
    /// No searched root holds the document.
    NotFound,
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// Try another lookup only if this one came up empty.
    pub fn or_else(self, next: impl FnOnce() -> Resolution) -> Resolution {
        match self {
            Resolution::Found(_) => self,
            Resolution::NotFound => next(),
        }
    }

    pub fn found(self) -> Option<ResolvedSkill> {
        match self {
            Resolution::Found(skill) => Some(skill),
            Resolution::NotFound => None,
        }
    }
}

/// Expected location of `identifier`'s document under `root`.
///
/// `None` for identifiers that are empty or would leave the root
/// (absolute paths, `..` segments).
pub fn skill_file_in(root: &Path, identifier: &str) -> Option<PathBuf> {
    if identifier.is_empty() {
        return None;
    }
    let relative = Path::new(identifier);
    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(root.join(relative).join(SKILL_FILE_NAME))
}

/// Look `identifier` up in each root in order; the first root holding
/// `<root>/<identifier>/SKILL.md` wins.
pub fn resolve_in_roots(identifier: &str, roots: &[(&Path, SourceType)]) -> Resolution {
    for (root, source_type) in roots {
        let Some(skill_file) = skill_file_in(root, identifier) else {
            tracing::debug!(skill = %identifier, "Rejected skill identifier");
            return Resolution::NotFound;
        };

        if skill_file.is_file() {
            tracing::debug!(
                skill = %identifier,
                source = %source_type,
                path = %skill_file.display(),
                "Resolved skill"
            );
            return Resolution::Found(ResolvedSkill {
                skill_file,
                source_type: *source_type,
                skill_path: identifier.to_string(),
            });
        }
    }

    Resolution::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_skill(root: &Path, rel: &str) {
        let dir = root.join(rel);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SKILL_FILE_NAME), "# skill\n").unwrap();
    }

    #[test]
    fn test_first_root_wins() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_skill(a.path(), "foo");
        write_skill(b.path(), "foo");

        let roots = [
            (a.path(), SourceType::Personal),
            (b.path(), SourceType::Superpowers),
        ];
        let skill = resolve_in_roots("foo", &roots).found().unwrap();
        assert_eq!(skill.source_type, SourceType::Personal);
        assert_eq!(skill.skill_file, a.path().join("foo").join(SKILL_FILE_NAME));
        assert_eq!(skill.skill_path, "foo");
    }

    #[test]
    fn test_falls_through_to_later_root() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_skill(b.path(), "testing/tdd");

        let roots = [
            (a.path(), SourceType::Personal),
            (b.path(), SourceType::Superpowers),
        ];
        let skill = resolve_in_roots("testing/tdd", &roots).found().unwrap();
        assert_eq!(skill.source_type, SourceType::Superpowers);
    }

    #[test]
    fn test_no_recursive_search() {
        let a = tempfile::tempdir().unwrap();
        write_skill(a.path(), "nested/foo");
        let roots = [(a.path(), SourceType::Project)];
        assert_eq!(resolve_in_roots("foo", &roots), Resolution::NotFound);
    }

    #[test]
    fn test_case_sensitive() {
        let a = tempfile::tempdir().unwrap();
        write_skill(a.path(), "Foo");
        let roots = [(a.path(), SourceType::Project)];
        let skill = resolve_in_roots("Foo", &roots).found().unwrap();
        assert_eq!(skill.skill_path, "Foo");
        #[cfg(target_os = "linux")]
        assert!(!resolve_in_roots("foo", &roots).is_found());
    }

    #[test]
    fn test_rejects_empty_and_escaping_identifiers() {
        let a = tempfile::tempdir().unwrap();
        write_skill(a.path(), "inner");
        let nested = a.path().join("inner");
        let roots = [(nested.as_path(), SourceType::Project)];

        assert_eq!(resolve_in_roots("", &roots), Resolution::NotFound);
        assert_eq!(resolve_in_roots("../inner", &roots), Resolution::NotFound);
        assert!(skill_file_in(a.path(), "/etc").is_none());
    }

    #[test]
    fn test_directory_without_document() {
        let a = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(a.path().join("empty")).unwrap();
        let roots = [(a.path(), SourceType::Personal)];
        assert!(!resolve_in_roots("empty", &roots).is_found());
    }
}
