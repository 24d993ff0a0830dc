//! Skill discovery within a single root.

use std::path::{Path, PathBuf};

use superpowers_types::{SKILL_FILE_NAME, SkillDescriptor, SourceType};

use crate::frontmatter::extract_frontmatter;

/// Default number of directory levels searched below a root.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Find every skill under `root`.
///
/// Children of `root` are at depth 1; nothing deeper than `max_depth` is
/// visited. A directory holding a `SKILL.md` is a skill and is not
/// descended into. Siblings are visited in file-name order. A missing or
/// unreadable root yields an empty list.
pub fn find_skills_in_dir(
    root: &Path,
    source_type: SourceType,
    max_depth: usize,
) -> Vec<SkillDescriptor> {
    let mut skills = Vec::new();

    if !root.is_dir() {
        tracing::debug!(root = %root.display(), source = %source_type, "Skill root not found");
        return skills;
    }

    walk(root, source_type, 1, max_depth, &mut skills);
    skills
}

fn walk(
    dir: &Path,
    source_type: SourceType,
    depth: usize,
    max_depth: usize,
    skills: &mut Vec<SkillDescriptor>,
) {
    if depth > max_depth {
        return;
    }

    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(path = %dir.display(), "Failed to read skill directory: {e}");
            return;
        }
    };

    let mut children: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    children.sort();

    for child in children {
        let skill_file = child.join(SKILL_FILE_NAME);
        if skill_file.is_file() {
            skills.push(describe(child, skill_file, source_type));
        } else {
            walk(&child, source_type, depth + 1, max_depth, skills);
        }
    }
}

fn describe(path: PathBuf, skill_file: PathBuf, source_type: SourceType) -> SkillDescriptor {
    let metadata = extract_frontmatter(&skill_file);
    tracing::debug!(
        path = %path.display(),
        source = %source_type,
        named = metadata.name.is_some(),
        "Discovered skill"
    );

    SkillDescriptor {
        name: metadata.name,
        description: metadata.description,
        path,
        skill_file,
        source_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_skill(root: &Path, rel: &str, content: &str) {
        let dir = root.join(rel);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SKILL_FILE_NAME), content).unwrap();
    }

    fn names(skills: &[SkillDescriptor]) -> Vec<String> {
        skills.iter().map(|s| s.display_name()).collect()
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let skills = find_skills_in_dir(&dir.path().join("absent"), SourceType::Personal, 3);
        assert!(skills.is_empty());
    }

    #[test]
    fn test_empty_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_skills_in_dir(dir.path(), SourceType::Project, 3).is_empty());
    }

    #[test]
    fn test_parses_metadata_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        write_skill(
            dir.path(),
            "brainstorming",
            "---\nname: Brainstorming\ndescription: Shape ideas\n---\nbody",
        );
        write_skill(dir.path(), "plain", "no header at all");
        write_skill(dir.path(), "broken", "---\nname: never closed\n");

        let skills = find_skills_in_dir(dir.path(), SourceType::Superpowers, 3);
        assert_eq!(names(&skills), vec!["Brainstorming", "broken", "plain"]);

        let broken = &skills[1];
        assert_eq!(broken.name, None);
        assert_eq!(broken.path, dir.path().join("broken"));
        assert_eq!(broken.skill_file, dir.path().join("broken").join(SKILL_FILE_NAME));
        assert!(skills.iter().all(|s| s.source_type == SourceType::Superpowers));
        assert_eq!(skills[0].description.as_deref(), Some("Shape ideas"));
    }

    #[test]
    fn test_depth_bound() {
        let dir = tempfile::tempdir().unwrap();
        write_skill(dir.path(), "one", "");
        write_skill(dir.path(), "a/two", "");
        write_skill(dir.path(), "a/b/three", "");
        write_skill(dir.path(), "a/b/c/four", "");

        let skills = find_skills_in_dir(dir.path(), SourceType::Personal, 3);
        assert_eq!(names(&skills), vec!["three", "two", "one"]);

        let shallow = find_skills_in_dir(dir.path(), SourceType::Personal, 1);
        assert_eq!(names(&shallow), vec!["one"]);

        assert!(find_skills_in_dir(dir.path(), SourceType::Personal, 0).is_empty());
    }

    #[test]
    fn test_skill_directory_is_a_leaf() {
        let dir = tempfile::tempdir().unwrap();
        write_skill(dir.path(), "outer", "");
        write_skill(dir.path(), "outer/inner", "");

        let skills = find_skills_in_dir(dir.path(), SourceType::Project, 3);
        assert_eq!(names(&skills), vec!["outer"]);
    }

    #[test]
    fn test_dot_directories_and_loose_files() {
        let dir = tempfile::tempdir().unwrap();
        write_skill(dir.path(), ".draft", "");
        write_skill(dir.path(), "visible", "");
        std::fs::write(dir.path().join(SKILL_FILE_NAME), "root-level file").unwrap();

        let skills = find_skills_in_dir(dir.path(), SourceType::Project, 3);
        assert_eq!(names(&skills), vec![".draft", "visible"]);
    }

    #[test]
    fn test_deterministic_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zeta", "alpha", "mid/beta"] {
            write_skill(dir.path(), name, "");
        }
        let first = find_skills_in_dir(dir.path(), SourceType::Personal, 3);
        let second = find_skills_in_dir(dir.path(), SourceType::Personal, 3);
        assert_eq!(first, second);
        assert_eq!(names(&first), vec!["alpha", "beta", "zeta"]);
    }
}
