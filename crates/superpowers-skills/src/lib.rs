//! superpowers-skills: Skill resolution, discovery, and header parsing.
//!
//! A skill is a directory holding a `SKILL.md` document plus optional
//! supporting files. Skills live under three roots, searched in priority
//! order: project, personal, superpowers.
//!
//! # Skill file format
//!
//! ```markdown
//! ---
//! name: brainstorming
//! description: Refine rough ideas into designs before writing code
//! ---
//!
//! # Brainstorming
//!
//! [Markdown instructions for the agent]
//! ```
//!
//! # Identifiers
//!
//! - `tdd` resolves against project, then personal, then superpowers.
//! - `project:tdd` resolves against the project root only.
//! - `superpowers:tdd` skips the project root.

pub mod discovery;
pub mod frontmatter;
pub mod library;
pub mod resolver;

pub use discovery::{DEFAULT_MAX_DEPTH, find_skills_in_dir};
pub use frontmatter::{extract_frontmatter, parse_frontmatter, strip_frontmatter};
pub use library::{LoadedSkill, Namespace, SkillLibrary, split_namespace};
pub use resolver::{Resolution, resolve_in_roots};
