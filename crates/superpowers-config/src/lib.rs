use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use superpowers_types::SourceType;

/// Overrides the default config directory (`~/.config/opencode`).
pub const CONFIG_DIR_ENV: &str = "OPENCODE_CONFIG_DIR";
/// Overrides the bundled superpowers skills directory.
pub const SUPERPOWERS_DIR_ENV: &str = "SUPERPOWERS_SKILLS_DIR";

const CONFIG_FILE_NAME: &str = "superpowers.json5";
const PROJECT_SKILLS_DIR: &str = ".opencode/skills";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON5 parse error: {0}")]
    Json5(#[from] json5::Error),
    #[error("Home directory not found")]
    NoHomeDir,
}

/// The three skill roots, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRoots {
    /// `<working dir>/.opencode/skills`, shadows everything else.
    pub project: PathBuf,
    /// `<config dir>/skills`, the user's own skills.
    pub personal: PathBuf,
    /// The bundled superpowers library, lowest priority.
    pub superpowers: PathBuf,
}

impl SkillRoots {
    pub fn new(
        project: impl Into<PathBuf>,
        personal: impl Into<PathBuf>,
        superpowers: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project: project.into(),
            personal: personal.into(),
            superpowers: superpowers.into(),
        }
    }

    /// Root directory for a source type.
    pub fn get(&self, source: SourceType) -> &Path {
        match source {
            SourceType::Project => &self.project,
            SourceType::Personal => &self.personal,
            SourceType::Superpowers => &self.superpowers,
        }
    }

    /// All roots, highest priority first.
    pub fn in_priority_order(&self) -> [(&Path, SourceType); 3] {
        SourceType::ALL.map(|source| (self.get(source), source))
    }
}

/// Contents of `superpowers.json5` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuperpowersConfig {
    /// Location of the superpowers skill library (supports `~/`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superpowers_dir: Option<String>,
    /// Skill injected at session start.
    #[serde(default = "default_bootstrap_skill")]
    pub bootstrap_skill: String,
    /// How many directory levels below a root enumeration may reach.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_bootstrap_skill() -> String {
    "using-superpowers".to_string()
}

fn default_max_depth() -> usize {
    3
}

impl Default for SuperpowersConfig {
    fn default() -> Self {
        Self {
            superpowers_dir: None,
            bootstrap_skill: default_bootstrap_skill(),
            max_depth: default_max_depth(),
        }
    }
}

/// Everything derived from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Absolute skill roots.
    pub roots: SkillRoots,
    /// Absolute config directory the roots were derived from.
    pub config_dir: PathBuf,
    /// Skill injected at session start and after compaction.
    pub bootstrap_skill: String,
    /// Enumeration depth limit below each root.
    pub max_depth: usize,
}

/// Normalize a user-supplied path: trim whitespace, expand `~`, make absolute.
///
/// Returns `None` for blank input.
pub fn normalize_path(raw: &str, home: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    normalize_path_in(raw, home, &cwd)
}

/// Like [`normalize_path`], resolving relative paths against `cwd`.
pub fn normalize_path_in(raw: &str, home: &Path, cwd: &Path) -> Option<PathBuf> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let expanded = if trimmed == "~" {
        home.to_path_buf()
    } else if let Some(rest) = trimmed.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(trimmed)
    };

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    };
    Some(clean_path(&absolute))
}

/// Lexically drop `.` segments and fold `..` into their parent.
fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Make a caller-supplied directory absolute and lexically clean.
fn absolutize(path: &Path, home: &Path) -> PathBuf {
    normalize_path(&path.to_string_lossy(), home).unwrap_or_else(|| path.to_path_buf())
}

fn home_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::NoHomeDir)
}

/// Pick the config directory from an optional override value.
pub fn config_dir_from(env_value: Option<&str>, home: &Path) -> PathBuf {
    env_value
        .and_then(|v| normalize_path(v, home))
        .unwrap_or_else(|| home.join(".config").join("opencode"))
}

/// Resolve the config directory (`$OPENCODE_CONFIG_DIR` or `~/.config/opencode`).
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let home = home_dir()?;
    let env_value = std::env::var(CONFIG_DIR_ENV).ok();
    Ok(config_dir_from(env_value.as_deref(), &home))
}

/// Resolve the config file path inside a config directory.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Load configuration from a specific path, falling back to defaults if not found.
pub fn load_config_from(path: &Path) -> Result<SuperpowersConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("Config file not found at {}, using defaults", path.display());
        return Ok(SuperpowersConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: SuperpowersConfig = json5::from_str(&content)?;
    Ok(config)
}

/// Derive the skill roots.
///
/// The superpowers root comes from the config file first, then the
/// environment override, then `<config_dir>/superpowers/skills`.
pub fn resolve_roots(
    working_dir: &Path,
    config_dir: &Path,
    config: &SuperpowersConfig,
    superpowers_env: Option<&str>,
    home: &Path,
) -> SkillRoots {
    let superpowers = config
        .superpowers_dir
        .as_deref()
        .and_then(|p| normalize_path(p, home))
        .or_else(|| superpowers_env.and_then(|p| normalize_path(p, home)))
        .unwrap_or_else(|| config_dir.join("superpowers").join("skills"));

    SkillRoots {
        project: working_dir.join(PROJECT_SKILLS_DIR),
        personal: config_dir.join("skills"),
        superpowers,
    }
}

/// Load settings for a project directory.
///
/// `config_dir_override` takes precedence over `$OPENCODE_CONFIG_DIR`.
/// Relative inputs are resolved against the current directory, so the
/// returned roots are always absolute.
pub fn load_settings(
    working_dir: &Path,
    config_dir_override: Option<&Path>,
) -> Result<Settings, ConfigError> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let home = home_dir()?;
    let working_dir = absolutize(working_dir, &home);
    let config_dir = match config_dir_override {
        Some(dir) => absolutize(dir, &home),
        None => config_dir()?,
    };
    let config = load_config_from(&config_file_path(&config_dir))?;
    let superpowers_env = std::env::var(SUPERPOWERS_DIR_ENV).ok();
    let roots = resolve_roots(
        &working_dir,
        &config_dir,
        &config,
        superpowers_env.as_deref(),
        &home,
    );

    tracing::debug!(
        project = %roots.project.display(),
        personal = %roots.personal.display(),
        superpowers = %roots.superpowers.display(),
        "Resolved skill roots"
    );

    Ok(Settings {
        roots,
        config_dir,
        bootstrap_skill: config.bootstrap_skill,
        max_depth: config.max_depth,
    })
}
