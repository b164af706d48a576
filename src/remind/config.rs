use crate::error::Result;
use crate::paths;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const NOTES_DIR_ENV: &str = "REMIND_NOTES_DIR";
pub const GIT_DISABLE_ENV: &str = "REMIND_GIT_DISABLE";
pub const TEMPLATE_DIR_ENV: &str = "REMIND_TEMPLATE_DIR";
pub const EDITOR_ENV: &str = "EDITOR";

const NOTES_DIR_DEFAULT: &str = "meeting-notes";
const EDITOR_DEFAULT: &str = "vim";
const CONFIG_FILENAME: &str = "config.json";

/// Configuration for remind, built once at startup and passed explicitly to
/// everything that needs it. Nothing else in the crate reads the environment.
///
/// Precedence for each key: environment variable, then `<root>/config.json`,
/// then the built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemindConfig {
    /// Top-level notes directory; notebooks are its subdirectories
    pub notes_root: PathBuf,
    /// Template storage directory (default `<notes_root>/templates`)
    pub template_dir: PathBuf,
    /// External editor program
    pub editor: String,
    /// Skip version control entirely
    pub git_disabled: bool,
}

/// Optional per-root overrides stored in `<root>/config.json`. The file sits
/// directly in the notes root; notebook discovery only accepts directories,
/// so it never shows up as a notebook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub template_dir: Option<PathBuf>,
    #[serde(default)]
    pub editor: Option<String>,
    #[serde(default)]
    pub git_disable: Option<bool>,
}

impl FileConfig {
    /// Load overrides from the given notes root, or defaults if absent
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let path = root.as_ref().join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let config: FileConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save overrides to the given notes root
    pub fn save<P: AsRef<Path>>(&self, root: P) -> Result<()> {
        let path = root.as_ref().join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl RemindConfig {
    /// Resolve the full configuration from the environment and the optional
    /// `config.json` in the notes root.
    pub fn from_env() -> Self {
        let notes_root = env::var(NOTES_DIR_ENV)
            .map(|v| expand_tilde(&v))
            .unwrap_or_else(|_| default_notes_root());

        // An unreadable or invalid config file degrades to defaults
        let file = FileConfig::load(&notes_root).unwrap_or_default();

        let template_dir = env::var(TEMPLATE_DIR_ENV)
            .map(|v| expand_tilde(&v))
            .ok()
            .or(file.template_dir)
            .unwrap_or_else(|| notes_root.join(paths::TEMPLATES_DIR));

        let editor = env::var(EDITOR_ENV)
            .ok()
            .filter(|e| !e.is_empty())
            .or(file.editor)
            .unwrap_or_else(|| EDITOR_DEFAULT.to_string());

        let git_disabled = match env::var(GIT_DISABLE_ENV) {
            Ok(v) => v.trim() == "1",
            Err(_) => file.git_disable.unwrap_or(false),
        };

        Self {
            notes_root,
            template_dir,
            editor,
            git_disabled,
        }
    }

    /// Fixed configuration rooted at the given directory, with version
    /// control off and no environment reads. Used by tests and embedders.
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        let notes_root = root.into();
        Self {
            template_dir: notes_root.join(paths::TEMPLATES_DIR),
            notes_root,
            editor: EDITOR_DEFAULT.to_string(),
            git_disabled: true,
        }
    }
}

fn default_notes_root() -> PathBuf {
    BaseDirs::new()
        .map(|bd| bd.home_dir().join(NOTES_DIR_DEFAULT))
        .unwrap_or_else(|| PathBuf::from(NOTES_DIR_DEFAULT))
}

fn expand_tilde(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(bd) = BaseDirs::new() {
            return bd.home_dir().join(rest);
        }
    }
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn with_root_derives_template_dir() {
        let config = RemindConfig::with_root("/tmp/notes");
        assert_eq!(config.notes_root, PathBuf::from("/tmp/notes"));
        assert_eq!(config.template_dir, PathBuf::from("/tmp/notes/templates"));
        assert!(config.git_disabled);
    }

    #[test]
    fn file_config_missing_is_default() {
        let temp = TempDir::new().unwrap();
        let loaded = FileConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, FileConfig::default());
    }

    #[test]
    fn file_config_roundtrip() {
        let temp = TempDir::new().unwrap();
        let config = FileConfig {
            template_dir: Some(PathBuf::from("/elsewhere/templates")),
            editor: Some("nano".to_string()),
            git_disable: Some(true),
        };
        config.save(temp.path()).unwrap();

        let loaded = FileConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn file_config_partial_keys() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.json"), r#"{"editor": "nano"}"#).unwrap();

        let loaded = FileConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.editor.as_deref(), Some("nano"));
        assert_eq!(loaded.template_dir, None);
        assert_eq!(loaded.git_disable, None);
    }

    #[test]
    fn expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
    }

    #[test]
    fn expand_tilde_resolves_home() {
        if let Some(bd) = BaseDirs::new() {
            assert_eq!(expand_tilde("~/notes"), bd.home_dir().join("notes"));
        }
    }

    #[test]
    fn env_overrides_file_config() {
        let temp = TempDir::new().unwrap();
        FileConfig {
            template_dir: Some(temp.path().join("from-file")),
            editor: Some("nano".to_string()),
            git_disable: Some(false),
        }
        .save(temp.path())
        .unwrap();

        env::set_var(NOTES_DIR_ENV, temp.path());
        env::set_var(TEMPLATE_DIR_ENV, temp.path().join("from-env"));
        env::set_var(EDITOR_ENV, "ed");
        env::set_var(GIT_DISABLE_ENV, "1");

        let config = RemindConfig::from_env();
        assert_eq!(config.notes_root, temp.path());
        assert_eq!(config.template_dir, temp.path().join("from-env"));
        assert_eq!(config.editor, "ed");
        assert!(config.git_disabled);

        env::remove_var(NOTES_DIR_ENV);
        env::remove_var(TEMPLATE_DIR_ENV);
        env::remove_var(EDITOR_ENV);
        env::remove_var(GIT_DISABLE_ENV);
    }
}
