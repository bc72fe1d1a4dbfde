//! Configuration loading and validation.
//!
//! Settings live in a TOML file (`~/.config/vsnotes/config.toml` by
//! default). Regex patterns are compiled once here so the store never
//! re-validates them per file.

use crate::error::{NotesError, Result};
use crate::new_note::{NoteNamer, Token, TokenKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "VSNOTES_CONFIG";

/// Templates file used when `templates-path` is not configured.
pub const DEFAULT_TEMPLATES_FILE: &str = ".templates.json";

/// User configuration as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Root directory of the note store.
    pub default_note_path: Option<PathBuf>,
    /// Regex patterns matched against store-relative paths.
    pub ignore_patterns: Vec<String>,
    /// Number of notes shown by the recent-notes listing.
    pub list_recent_limit: usize,
    pub treeview_hide_tags: bool,
    pub treeview_hide_files: bool,
    /// Templates JSON file. Defaults to `<store>/.templates.json`.
    pub templates_path: Option<PathBuf>,
    /// Title used when a new note is created without a name.
    pub default_note_name: String,
    /// File name format for new notes.
    pub default_note_title: String,
    /// Alternative file name formats.
    pub additional_note_titles: Vec<String>,
    pub tokens: Vec<Token>,
    /// Replacement for whitespace in new file names.
    pub note_title_convert_spaces: Option<String>,
    pub note_title_convert_to_lowercase: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_note_path: None,
            ignore_patterns: Vec::new(),
            list_recent_limit: 10,
            treeview_hide_tags: false,
            treeview_hide_files: false,
            templates_path: None,
            default_note_name: "My note".to_string(),
            default_note_title: "{dt}_{title}.{ext}".to_string(),
            additional_note_titles: Vec::new(),
            tokens: default_tokens(),
            note_title_convert_spaces: Some("_".to_string()),
            note_title_convert_to_lowercase: false,
        }
    }
}

fn default_tokens() -> Vec<Token> {
    vec![
        Token {
            kind: TokenKind::Datetime,
            token: "{dt}".to_string(),
            format: Some("%Y-%m-%d_%H-%M".to_string()),
        },
        Token {
            kind: TokenKind::Title,
            token: "{title}".to_string(),
            format: None,
        },
        Token {
            kind: TokenKind::Extension,
            token: "{ext}".to_string(),
            format: Some("md".to_string()),
        },
    ]
}

impl Config {
    /// Default config file path (`<config dir>/vsnotes/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vsnotes").join("config.toml"))
    }

    /// Load the configuration.
    ///
    /// An explicit path (argument or `VSNOTES_CONFIG`) must exist. The
    /// default location is optional and falls back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        if let Some(path) = explicit.map(Path::to_path_buf).or(from_env) {
            return Self::load_from(&path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load the configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            NotesError::ConfigError(format!("unable to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve the store root: the override if given, else the configured
    /// path. A leading `~` is expanded to the home directory.
    pub fn resolve_store_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        let path = override_path
            .or(self.default_note_path.as_deref())
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(NotesError::NoteFolderNotConfigured)?;
        Ok(resolve_home(path))
    }

    /// Compile the configured ignore patterns.
    pub fn ignore_patterns(&self) -> Result<IgnorePatterns> {
        IgnorePatterns::compile(&self.ignore_patterns)
    }

    /// Location of the templates file for a store.
    pub fn templates_file(&self, store_root: &Path) -> PathBuf {
        match &self.templates_path {
            Some(path) if !path.as_os_str().is_empty() => resolve_home(path),
            _ => store_root.join(DEFAULT_TEMPLATES_FILE),
        }
    }

    /// File naming settings for new notes, using `title_format` or the
    /// configured default.
    pub fn note_namer(&self, title_format: Option<&str>) -> NoteNamer {
        NoteNamer {
            title_format: title_format
                .unwrap_or(&self.default_note_title)
                .to_string(),
            tokens: self.tokens.clone(),
            convert_spaces: self
                .note_title_convert_spaces
                .clone()
                .filter(|s| !s.is_empty()),
            convert_to_lowercase: self.note_title_convert_to_lowercase,
        }
    }

    /// All file name formats: the default first, then the additional ones.
    pub fn note_title_formats(&self) -> Vec<&str> {
        std::iter::once(self.default_note_title.as_str())
            .chain(self.additional_note_titles.iter().map(String::as_str))
            .collect()
    }

    /// The file name format at `index` in [`Config::note_title_formats`].
    pub fn note_title_format(&self, index: usize) -> Result<&str> {
        let formats = self.note_title_formats();
        formats.get(index).copied().ok_or_else(|| {
            NotesError::ConfigError(format!(
                "no note title format at index {} ({} configured)",
                index,
                formats.len()
            ))
        })
    }
}

/// Expand a leading `~` to the user's home directory.
pub fn resolve_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Compiled ignore rules. A path is ignored when any pattern matches
/// anywhere in it.
#[derive(Debug, Clone, Default)]
pub struct IgnorePatterns {
    patterns: Vec<Regex>,
}

impl IgnorePatterns {
    /// Compile patterns in order; the first invalid one is reported.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|source| NotesError::InvalidIgnorePattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn is_match(&self, relative_path: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(relative_path))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.list_recent_limit, 10);
        assert_eq!(config.default_note_name, "My note");
        assert_eq!(config.tokens.len(), 3);
        assert!(config.ignore_patterns().unwrap().is_empty());
    }

    #[test]
    fn test_parse_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
default-note-path = "/tmp/notes"
ignore-patterns = ["^\\.git", "\\.png$"]
list-recent-limit = 3
treeview-hide-tags = true

[[tokens]]
type = "title"
token = "{title}"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_note_path, Some(PathBuf::from("/tmp/notes")));
        assert_eq!(config.list_recent_limit, 3);
        assert!(config.treeview_hide_tags);
        assert!(!config.treeview_hide_files);
        assert_eq!(config.tokens.len(), 1);
        assert_eq!(config.tokens[0].kind, TokenKind::Title);
        assert_eq!(config.default_note_name, "My note");

        let patterns = config.ignore_patterns().unwrap();
        assert_eq!(patterns.len(), 2);
        assert!(patterns.is_match(".git/HEAD"));
        assert!(patterns.is_match("img/a.png"));
        assert!(!patterns.is_match("notes/a.md"));
    }

    #[test]
    fn test_unknown_token_type_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[[tokens]]\ntype = \"uuid\"\ntoken = \"{id}\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, NotesError::TomlParse(_)));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, NotesError::ConfigError(_)));
    }

    #[test]
    fn test_invalid_ignore_pattern() {
        let config = Config {
            ignore_patterns: vec!["ok".to_string(), "(unclosed".to_string()],
            ..Config::default()
        };
        match config.ignore_patterns() {
            Err(NotesError::InvalidIgnorePattern { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_store_path() {
        let config = Config {
            default_note_path: Some(PathBuf::from("/configured")),
            ..Config::default()
        };
        assert_eq!(config.resolve_store_path(None).unwrap(), PathBuf::from("/configured"));
        assert_eq!(
            config.resolve_store_path(Some(Path::new("/override"))).unwrap(),
            PathBuf::from("/override")
        );

        let unset = Config::default();
        assert!(matches!(
            unset.resolve_store_path(None),
            Err(NotesError::NoteFolderNotConfigured)
        ));
    }

    #[test]
    fn test_resolve_home() {
        assert_eq!(resolve_home(Path::new("/abs/path")), PathBuf::from("/abs/path"));
        assert_eq!(resolve_home(Path::new("~notilde")), PathBuf::from("~notilde"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolve_home(Path::new("~/notes")), home.join("notes"));
        }
    }

    #[test]
    fn test_templates_file() {
        let store = Path::new("/store");
        assert_eq!(
            Config::default().templates_file(store),
            PathBuf::from("/store/.templates.json")
        );

        let config = Config {
            templates_path: Some(PathBuf::from("/elsewhere/t.json")),
            ..Config::default()
        };
        assert_eq!(config.templates_file(store), PathBuf::from("/elsewhere/t.json"));
    }

    #[test]
    fn test_note_title_formats() {
        let config = Config {
            additional_note_titles: vec!["{title}.md".to_string()],
            ..Config::default()
        };
        assert_eq!(config.note_title_formats(), vec!["{dt}_{title}.{ext}", "{title}.md"]);
    }

    #[test]
    fn test_note_title_format_by_index() {
        let config = Config {
            additional_note_titles: vec!["{title}.md".to_string()],
            ..Config::default()
        };
        assert_eq!(config.note_title_format(0).unwrap(), "{dt}_{title}.{ext}");
        assert_eq!(config.note_title_format(1).unwrap(), "{title}.md");
        assert!(matches!(config.note_title_format(2), Err(NotesError::ConfigError(_))));
    }
}
