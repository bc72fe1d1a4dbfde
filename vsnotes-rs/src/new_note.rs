//! Creating new note files from a name, a file name format and an optional
//! template.

use crate::error::{NotesError, Result};
use crate::template::Template;
use chrono::{DateTime, Local};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::sync::LazyLock;
use tokio::io::AsyncWriteExt;
use unicode_normalization::UnicodeNormalization;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s").unwrap());

/// What a token is replaced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// The current local time, formatted with `format` (strftime syntax).
    Datetime,
    /// The note title.
    Title,
    /// The literal `format` value, typically a file extension.
    Extension,
}

/// A placeholder in a file name format or template body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// The literal text to replace, e.g. `{dt}`.
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Token {
    fn replacement(&self, title: &str, now: &DateTime<Local>) -> String {
        let format = self.format.as_deref().unwrap_or_default();
        match self.kind {
            TokenKind::Datetime => {
                let mut out = String::new();
                if write!(out, "{}", now.format(format)).is_err() {
                    tracing::warn!(token = %self.token, format, "invalid datetime format");
                    out.clear();
                }
                out
            }
            TokenKind::Title => title.to_string(),
            TokenKind::Extension => format.to_string(),
        }
    }
}

/// Replace every occurrence of each token, in token order.
pub fn replace_tokens(text: &str, title: &str, tokens: &[Token], now: &DateTime<Local>) -> String {
    tokens.iter().fold(text.to_string(), |acc, token| {
        if token.token.is_empty() {
            acc
        } else {
            acc.replace(&token.token, &token.replacement(title, now))
        }
    })
}

/// Split `dir/sub/title` into (`dir/sub`, `title`). Names without a
/// directory part yield an empty directory.
pub fn split_note_name(name: &str) -> (String, String) {
    match name.rfind(['/', MAIN_SEPARATOR]) {
        Some(idx) => (name[..idx].to_string(), name[idx + 1..].to_string()),
        None => (String::new(), name.to_string()),
    }
}

/// File naming settings for new notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteNamer {
    /// Format with tokens, e.g. `{dt}_{title}.{ext}`.
    pub title_format: String,
    pub tokens: Vec<Token>,
    /// Replacement for each whitespace character.
    pub convert_spaces: Option<String>,
    pub convert_to_lowercase: bool,
}

impl NoteNamer {
    /// Build the file name for a note title.
    pub fn file_name(&self, title: &str, now: &DateTime<Local>) -> String {
        let title: String = title.nfc().collect();
        let mut file_name = replace_tokens(&self.title_format, &title, &self.tokens, now);

        if self.convert_to_lowercase {
            file_name = file_name.to_lowercase();
        }
        if let Some(replacement) = &self.convert_spaces {
            file_name = WHITESPACE
                .replace_all(&file_name, regex::NoExpand(replacement))
                .into_owned();
        }

        file_name
    }
}

/// A request to create a note.
#[derive(Debug, Clone)]
pub struct NewNote<'a> {
    /// Store root the note is created under.
    pub folder: &'a Path,
    /// Name typed by the user, optionally prefixed with directories.
    pub name: &'a str,
    /// Name used when `name` is empty.
    pub default_name: &'a str,
    pub namer: &'a NoteNamer,
    pub template: Option<&'a Template>,
}

impl NewNote<'_> {
    /// Create the note file and return its path.
    ///
    /// Missing parent directories are created. An existing file is left
    /// as it is; a template body is only written into an empty file.
    pub async fn create(&self, now: &DateTime<Local>) -> Result<PathBuf> {
        if self.folder.as_os_str().is_empty() {
            return Err(NotesError::NoteFolderNotConfigured);
        }

        let name = if self.name.trim().is_empty() {
            self.default_name
        } else {
            self.name
        };
        let (directory, title) = split_note_name(name);
        let file_name = self.namer.file_name(&title, now);
        if file_name.is_empty() {
            return Err(NotesError::Other(format!("empty file name for note '{}'", name)));
        }

        let path = self.folder.join(&directory).join(&file_name);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        if let Some(template) = self.template {
            if file.metadata().await?.len() == 0 {
                let body = replace_tokens(&template.body, &title, &self.namer.tokens, now);
                file.write_all(body.as_bytes()).await?;
                file.flush().await?;
                tracing::info!(template = %template.name, path = %path.display(), "added template body");
            } else {
                tracing::warn!(path = %path.display(), "note already has content, template skipped");
            }
        }

        tracing::info!(path = %path.display(), "note created");
        Ok(path)
    }
}
