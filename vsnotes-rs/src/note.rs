//! The note record produced by a store walk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Component, PathBuf};

/// One file discovered in the note store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Path of the file as walked (store root joined with the relative path).
    pub file_path: PathBuf,
    /// Path relative to the store root. Identity key within one walk.
    pub file_relative_path: PathBuf,
    /// Base name of the file.
    pub file_name: String,
    /// Filesystem modification time.
    pub file_last_modified_at: DateTime<Utc>,
    /// Tags declared in the front matter.
    pub tags: Vec<String>,
}

impl Note {
    /// Build a note record; the file name is derived from the relative path.
    pub fn new(
        file_path: impl Into<PathBuf>,
        file_relative_path: impl Into<PathBuf>,
        file_last_modified_at: DateTime<Utc>,
        tags: Vec<String>,
    ) -> Self {
        let file_relative_path = file_relative_path.into();
        let file_name = file_relative_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file_path: file_path.into(),
            file_relative_path,
            file_name,
            file_last_modified_at,
            tags,
        }
    }

    /// Segments of the directory containing this note, relative to the store
    /// root. Empty for notes in the root itself.
    pub fn directory_segments(&self) -> Vec<String> {
        self.file_relative_path
            .parent()
            .map(|parent| {
                parent
                    .components()
                    .filter_map(|component| match component {
                        Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the note declares exactly this tag (case-sensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
