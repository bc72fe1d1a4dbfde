//! Note store: walks a directory tree and builds note records.

use crate::config::IgnorePatterns;
use crate::error::{NotesError, Result};
use crate::note::Note;
use crate::parser::parse_tags;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use walkdir::WalkDir;

/// A regular file found by the walk that survived the ignore rules.
#[derive(Debug)]
struct Candidate {
    file_path: PathBuf,
    file_relative_path: PathBuf,
    modified: DateTime<Utc>,
}

/// A directory of notes.
#[derive(Debug, Clone)]
pub struct NoteStore {
    root: PathBuf,
    ignore_patterns: IgnorePatterns,
}

impl NoteStore {
    /// Create a store rooted at `root`, which must be an existing directory
    /// (or a symlink to one).
    ///
    /// A relative root is made absolute against the current directory.
    /// Symlinks are kept as given.
    pub fn new(root: impl Into<PathBuf>, ignore_patterns: IgnorePatterns) -> Result<Self> {
        let root = root.into();
        let root = std::path::absolute(&root).map_err(|_| NotesError::StoreNotFound(root.clone()))?;

        if !root.is_dir() {
            return Err(NotesError::StoreNotFound(root));
        }

        Ok(Self {
            root,
            ignore_patterns,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ignore_patterns(&self) -> &IgnorePatterns {
        &self.ignore_patterns
    }

    /// Walk the store and read every note.
    ///
    /// Each file is read by its own task; the walk returns once enumeration
    /// has finished and every read has settled. Files that cannot be read
    /// and entries that cannot be enumerated are logged and left out. The
    /// order of the result is unspecified.
    pub async fn all(&self) -> Result<Vec<Note>> {
        let root_is_dir = tokio::fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !root_is_dir {
            return Err(NotesError::StoreNotFound(self.root.clone()));
        }

        let (tx, mut rx) = mpsc::unbounded_channel();
        let root = self.root.clone();
        let ignore_patterns = self.ignore_patterns.clone();
        let walker =
            tokio::task::spawn_blocking(move || enumerate(&root, &ignore_patterns, &tx));

        let mut reads = JoinSet::new();
        while let Some(candidate) = rx.recv().await {
            reads.spawn(read_note(candidate));
        }

        match walker.await {
            Ok(count) => tracing::debug!(root = %self.root.display(), candidates = count, "walk finished"),
            Err(e) => tracing::error!(root = %self.root.display(), error = %e, "walk task failed"),
        }

        let mut notes = Vec::with_capacity(reads.len());
        while let Some(settled) = reads.join_next().await {
            match settled {
                Ok(Some(note)) => notes.push(note),
                Ok(None) => {}
                Err(e) => tracing::error!(error = %e, "note read task failed"),
            }
        }

        tracing::debug!(root = %self.root.display(), notes = notes.len(), "store loaded");
        Ok(notes)
    }
}

/// Enumerate candidate files under `root`, sending each one as soon as it is
/// found. Returns the number of candidates sent.
fn enumerate(
    root: &Path,
    ignore_patterns: &IgnorePatterns,
    tx: &mpsc::UnboundedSender<Candidate>,
) -> usize {
    let mut sent = 0;

    let walk = WalkDir::new(root).follow_links(false).follow_root_links(true);
    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                tracing::warn!(path = %path, error = %e, "unable to walk entry");
                continue;
            }
        };

        // Symlinks below the root are reported as symlinks and never followed.
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative_str = relative.to_string_lossy();
        if ignore_patterns.is_match(&relative_str) {
            tracing::trace!(path = %relative_str, "ignored");
            continue;
        }

        let modified = match entry.metadata().map_err(std::io::Error::from).and_then(|m| m.modified()) {
            Ok(modified) => DateTime::<Utc>::from(modified),
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "unable to walk entry");
                continue;
            }
        };

        let candidate = Candidate {
            file_path: entry.path().to_path_buf(),
            file_relative_path: relative.to_path_buf(),
            modified,
        };
        if tx.send(candidate).is_err() {
            break;
        }
        sent += 1;
    }

    sent
}

async fn read_note(candidate: Candidate) -> Option<Note> {
    match tokio::fs::read(&candidate.file_path).await {
        Ok(bytes) => {
            let tags = parse_tags(&String::from_utf8_lossy(&bytes));
            Some(Note::new(
                candidate.file_path,
                candidate.file_relative_path,
                candidate.modified,
                tags,
            ))
        }
        Err(e) => {
            tracing::warn!(path = %candidate.file_path.display(), error = %e, "unable to read note");
            None
        }
    }
}
