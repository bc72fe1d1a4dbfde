//! Query layer over the notes of one store walk.

use crate::note::Note;
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// An immutable snapshot of notes. Every query returns a new value and
/// leaves the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notes {
    notes: Vec<Note>,
}

impl Notes {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// The notes in their current order.
    pub fn get(&self) -> &[Note] {
        &self.notes
    }

    pub fn into_inner(self) -> Vec<Note> {
        self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// The first `n` notes.
    pub fn limit(&self, n: usize) -> Notes {
        Notes::new(self.notes.iter().take(n).cloned().collect())
    }

    /// Notes ordered by modification time, most recent first.
    ///
    /// The sort is stable, so notes with equal timestamps keep their
    /// relative order.
    pub fn sort_by_file_last_modified_at(&self) -> Notes {
        let mut sorted = self.notes.clone();
        sorted.sort_by(|a, b| b.file_last_modified_at.cmp(&a.file_last_modified_at));
        Notes::new(sorted)
    }

    /// Names of the directories one level below `parent`.
    ///
    /// `parent` is given as path segments relative to the store root; an
    /// empty slice means the root. Names are deduplicated and returned in
    /// the order they are first seen.
    pub fn directories<S: AsRef<str>>(&self, parent: &[S]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut directories = Vec::new();

        for note in &self.notes {
            let segments = note.directory_segments();
            if segments.len() <= parent.len() || !starts_with(&segments, parent) {
                continue;
            }
            let child = &segments[parent.len()];
            if seen.insert(child.clone()) {
                directories.push(child.clone());
            }
        }

        directories
    }

    /// Notes whose direct parent directory is exactly `parent`.
    pub fn in_directory<S: AsRef<str>>(&self, parent: &[S]) -> Notes {
        self.filter(|note| {
            let segments = note.directory_segments();
            segments.len() == parent.len() && starts_with(&segments, parent)
        })
    }

    /// Every tag used by any note, deduplicated and sorted.
    pub fn all_tags(&self) -> Vec<String> {
        self.notes
            .iter()
            .flat_map(|note| note.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Notes carrying exactly `tag`. A missing tag selects nothing.
    pub fn with_tag<'a>(&self, tag: impl Into<Option<&'a str>>) -> Notes {
        let Some(tag) = tag.into() else {
            return Notes::default();
        };

        let mut seen: HashSet<&Path> = HashSet::new();
        Notes::new(
            self.notes
                .iter()
                .filter(|note| note.has_tag(tag))
                .filter(|note| seen.insert(note.file_relative_path.as_path()))
                .cloned()
                .collect(),
        )
    }

    fn filter(&self, predicate: impl Fn(&Note) -> bool) -> Notes {
        Notes::new(self.notes.iter().filter(|n| predicate(n)).cloned().collect())
    }
}

fn starts_with<S: AsRef<str>>(segments: &[String], prefix: &[S]) -> bool {
    prefix
        .iter()
        .zip(segments)
        .all(|(expected, actual)| expected.as_ref() == actual)
}

impl From<Vec<Note>> for Notes {
    fn from(notes: Vec<Note>) -> Self {
        Notes::new(notes)
    }
}

impl IntoIterator for Notes {
    type Item = Note;
    type IntoIter = std::vec::IntoIter<Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Notes {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn today() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn yesterday() -> DateTime<Utc> {
        today() - Duration::days(1)
    }

    fn rel(parts: &[&str]) -> PathBuf {
        parts.iter().collect()
    }

    fn note(parts: &[&str]) -> Note {
        note_with(parts, yesterday(), &[])
    }

    fn tagged(parts: &[&str], tags: &[&str]) -> Note {
        note_with(parts, yesterday(), tags)
    }

    fn note_with(parts: &[&str], modified: DateTime<Utc>, tags: &[&str]) -> Note {
        let relative = rel(parts);
        Note::new(
            Path::new("/store").join(&relative),
            relative,
            modified,
            tags.iter().map(|t| t.to_string()).collect(),
        )
    }

    const ROOT: &[&str] = &[];

    mod sorting_and_limiting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn returns_a_note() {
            let notes = Notes::new(vec![note(&["note1"])]);
            assert_eq!(notes.get(), &[note(&["note1"])]);
        }

        #[test]
        fn returns_multiple_notes() {
            let notes = Notes::new(vec![note(&["note1"]), note(&["note2"])]);
            assert_eq!(notes.get(), &[note(&["note1"]), note(&["note2"])]);
        }

        #[test]
        fn returns_first_n_notes() {
            let notes = Notes::new(vec![note(&["note1"]), note(&["note2"])]);

            assert!(notes.limit(0).is_empty());
            assert_eq!(notes.limit(1).get(), &[note(&["note1"])]);
            assert_eq!(notes.limit(2).get(), &[note(&["note1"]), note(&["note2"])]);
            assert_eq!(notes.limit(3).get(), &[note(&["note1"]), note(&["note2"])]);
        }

        #[test]
        fn sorts_by_last_modification_time() {
            let notes = Notes::new(vec![
                note_with(&["note1"], yesterday(), &[]),
                note_with(&["note2"], today(), &[]),
            ]);

            assert_eq!(
                notes.sort_by_file_last_modified_at().get(),
                &[
                    note_with(&["note2"], today(), &[]),
                    note_with(&["note1"], yesterday(), &[]),
                ]
            );
        }

        #[test]
        fn sorting_leaves_the_receiver_untouched() {
            let original = vec![
                note_with(&["note1"], yesterday(), &[]),
                note_with(&["note2"], today(), &[]),
            ];
            let notes = Notes::new(original.clone());

            let _sorted = notes.sort_by_file_last_modified_at();
            assert_eq!(notes.get(), original.as_slice());
        }

        #[test]
        fn sorting_is_stable_for_equal_timestamps() {
            let notes = Notes::new(vec![
                note_with(&["a"], yesterday(), &[]),
                note_with(&["b"], today(), &[]),
                note_with(&["c"], yesterday(), &[]),
                note_with(&["d"], today(), &[]),
            ]);

            let order: Vec<_> = notes
                .sort_by_file_last_modified_at()
                .iter()
                .map(|n| n.file_name.clone())
                .collect();
            assert_eq!(order, vec!["b", "d", "a", "c"]);
        }

        #[test]
        fn sort_then_limit() {
            let notes = Notes::new(vec![
                note_with(&["old"], yesterday() - Duration::days(1), &[]),
                note_with(&["new"], today(), &[]),
                note_with(&["mid"], yesterday(), &[]),
            ]);

            let recent = notes.sort_by_file_last_modified_at().limit(2);
            let names: Vec<_> = recent.iter().map(|n| n.file_name.as_str()).collect();
            assert_eq!(names, vec!["new", "mid"]);
        }
    }

    mod directories {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn empty_store() {
            assert!(Notes::new(vec![]).directories(ROOT).is_empty());
        }

        #[test]
        fn no_directories() {
            let notes = Notes::new(vec![note(&["note.md"])]);
            assert!(notes.directories(ROOT).is_empty());
        }

        #[test]
        fn one_directory() {
            let notes = Notes::new(vec![note(&["dir", "note.md"])]);
            assert_eq!(notes.directories(ROOT), vec!["dir"]);
        }

        #[test]
        fn one_directory_with_multiple_notes() {
            let notes = Notes::new(vec![note(&["dir", "note1.md"]), note(&["dir", "note2.md"])]);
            assert_eq!(notes.directories(ROOT), vec!["dir"]);
        }

        #[test]
        fn multiple_directories() {
            let notes = Notes::new(vec![note(&["dir1", "note.md"]), note(&["dir2", "note.md"])]);
            assert_eq!(notes.directories(ROOT), vec!["dir1", "dir2"]);
        }

        #[test]
        fn multiple_directories_with_subdirectories() {
            let notes = Notes::new(vec![
                note(&["dir1", "subdir1", "note.md"]),
                note(&["dir2", "subdir2", "note.md"]),
            ]);
            assert_eq!(notes.directories(ROOT), vec!["dir1", "dir2"]);
        }

        #[test]
        fn nested_note_and_direct_note() {
            let notes = Notes::new(vec![note(&["dir", "a.md"]), note(&["dir", "sub", "b.md"])]);
            assert_eq!(notes.directories(ROOT), vec!["dir"]);
            assert_eq!(notes.directories(&["dir"]), vec!["sub"]);
        }

        #[test]
        fn non_existent_directory() {
            assert!(Notes::new(vec![]).directories(&["non-existent"]).is_empty());

            let notes = Notes::new(vec![note(&["dir1", "note.md"]), note(&["dir2", "note.md"])]);
            assert!(notes.directories(&["non-existent"]).is_empty());
        }

        #[test]
        fn directory_without_subdirectories() {
            let notes = Notes::new(vec![note(&["dir", "note.md"])]);
            assert!(notes.directories(&["dir"]).is_empty());
        }

        #[test]
        fn multiple_subdirectories() {
            let notes = Notes::new(vec![
                note(&["dir", "note.md"]),
                note(&["dir", "subdir1", "note.md"]),
                note(&["dir", "subdir2", "note.md"]),
            ]);
            assert_eq!(notes.directories(&["dir"]), vec!["subdir1", "subdir2"]);
        }

        #[test]
        fn subdirectory_of_subdirectory() {
            let notes = Notes::new(vec![note(&["parent", "dir", "note.md"])]);
            assert!(notes.directories(&["parent", "dir"]).is_empty());

            let notes = Notes::new(vec![
                note(&["parent1", "dir1", "note.md"]),
                note(&["parent2", "dir2", "subdir", "note.md"]),
            ]);
            assert_eq!(notes.directories(&["parent2", "dir2"]), vec!["subdir"]);
            assert!(notes.directories(&["parent1", "dir2"]).is_empty());
        }

        #[test]
        fn owned_segments() {
            let notes = Notes::new(vec![note(&["a", "b", "n.md"])]);
            let parent = vec!["a".to_string()];
            assert_eq!(notes.directories(&parent), vec!["b"]);
        }
    }

    mod in_directory {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn root_of_empty_store() {
            assert!(Notes::new(vec![]).in_directory(ROOT).is_empty());
        }

        #[test]
        fn root_notes() {
            let notes = Notes::new(vec![
                note(&["note1.md"]),
                note(&["note2.md"]),
                note(&["dir", "nested.md"]),
            ]);
            assert_eq!(
                notes.in_directory(ROOT).get(),
                &[note(&["note1.md"]), note(&["note2.md"])]
            );
        }

        #[test]
        fn non_existent_directory() {
            let notes = Notes::new(vec![note(&["note.md"])]);
            assert!(notes.in_directory(&["non-existent"]).is_empty());
        }

        #[test]
        fn only_direct_children() {
            let notes = Notes::new(vec![
                note(&["dir", "a.md"]),
                note(&["other", "b.md"]),
                note(&["dir", "sub", "c.md"]),
            ]);
            assert_eq!(notes.in_directory(&["dir"]).get(), &[note(&["dir", "a.md"])]);
        }

        #[test]
        fn nested_directory() {
            let notes = Notes::new(vec![
                note(&["parent", "subdir", "note1.md"]),
                note(&["parent", "subdir", "note2.md"]),
                note(&["parent", "note3.md"]),
            ]);
            assert_eq!(
                notes.in_directory(&["parent", "subdir"]).get(),
                &[
                    note(&["parent", "subdir", "note1.md"]),
                    note(&["parent", "subdir", "note2.md"]),
                ]
            );
        }
    }

    mod tags {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn with_tag_on_empty_store() {
            assert!(Notes::new(vec![]).with_tag("tag").is_empty());
        }

        #[test]
        fn with_tag_one_match() {
            let notes = Notes::new(vec![tagged(&["note.md"], &["tag"])]);
            assert_eq!(notes.with_tag("tag").get(), &[tagged(&["note.md"], &["tag"])]);
        }

        #[test]
        fn with_tag_no_match() {
            let notes = Notes::new(vec![
                tagged(&["note1.md"], &["tag1"]),
                tagged(&["note2.md"], &["tag2"]),
            ]);
            assert!(notes.with_tag("otherTag").is_empty());
            assert!(notes.with_tag("tag").is_empty());
        }

        #[test]
        fn with_tag_multiple_matches() {
            let notes = Notes::new(vec![
                tagged(&["note1.md"], &["tag"]),
                tagged(&["note2.md"], &["other"]),
                tagged(&["note3.md"], &["tag"]),
            ]);
            assert_eq!(
                notes.with_tag("tag").get(),
                &[tagged(&["note1.md"], &["tag"]), tagged(&["note3.md"], &["tag"])]
            );
        }

        #[test]
        fn with_tag_is_case_sensitive() {
            let notes = Notes::new(vec![tagged(&["note.md"], &["Tag"])]);
            assert!(notes.with_tag("tag").is_empty());
        }

        #[test]
        fn with_missing_tag_selects_nothing() {
            let notes = Notes::new(vec![tagged(&["note.md"], &["tag"])]);
            assert!(notes.with_tag(None).is_empty());
        }

        #[test]
        fn with_tag_deduplicates_records() {
            let duplicate = tagged(&["note.md"], &["tag", "tag"]);
            let notes = Notes::new(vec![duplicate.clone(), duplicate.clone()]);
            assert_eq!(notes.with_tag("tag").get(), &[duplicate]);
        }

        #[test]
        fn all_tags_empty() {
            assert!(Notes::new(vec![]).all_tags().is_empty());
            let notes = Notes::new(vec![note(&["note1.md"]), note(&["note2.md"])]);
            assert!(notes.all_tags().is_empty());
        }

        #[test]
        fn all_tags_deduplicated() {
            let notes = Notes::new(vec![
                tagged(&["note1.md"], &["tag1", "tag2"]),
                tagged(&["note2.md"], &["tag1", "tag2"]),
            ]);
            assert_eq!(notes.all_tags(), vec!["tag1", "tag2"]);
        }

        #[test]
        fn all_tags_sorted() {
            let notes = Notes::new(vec![
                tagged(&["note1.md"], &["b", "a"]),
                tagged(&["note2.md"], &["a"]),
            ]);
            assert_eq!(notes.all_tags(), vec!["a", "b"]);
        }
    }
}
