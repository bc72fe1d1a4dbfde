//! vsnotes - browse a directory tree of markdown notes.
//!
//! # Overview
//!
//! A note store is a directory of `.md` files. vsnotes enumerates it
//! concurrently and extracts, for every note:
//! - its path relative to the store root
//! - its last modification time
//! - the `tags` list from its YAML front matter
//!
//! The resulting [`Notes`] collection answers queries for recent notes,
//! directory listings and tag membership. [`NoteTree`] builds the
//! files/tags tree view on top of it, and [`new_note`] creates notes from
//! configured name formats and templates.
//!
//! # Example
//!
//! ```no_run
//! use vsnotes::{IgnorePatterns, NoteStore, Notes};
//!
//! # async fn example() -> vsnotes::Result<()> {
//! let store = NoteStore::new("/path/to/notes", IgnorePatterns::default())?;
//! let notes = Notes::new(store.all().await?);
//!
//! for note in notes.sort_by_file_last_modified_at().limit(10).iter() {
//!     println!("{}", note.file_relative_path.display());
//! }
//! println!("Tags: {:?}", notes.all_tags());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod new_note;
pub mod note;
pub mod notes;
pub mod parser;
pub mod store;
pub mod template;
pub mod tree;

pub use config::{Config, IgnorePatterns};
pub use error::{NotesError, Result};
pub use note::Note;
pub use notes::Notes;
pub use store::NoteStore;
pub use template::{Template, TemplateStore};
pub use tree::{NoteTree, TreeNode};
