//! List command implementation.

use crate::cli::args::ListArgs;
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::Result;
use crate::note::Note;
use crate::notes::Notes;
use crate::store::NoteStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub notes: Vec<Note>,
    pub total: usize,
}

impl ListResponse {
    /// `total` counts the notes before any limit was applied.
    pub fn new(notes: Notes, total: usize) -> Self {
        Self {
            notes: notes.into_inner(),
            total,
        }
    }
}

/// Most recently modified notes first, limited to the configured count.
pub async fn run(store: &NoteStore, config: &Config, args: &ListArgs, output: &Output) -> Result<()> {
    let notes = Notes::new(store.all().await?);
    let total = notes.len();

    let sorted = notes.sort_by_file_last_modified_at();
    let recent = if args.all {
        sorted
    } else {
        sorted.limit(args.limit.unwrap_or(config.list_recent_limit))
    };

    output.print(&ListResponse::new(recent, total))
}
