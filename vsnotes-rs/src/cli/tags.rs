//! Tag-related CLI commands.

use crate::cli::list::ListResponse;
use crate::cli::output::Output;
use crate::error::Result;
use crate::notes::Notes;
use crate::store::NoteStore;
use serde::Serialize;

/// Output for `tags`.
#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<String>,
    pub total: usize,
}

/// Print every tag in the store.
pub async fn get_tags(store: &NoteStore, output: &Output) -> Result<()> {
    let tags = Notes::new(store.all().await?).all_tags();
    let total = tags.len();
    output.print(&TagsResponse { tags, total })
}

/// Print the notes carrying `tag`, most recent first.
pub async fn get_tagged(store: &NoteStore, tag: &str, output: &Output) -> Result<()> {
    let tagged = Notes::new(store.all().await?)
        .with_tag(tag)
        .sort_by_file_last_modified_at();
    let total = tagged.len();
    output.print(&ListResponse::new(tagged, total))
}
