//! Directory listing and tree commands.

use crate::cli::args::{LsArgs, TreeArgs};
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::Result;
use crate::note::Note;
use crate::notes::Notes;
use crate::store::NoteStore;
use crate::tree::{NoteTree, TreeItem, TreeOptions};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LsResponse {
    pub directories: Vec<String>,
    pub notes: Vec<Note>,
}

#[derive(Debug, Serialize)]
pub struct TreeResponse {
    pub items: Vec<TreeItem>,
}

/// Print one level of the store: its subdirectories, then its notes.
pub async fn ls(store: &NoteStore, args: &LsArgs, output: &Output) -> Result<()> {
    let notes = Notes::new(store.all().await?);
    let response = LsResponse {
        directories: notes.directories(args.segments.as_slice()),
        notes: notes.in_directory(args.segments.as_slice()).into_inner(),
    };
    output.print(&response)
}

/// Print the fully expanded tree.
pub async fn tree(store: &NoteStore, config: &Config, args: &TreeArgs, output: &Output) -> Result<()> {
    let options = TreeOptions {
        hide_tags: args.hide_tags || config.treeview_hide_tags,
        hide_files: args.hide_files || config.treeview_hide_files,
    };
    let tree = NoteTree::load(store, options).await?;
    output.print(&TreeResponse {
        items: tree.expand(),
    })
}
