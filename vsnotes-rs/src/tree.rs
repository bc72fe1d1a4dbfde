//! Hierarchical view over a note store: a "Files" branch mirroring the
//! directory layout and a "Tags" branch grouping notes by tag.

use crate::error::Result;
use crate::note::Note;
use crate::notes::Notes;
use crate::store::NoteStore;
use serde::Serialize;

/// A node of the note tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeNode {
    /// The "Files" root, i.e. the store root directory.
    RootDirectory,
    /// The "Tags" root.
    RootTag,
    /// A directory below the store root.
    Directory {
        name: String,
        /// Path segments from the store root, including `name`.
        segments: Vec<String>,
    },
    Tag { tag: String },
    Note { note: Note },
}

impl TreeNode {
    pub fn label(&self) -> &str {
        match self {
            TreeNode::RootDirectory => "Files",
            TreeNode::RootTag => "Tags",
            TreeNode::Directory { name, .. } => name,
            TreeNode::Tag { tag } => tag,
            TreeNode::Note { note } => &note.file_name,
        }
    }

    /// Whether the node can have children. Only notes are leaves.
    pub fn is_expandable(&self) -> bool {
        !matches!(self, TreeNode::Note { .. })
    }
}

/// Which root branches to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeOptions {
    pub hide_tags: bool,
    pub hide_files: bool,
}

/// A node together with all of its descendants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeItem {
    pub label: String,
    #[serde(flatten)]
    pub node: TreeNode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeItem>,
}

/// Computes tree children from a snapshot of the store.
#[derive(Debug, Clone)]
pub struct NoteTree {
    notes: Notes,
    options: TreeOptions,
}

impl NoteTree {
    pub fn new(notes: Notes, options: TreeOptions) -> Self {
        Self { notes, options }
    }

    /// Walk the store and build a tree over the result.
    pub async fn load(store: &NoteStore, options: TreeOptions) -> Result<Self> {
        let notes = Notes::new(store.all().await?);
        Ok(Self::new(notes, options))
    }

    /// Replace the snapshot with a fresh walk of the store.
    pub async fn refresh(&mut self, store: &NoteStore) -> Result<()> {
        self.notes = Notes::new(store.all().await?);
        Ok(())
    }

    pub fn notes(&self) -> &Notes {
        &self.notes
    }

    /// Children of `node`, or the root items when `node` is `None`.
    pub fn children(&self, node: Option<&TreeNode>) -> Vec<TreeNode> {
        let Some(node) = node else {
            return self.root_items();
        };

        match node {
            TreeNode::RootDirectory => self.directory_contents(&[]),
            TreeNode::Directory { segments, .. } => self.directory_contents(segments),
            TreeNode::RootTag => self
                .notes
                .all_tags()
                .into_iter()
                .map(|tag| TreeNode::Tag { tag })
                .collect(),
            TreeNode::Tag { tag } => note_nodes(self.notes.with_tag(tag.as_str())),
            TreeNode::Note { .. } => Vec::new(),
        }
    }

    /// Expand the whole tree from the root items down.
    pub fn expand(&self) -> Vec<TreeItem> {
        self.root_items()
            .into_iter()
            .map(|node| self.expand_node(node))
            .collect()
    }

    fn expand_node(&self, node: TreeNode) -> TreeItem {
        let children = self
            .children(Some(&node))
            .into_iter()
            .map(|child| self.expand_node(child))
            .collect();
        TreeItem {
            label: node.label().to_string(),
            node,
            children,
        }
    }

    fn root_items(&self) -> Vec<TreeNode> {
        let mut items = Vec::new();
        if !self.options.hide_files {
            items.push(TreeNode::RootDirectory);
        }
        if !self.options.hide_tags {
            items.push(TreeNode::RootTag);
        }
        items
    }

    fn directory_contents(&self, parent: &[String]) -> Vec<TreeNode> {
        let directories = self.notes.directories(parent).into_iter().map(|name| {
            let mut segments = parent.to_vec();
            segments.push(name.clone());
            TreeNode::Directory { name, segments }
        });

        directories
            .chain(note_nodes(self.notes.in_directory(parent)))
            .collect()
    }
}

fn note_nodes(notes: Notes) -> Vec<TreeNode> {
    notes.into_iter().map(|note| TreeNode::Note { note }).collect()
}
