//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vsnotes")]
#[command(author, version, about = "Browse a directory of markdown notes", long_about = None)]
pub struct Cli {
    /// Path to the note store (overrides default-note-path)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Config file (defaults to $VSNOTES_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the most recently modified notes
    List(ListArgs),

    /// List every tag used in the store
    Tags,

    /// List notes carrying a tag
    Tagged(TaggedArgs),

    /// List the subdirectories and notes of one directory
    Ls(LsArgs),

    /// Show the files and tags tree
    Tree(TreeArgs),

    /// Print the title of a note
    Title(TitleArgs),

    /// List the configured note templates
    Templates,

    /// Create a new note
    New(NewArgs),
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Number of notes to show (defaults to list-recent-limit)
    #[arg(long, conflicts_with = "all")]
    pub limit: Option<usize>,

    /// Show every note
    #[arg(long)]
    pub all: bool,
}

#[derive(Parser, Debug)]
pub struct TaggedArgs {
    /// Tag to filter by (exact, case-sensitive)
    pub tag: String,
}

#[derive(Parser, Debug)]
pub struct LsArgs {
    /// Directory path segments below the store root (none for the root)
    pub segments: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Hide the tags branch
    #[arg(long)]
    pub hide_tags: bool,

    /// Hide the files branch
    #[arg(long)]
    pub hide_files: bool,
}

#[derive(Parser, Debug)]
pub struct TitleArgs {
    /// File to read
    pub path: PathBuf,
}

#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note name, optionally prefixed with directories (e.g. journal/Today)
    #[arg(default_value = "")]
    pub name: String,

    /// Template to fill the note with (defaults to the default template)
    #[arg(long)]
    pub template: Option<String>,

    /// Do not use any template
    #[arg(long, conflicts_with = "template")]
    pub no_template: bool,

    /// File name format, overriding default-note-title
    #[arg(long, conflicts_with = "title_index")]
    pub title_format: Option<String>,

    /// Pick a configured file name format: 0 is default-note-title, 1.. are
    /// the additional-note-titles in order
    #[arg(long)]
    pub title_index: Option<usize>,
}
