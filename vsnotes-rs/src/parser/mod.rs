//! Parsers for note metadata.

pub mod frontmatter;
pub mod title;

pub use frontmatter::{extract_frontmatter, parse_frontmatter, parse_tags, split_frontmatter};
pub use title::parse_title;
