//! Document title detection.

const TITLE_PREFIX: &str = "# ";

/// Find the document title: the first line that starts with `"# "`.
///
/// Only level-1 headings written at the very start of a line qualify, and
/// the returned title is the rest of that line after the prefix.
pub fn parse_title(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(str::to_string)
}
