//! YAML front matter parsing and tag extraction.

use serde_yaml::Value;

/// A note split into its front matter block and the remaining body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterSplit<'a> {
    /// The raw YAML between the delimiters, if a complete block was found.
    pub yaml: Option<&'a str>,
    /// Everything after the closing delimiter line (or the whole content).
    pub body: &'a str,
}

/// Split content into its front matter block and body.
///
/// A block opens with `---` on the very first line and closes at the next
/// line consisting of `---`. Content without a complete block is returned
/// unchanged as the body.
pub fn split_frontmatter(content: &str) -> FrontmatterSplit<'_> {
    let unsplit = FrontmatterSplit {
        yaml: None,
        body: content,
    };

    let Some(after_open) = content.strip_prefix("---") else {
        return unsplit;
    };
    let Some(block) = after_open
        .strip_prefix('\n')
        .or_else(|| after_open.strip_prefix("\r\n"))
    else {
        return unsplit;
    };

    let mut offset = 0;
    for line in block.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &block[..offset];
            let yaml = yaml.strip_suffix('\n').unwrap_or(yaml);
            let yaml = yaml.strip_suffix('\r').unwrap_or(yaml);
            return FrontmatterSplit {
                yaml: Some(yaml),
                body: &block[offset + line.len()..],
            };
        }
        offset += line.len();
    }

    unsplit
}

/// Extract the raw YAML of the front matter block.
pub fn extract_frontmatter(content: &str) -> Option<&str> {
    split_frontmatter(content).yaml
}

/// Parse the front matter block into a YAML value.
///
/// Malformed YAML is logged and treated as absent.
pub fn parse_frontmatter(content: &str) -> Option<Value> {
    let yaml = extract_frontmatter(content)?;
    match serde_yaml::from_str::<Value>(yaml) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed front matter");
            None
        }
    }
}

/// Extract the `tags` list declared in the front matter.
///
/// Returns an empty list when there is no front matter, when it cannot be
/// parsed, or when `tags` is not a sequence. Null and blank entries are
/// dropped and the rest are trimmed, keeping their order.
pub fn parse_tags(content: &str) -> Vec<String> {
    let Some(frontmatter) = parse_frontmatter(content) else {
        return Vec::new();
    };

    match frontmatter.get("tags") {
        Some(Value::Sequence(entries)) => entries.iter().filter_map(tag_from_value).collect(),
        Some(other) => {
            tracing::debug!(tags = ?other, "front matter tags is not a list");
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn tag_from_value(value: &Value) -> Option<String> {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Tagged(tagged) => return tag_from_value(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => return None,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
