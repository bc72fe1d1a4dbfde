//! Note templates stored in a JSON file.
//!
//! The file holds an array of templates:
//!
//! ```json
//! [
//!   { "name": "daily", "description": "Daily log", "default": true,
//!     "body": ["# {title}", "", "Created {dt}"] }
//! ]
//! ```

use crate::error::{NotesError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A template as written in the templates file.
#[derive(Debug, Deserialize)]
struct TemplateEntry {
    name: String,
    body: Vec<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    default: Option<bool>,
}

/// A note template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Body lines joined with newlines.
    pub body: String,
    #[serde(rename = "default")]
    pub is_default: bool,
}

impl TemplateEntry {
    fn into_template(self) -> Template {
        Template {
            name: self.name,
            description: self.description,
            body: self.body.join("\n"),
            is_default: self.default.unwrap_or(false),
        }
    }
}

/// Reads templates from a JSON file.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All templates in file order.
    ///
    /// A missing file, or valid JSON that does not describe a list of
    /// templates, yields no templates. Invalid JSON is an error.
    pub async fn all(&self) -> Result<Vec<Template>> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let value: serde_json::Value =
            serde_json::from_str(&data).map_err(|e| NotesError::InvalidTemplates {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        match serde_json::from_value::<Vec<TemplateEntry>>(value) {
            Ok(entries) => Ok(entries.into_iter().map(TemplateEntry::into_template).collect()),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring templates file");
                Ok(Vec::new())
            }
        }
    }

    /// The template called `name`.
    pub async fn get_template(&self, name: &str) -> Result<Template> {
        self.all()
            .await?
            .into_iter()
            .find(|t| t.name == name)
            .ok_or_else(|| NotesError::TemplateNotFound {
                name: name.to_string(),
                path: self.path.clone(),
            })
    }

    /// The first template marked as default, if any.
    pub async fn default_template(&self) -> Result<Option<Template>> {
        Ok(self.all().await?.into_iter().find(|t| t.is_default))
    }
}
