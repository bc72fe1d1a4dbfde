//! Note creation, template and title commands.

use crate::cli::args::{NewArgs, TitleArgs};
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::Result;
use crate::new_note::NewNote;
use crate::parser::parse_title;
use crate::template::{Template, TemplateStore};
use chrono::Local;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub path: String,
    pub templates: Vec<Template>,
}

#[derive(Debug, Serialize)]
pub struct TitleResponse {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Print the templates configured for the store at `root`.
pub async fn templates(root: &Path, config: &Config, output: &Output) -> Result<()> {
    let store = TemplateStore::new(config.templates_file(root));
    let response = TemplatesResponse {
        path: store.path().to_string_lossy().to_string(),
        templates: store.all().await?,
    };
    output.print(&response)
}

/// Create a note under `root` and print its path.
pub async fn new_note(root: &Path, config: &Config, args: &NewArgs, output: &Output) -> Result<()> {
    let templates = TemplateStore::new(config.templates_file(root));
    let template = if args.no_template {
        None
    } else if let Some(name) = &args.template {
        Some(templates.get_template(name).await?)
    } else {
        templates.default_template().await?
    };

    let title_format = match (&args.title_format, args.title_index) {
        (Some(format), _) => Some(format.as_str()),
        (None, Some(index)) => Some(config.note_title_format(index)?),
        (None, None) => None,
    };
    let namer = config.note_namer(title_format);
    let request = NewNote {
        folder: root,
        name: &args.name,
        default_name: &config.default_note_name,
        namer: &namer,
        template: template.as_ref(),
    };
    let path = request.create(&Local::now()).await?;

    output.info(&format!("Created {}", path.display()));
    output.print(&CreateResponse {
        path: path.to_string_lossy().to_string(),
        template: template.map(|t| t.name),
    })
}

/// Print the first heading of a file.
pub async fn title(args: &TitleArgs, output: &Output) -> Result<()> {
    let bytes = tokio::fs::read(&args.path).await?;
    let content = String::from_utf8_lossy(&bytes);
    output.print(&TitleResponse {
        path: args.path.to_string_lossy().to_string(),
        title: parse_title(&content),
    })
}
