//! Resource upload CLI command.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{self, OutputFormat};
use sharehub_client::{UploadFile, UploadResponse};
use sharehub_client::views::{UploadForm, UploadView};
use sharehub_core::error::AppError;

/// Arguments for the upload command
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Resource name (will prompt if not provided)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Category label (will prompt if not provided)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Description (will prompt if not provided)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Path to the file to attach
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// External link, may be repeated
    #[arg(short, long)]
    pub link: Vec<String>,
}

/// Uploaded resource display row
#[derive(Debug, Serialize, Tabled)]
struct UploadedRow {
    /// Resource ID, when the server returned one
    id: String,
    /// Name
    name: String,
    /// Category
    category: String,
}

impl UploadedRow {
    fn new(name: String, category: String, response: &UploadResponse) -> Self {
        let id = response
            .resource
            .as_ref()
            .and_then(|r| r.get("id"))
            .and_then(|id| id.as_str())
            .unwrap_or("-")
            .to_string();
        Self { id, name, category }
    }
}

/// Execute the upload command
pub async fn execute(args: &UploadArgs, ctx: &Context) -> Result<(), AppError> {
    let file = match &args.file {
        Some(path) => Some(UploadFile::from_path(path).await?),
        None => None,
    };

    let form = UploadForm {
        name: super::text_or_prompt(args.name.as_ref(), "Name")?,
        category: super::text_or_prompt(args.category.as_ref(), "Category")?,
        description: super::text_or_prompt(args.description.as_ref(), "Description")?,
        links: args.link.clone(),
        file,
    };
    let (name, category) = (form.name.clone(), form.category.clone());

    let client = ctx.client()?;
    let mut view = UploadView::new(ctx.config.upload.clone());
    view.form = form;

    let response = view.submit(&client, &ctx.session).await?;

    if ctx.format == OutputFormat::Table {
        output::print_success(&format!("Resource '{}' uploaded", name));
    }
    output::print_item(&UploadedRow::new(name, category, &response), ctx.format);

    Ok(())
}
