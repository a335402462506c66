//! Resource feed CLI command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{self, OutputFormat};
use sharehub_client::views::ExploreView;
use sharehub_core::error::AppError;
use sharehub_entity::Resource;

/// Arguments for the explore command
#[derive(Debug, Args)]
pub struct ExploreArgs {
    /// Only show resources whose name contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show one category tab
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Resource display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ResourceRow {
    /// Resource ID
    id: String,
    /// Name
    name: String,
    /// Category
    category: String,
    /// Uploader
    owner: String,
    /// File URL
    file: String,
    /// Number of links
    links: usize,
}

impl From<&Resource> for ResourceRow {
    fn from(r: &Resource) -> Self {
        Self {
            id: r.id.clone(),
            name: r.name.clone(),
            category: r.category_name().unwrap_or("-").to_string(),
            owner: r.owner_name().unwrap_or("-").to_string(),
            file: r.file_url.clone().unwrap_or_else(|| "-".to_string()),
            links: r.links.len(),
        }
    }
}

/// Execute the explore command
pub async fn execute(args: &ExploreArgs, ctx: &Context) -> Result<(), AppError> {
    let client = ctx.client()?;

    let mut view = ExploreView::new();
    view.mount(&client).await;
    if let Some(message) = view.error() {
        return Err(AppError::external_service(message));
    }

    if let Some(query) = &args.search {
        view.set_query(query.as_str());
    }

    let resources = match &args.category {
        Some(name) => view
            .category(name)
            .ok_or_else(|| AppError::validation(format!("Unknown category '{}'", name)))?,
        None => view.filtered(),
    };

    let rows: Vec<ResourceRow> = resources.into_iter().map(ResourceRow::from).collect();
    output::print_list(&rows, ctx.format);

    if args.category.is_none() && ctx.format == OutputFormat::Table {
        for tab in view.tabs().iter().skip(1) {
            output::print_kv(tab.label, &tab.resources.len().to_string());
        }
    }

    Ok(())
}
