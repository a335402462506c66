//! Resource model as served by the explore feed.

use serde::{Deserialize, Deserializer, Serialize};

/// Category label attached to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Free-text category name.
    pub name: String,
}

/// The user who uploaded a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRef {
    /// Display name of the uploader.
    pub name: String,
}

/// A user-submitted file and/or set of links with descriptive metadata.
///
/// Resources are read-only on the client: they are fetched in bulk from the
/// explore endpoint and never mutated locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Backend identifier.
    pub id: String,
    /// Display name, the only field searched by the explore view.
    pub name: String,
    /// Public URL of the uploaded file, if any.
    #[serde(default)]
    pub file_url: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// External links attached to the resource.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub links: Vec<String>,
    /// Inline payload returned by older backends instead of `fileUrl`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Category label.
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Uploader.
    #[serde(default)]
    pub user: Option<OwnerRef>,
}

impl Resource {
    /// Category name, if the resource carries a non-empty one.
    pub fn category_name(&self) -> Option<&str> {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Uploader name, if known.
    pub fn owner_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }

    /// Case-insensitive substring match over the resource name.
    ///
    /// An empty query matches every resource.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
