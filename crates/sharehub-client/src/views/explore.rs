//! Explore screen: resource feed, category tabs, local search.

use serde::Serialize;
use tracing::error;

use sharehub_entity::{CategoryGroup, Resource};

use crate::api::ShareHubApi;

/// Label of the tab holding every resource.
pub const ALL_TAB: &str = "All";

/// One tab of the explore screen after filtering.
#[derive(Debug, Clone, Serialize)]
pub struct Tab<'a> {
    /// Tab label: [`ALL_TAB`] or a category name.
    pub label: &'a str,
    /// Resources matching the current query.
    pub resources: Vec<&'a Resource>,
}

/// State of the explore screen.
#[derive(Debug, Clone)]
pub struct ExploreView {
    resources: Vec<Resource>,
    categories: Vec<CategoryGroup>,
    query: String,
    loading: bool,
    error: Option<String>,
}

impl Default for ExploreView {
    fn default() -> Self {
        Self::new()
    }
}

impl ExploreView {
    /// A view that has not fetched yet.
    pub fn new() -> Self {
        Self {
            resources: Vec::new(),
            categories: Vec::new(),
            query: String::new(),
            loading: true,
            error: None,
        }
    }

    /// Fetch the feed once. Failures are logged and leave an empty,
    /// non-loading view; nothing is retried.
    pub async fn mount(&mut self, api: &dyn ShareHubApi) {
        match api.explore().await {
            Ok(feed) => self.load(feed),
            Err(e) => {
                error!(error = %e, "Error fetching resources");
                self.resources.clear();
                self.categories.clear();
                self.loading = false;
                self.error = Some("Failed to load resources".to_string());
            }
        }
    }

    /// Replace the feed and recompute the category groups.
    pub fn load(&mut self, feed: Vec<Resource>) {
        self.categories = CategoryGroup::group(&feed);
        self.resources = feed;
        self.loading = false;
        self.error = None;
    }

    /// Update the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Current search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the fetch is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed fetch.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The unfiltered feed.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Category groups in first-occurrence order.
    pub fn categories(&self) -> &[CategoryGroup] {
        &self.categories
    }

    /// The "All" tab under the current query.
    pub fn filtered(&self) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.matches(&self.query))
            .collect()
    }

    /// One category tab under the current query, if the category exists.
    pub fn category(&self, name: &str) -> Option<Vec<&Resource>> {
        self.categories
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.filtered(&self.query))
    }

    /// The "All" tab followed by every category tab.
    pub fn tabs(&self) -> Vec<Tab<'_>> {
        std::iter::once(Tab {
            label: ALL_TAB,
            resources: self.filtered(),
        })
        .chain(self.categories.iter().map(|g| Tab {
            label: g.name.as_str(),
            resources: g.filtered(&self.query),
        }))
        .collect()
    }
}
