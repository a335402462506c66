//! Resource feed endpoint.

use reqwest::Client;
use tracing::{debug, info};

use sharehub_entity::Resource;

use super::API_PREFIX;
use super::client::read_json;
use crate::error::Result;
use crate::types::ExploreResponse;

/// Explore feed client. Requests carry no credentials.
pub struct ExploreClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> ExploreClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch every resource in one request.
    pub async fn feed(&self) -> Result<Vec<Resource>> {
        let url = format!("{}{}/explore", self.base_url, API_PREFIX);
        debug!(url = %url, "Fetching explore feed");

        let response = self.http.get(&url).send().await?;
        let explore: ExploreResponse = read_json(response, "explore feed").await?;

        info!(count = explore.feed.len(), "Explore feed fetched");
        Ok(explore.feed)
    }
}
