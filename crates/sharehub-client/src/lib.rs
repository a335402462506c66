//! ShareHub Client
//!
//! HTTP client and view state for the ShareHub resource-sharing API.
//!
//! # Features
//!
//! - **Authentication**: login and registration against `/api/v1`
//! - **Explore**: fetch the resource feed, group it by category, search it locally
//! - **Upload**: validate the upload form and post it as JSON or multipart
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use sharehub_auth::{MemoryTokenStore, SessionContext};
//! use sharehub_client::{ShareHubClient, views::ExploreView};
//!
//! let client = ShareHubClient::new(&config.api)?;
//! let session = SessionContext::initialize(Arc::new(MemoryTokenStore::new()), &config.session);
//!
//! let mut explore = ExploreView::new();
//! explore.mount(&client).await;
//! explore.set_query("rust");
//! for tab in explore.tabs() {
//!     println!("{}: {}", tab.label, tab.resources.len());
//! }
//! ```

pub mod api;
pub mod error;
pub mod types;
pub mod views;

pub use api::{ShareHubApi, ShareHubClient};
pub use error::{ClientError, Result};
pub use types::{
    ExploreResponse, LoginResponse, RegisterResponse, UploadFile, UploadRequest, UploadResponse,
};
