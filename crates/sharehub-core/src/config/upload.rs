//! Upload form configuration.

use serde::{Deserialize, Serialize};

/// Body encoding used when posting an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadEncoding {
    /// `multipart/form-data` with a binary file part.
    #[default]
    Multipart,
    /// JSON body with the file inlined as a base64 data URL.
    Json,
}

/// Upload form behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Request body encoding.
    #[serde(default)]
    pub encoding: UploadEncoding,
    /// Waive the file requirement when at least one link is supplied.
    #[serde(default)]
    pub file_optional_with_links: bool,
}
