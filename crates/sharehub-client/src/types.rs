//! Request and response types for the ShareHub API.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use sharehub_core::config::UploadEncoding;
use sharehub_entity::Resource;

use crate::error::{ClientError, Result};

/// Response of `POST /api/v1/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token, present on success.
    #[serde(default)]
    pub token: Option<String>,
    /// Reason for a refused login.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `POST /api/v1/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Whether the account was created.
    #[serde(default)]
    pub success: bool,
    /// Reason for a refused registration.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `GET /api/v1/explore`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreResponse {
    /// Every resource visible to anyone.
    pub feed: Vec<Resource>,
}

/// Response of `POST /api/v1/upload`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    /// The created resource, present on success.
    #[serde(default)]
    pub resource: Option<Value>,
    /// Reason for a refused upload.
    #[serde(default)]
    pub message: Option<String>,
}

impl UploadResponse {
    /// Success is signalled by a truthy `resource` field.
    pub fn is_success(&self) -> bool {
        self.resource.as_ref().is_some_and(is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A file picked for upload, held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name sent to the server.
    pub file_name: String,
    /// MIME type guessed from the file name.
    pub mime_type: String,
    /// Raw contents.
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Wrap in-memory contents, guessing the MIME type from `file_name`.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .to_string();
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }

    /// Read a file from disk.
    pub async fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ClientError::FileNotFound(path.display().to_string()));
        }

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(file_name, bytes))
    }

    /// The JSON envelope used by the JSON upload encoding:
    /// `{"data":"data:<mime>;base64,<b64>","fileType":..,"fileName":..}`.
    pub fn to_data_url_envelope(&self) -> Result<String> {
        let envelope = serde_json::json!({
            "data": format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes)),
            "fileType": self.mime_type,
            "fileName": self.file_name,
        });
        serde_json::to_string(&envelope).map_err(|e| ClientError::ParseError(e.to_string()))
    }
}

/// Everything needed to post one upload.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Body encoding.
    pub encoding: UploadEncoding,
    /// Resource name.
    pub name: String,
    /// Category label.
    pub category: String,
    /// Description.
    pub description: String,
    /// Uploader id from the session, if known.
    pub user_id: Option<String>,
    /// External links.
    pub links: Vec<String>,
    /// Attached file.
    pub file: Option<UploadFile>,
}

/// JSON body of the JSON upload encoding.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JsonUploadBody<'a> {
    pub file: Option<String>,
    pub name: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub user_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<&'a [String]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_truthiness() {
        let parse = |v: Value| serde_json::from_value::<UploadResponse>(v).unwrap();

        assert!(parse(serde_json::json!({ "resource": { "id": "1" } })).is_success());
        assert!(parse(serde_json::json!({ "resource": "r1" })).is_success());
        assert!(!parse(serde_json::json!({ "resource": null })).is_success());
        assert!(!parse(serde_json::json!({ "resource": false })).is_success());
        assert!(!parse(serde_json::json!({ "resource": "" })).is_success());
        assert!(!parse(serde_json::json!({ "message": "nope" })).is_success());
    }

    #[test]
    fn test_data_url_envelope() {
        let file = UploadFile::new("notes.txt", b"hi".to_vec());
        assert_eq!(file.mime_type, "text/plain");

        let envelope: Value = serde_json::from_str(&file.to_data_url_envelope().unwrap()).unwrap();
        assert_eq!(envelope["data"], "data:text/plain;base64,aGk=");
        assert_eq!(envelope["fileType"], "text/plain");
        assert_eq!(envelope["fileName"], "notes.txt");
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() {
        let file = UploadFile::new("blob.zzzunknown", Vec::new());
        assert_eq!(file.mime_type, "application/octet-stream");
    }

    #[tokio::test]
    async fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slides.pdf");
        std::fs::write(&path, b"%PDF").unwrap();

        let file = UploadFile::from_path(&path).await.unwrap();
        assert_eq!(file.file_name, "slides.pdf");
        assert_eq!(file.mime_type, "application/pdf");
        assert_eq!(file.bytes, b"%PDF");

        let missing = UploadFile::from_path(&dir.path().join("nope.pdf")).await;
        assert!(matches!(missing, Err(ClientError::FileNotFound(_))));
    }
}
