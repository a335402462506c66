//! Upload endpoint.

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info, warn};

use sharehub_core::config::UploadEncoding;

use super::API_PREFIX;
use super::client::read_json;
use crate::error::{ClientError, Result};
use crate::types::{JsonUploadBody, UploadRequest, UploadResponse};

/// Upload client.
pub struct UploadClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> UploadClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Post one upload in the request's encoding.
    ///
    /// The token is sent as `Authorization: Bearer <token>`.
    pub async fn upload(
        &self,
        request: &UploadRequest,
        token: Option<&str>,
    ) -> Result<UploadResponse> {
        let url = format!("{}{}/upload", self.base_url, API_PREFIX);
        debug!(
            url = %url,
            name = %request.name,
            encoding = ?request.encoding,
            has_file = request.file.is_some(),
            links = request.links.len(),
            "Uploading resource"
        );

        let mut builder = self.http.post(&url);
        match token {
            Some(token) => builder = builder.bearer_auth(token),
            None => warn!("Uploading without a stored token"),
        }

        let builder = match request.encoding {
            UploadEncoding::Json => builder.json(&json_body(request)?),
            UploadEncoding::Multipart => builder.multipart(multipart_form(request)?),
        };

        let response = builder.send().await?;
        let upload: UploadResponse = read_json(response, "upload response").await?;

        if upload.is_success() {
            info!(name = %request.name, "Resource uploaded");
        }
        Ok(upload)
    }
}

fn json_body(request: &UploadRequest) -> Result<JsonUploadBody<'_>> {
    let file = request
        .file
        .as_ref()
        .map(|f| f.to_data_url_envelope())
        .transpose()?;

    Ok(JsonUploadBody {
        file,
        name: &request.name,
        category: &request.category,
        description: &request.description,
        user_id: request.user_id.as_deref(),
        links: (!request.links.is_empty()).then_some(request.links.as_slice()),
    })
}

fn multipart_form(request: &UploadRequest) -> Result<Form> {
    let links =
        serde_json::to_string(&request.links).map_err(|e| ClientError::ParseError(e.to_string()))?;

    let mut form = Form::new()
        .text("name", request.name.clone())
        .text("category", request.category.clone())
        .text("description", request.description.clone())
        .text("links", links);

    if let Some(user_id) = &request.user_id {
        form = form.text("userId", user_id.clone());
    }

    if let Some(file) = &request.file {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime_type)?;
        form = form.part("file", part);
    }

    Ok(form)
}
