//! Upload screen: form validation and submission.

use tracing::{error, warn};

use sharehub_auth::SessionContext;
use sharehub_core::config::UploadConfig;
use sharehub_core::error::{AppError, ErrorKind};
use sharehub_core::result::AppResult;

use crate::api::ShareHubApi;
use crate::types::{UploadFile, UploadRequest, UploadResponse};

/// Message shown when a required field is empty.
pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";

/// Message shown when the request itself failed.
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload file";

/// Editable fields of the upload form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    /// Resource name.
    pub name: String,
    /// Category label.
    pub category: String,
    /// Description.
    pub description: String,
    /// External links; blank entries are ignored.
    pub links: Vec<String>,
    /// Attached file.
    pub file: Option<UploadFile>,
}

impl UploadForm {
    /// Links with blank entries removed.
    pub fn links(&self) -> Vec<String> {
        self.links
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Check required fields.
    ///
    /// Name, category and description must be non-empty; whitespace counts
    /// as a value and is sent unchanged. The file is
    /// required unless `file_optional_with_links` is set and a link is given.
    pub fn validate(&self, config: &UploadConfig) -> AppResult<()> {
        let text_missing = [&self.name, &self.category, &self.description]
            .iter()
            .any(|v| v.is_empty());

        let file_missing = self.file.is_none()
            && !(config.file_optional_with_links && !self.links().is_empty());

        if text_missing || file_missing {
            return Err(AppError::validation(REQUIRED_FIELDS_MESSAGE));
        }
        Ok(())
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// State of the upload screen.
#[derive(Debug, Clone, Default)]
pub struct UploadView {
    /// The form being edited.
    pub form: UploadForm,
    config: UploadConfig,
    error: Option<String>,
}

impl UploadView {
    /// An empty form.
    pub fn new(config: UploadConfig) -> Self {
        Self {
            form: UploadForm::default(),
            config,
            error: None,
        }
    }

    /// Error from the last submission, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate and post the form.
    ///
    /// The bearer token is read from the session's store at call time. On
    /// success the form is cleared; on failure it keeps its values and the
    /// returned error carries the message to show.
    pub async fn submit(
        &mut self,
        api: &dyn ShareHubApi,
        session: &SessionContext,
    ) -> AppResult<UploadResponse> {
        let result = self.try_submit(api, session).await;

        match &result {
            Ok(_) => {
                self.error = None;
                self.form.reset();
            }
            Err(e) => self.error = Some(e.message.clone()),
        }
        result
    }

    async fn try_submit(
        &self,
        api: &dyn ShareHubApi,
        session: &SessionContext,
    ) -> AppResult<UploadResponse> {
        self.form.validate(&self.config)?;

        let token = session.store().load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read token for upload");
            None
        });

        let request = UploadRequest {
            encoding: self.config.encoding,
            name: self.form.name.clone(),
            category: self.form.category.clone(),
            description: self.form.description.clone(),
            user_id: session.user().map(|u| u.user_id.clone()),
            links: self.form.links(),
            file: self.form.file.clone(),
        };

        let response = api
            .upload(&request, token.as_deref())
            .await
            .map_err(|e| {
                error!(error = %e, "Upload failed");
                AppError::with_source(ErrorKind::ExternalService, UPLOAD_FAILED_MESSAGE, e)
            })?;

        if response.is_success() {
            Ok(response)
        } else {
            let message = response
                .message
                .clone()
                .unwrap_or_else(|| "Upload failed".to_string());
            warn!(message = %message, "Upload refused");
            Err(AppError::external_service(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::views::testing::{FakeApi, transport_error};
    use sharehub_auth::MemoryTokenStore;
    use sharehub_core::config::{SessionConfig, UploadEncoding};
    use sharehub_core::traits::TokenStore;

    const ALICE: &str = "header.eyJuYW1lIjoiQWxpY2UiLCJ1c2VySWQiOiIxMjMifQ.sig";

    fn session() -> SessionContext {
        SessionContext::initialize(
            Arc::new(MemoryTokenStore::with_token(ALICE)),
            &SessionConfig::default(),
        )
    }

    fn filled() -> UploadForm {
        UploadForm {
            name: "Notes".to_string(),
            category: "Math".to_string(),
            description: "Lecture notes".to_string(),
            links: Vec::new(),
            file: Some(UploadFile::new("notes.txt", b"hello".to_vec())),
        }
    }

    fn accepting_api() -> FakeApi {
        FakeApi {
            upload: Box::new(|| {
                Ok(UploadResponse {
                    resource: Some(serde_json::json!({ "id": "r1" })),
                    message: None,
                })
            }),
            ..FakeApi::default()
        }
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected_without_request() {
        let api = accepting_api();
        let mut view = UploadView::new(UploadConfig::default());
        view.form = UploadForm {
            name: String::new(),
            ..filled()
        };

        let err = view.submit(&api, &session()).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.message, "All fields are required");
        assert_eq!(view.error(), Some("All fields are required"));
        assert_eq!(api.calls(), 0);
        assert_eq!(view.form.category, "Math");
    }

    #[test]
    fn test_file_requirement_policy() {
        let links_only = UploadForm {
            links: vec!["https://example.com".to_string()],
            file: None,
            ..filled()
        };

        assert!(links_only.validate(&UploadConfig::default()).is_err());

        let lenient = UploadConfig {
            file_optional_with_links: true,
            ..UploadConfig::default()
        };
        assert!(links_only.validate(&lenient).is_ok());

        let blank_links = UploadForm {
            links: vec!["   ".to_string()],
            file: None,
            ..filled()
        };
        assert!(blank_links.validate(&lenient).is_err());
    }

    #[tokio::test]
    async fn test_whitespace_counts_as_filled() {
        let api = accepting_api();
        let mut view = UploadView::new(UploadConfig::default());
        view.form = UploadForm {
            name: " ".to_string(),
            ..filled()
        };

        view.submit(&api, &session()).await.unwrap();
        let (request, _) = api.last_upload.lock().unwrap().clone().unwrap();
        assert_eq!(request.name, " ");
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn test_success_resets_form_and_sends_fresh_token() {
        let api = accepting_api();
        let ctx = session();
        ctx.store().save("fresh.token.value").unwrap();

        let mut view = UploadView::new(UploadConfig {
            encoding: UploadEncoding::Json,
            file_optional_with_links: false,
        });
        view.form = filled();

        view.submit(&api, &ctx).await.unwrap();
        assert_eq!(view.form, UploadForm::default());
        assert!(view.error().is_none());

        let (request, token) = api.last_upload.lock().unwrap().clone().unwrap();
        assert_eq!(token.as_deref(), Some("fresh.token.value"));
        assert_eq!(request.user_id.as_deref(), Some("123"));
        assert_eq!(request.encoding, UploadEncoding::Json);
    }

    #[tokio::test]
    async fn test_refused_upload_keeps_form() {
        let api = FakeApi {
            upload: Box::new(|| {
                Ok(UploadResponse {
                    resource: None,
                    message: Some("Category not allowed".to_string()),
                })
            }),
            ..FakeApi::default()
        };
        let mut view = UploadView::new(UploadConfig::default());
        view.form = filled();

        let err = view.submit(&api, &session()).await.unwrap_err();
        assert_eq!(err.message, "Category not allowed");
        assert_eq!(view.form, filled());

        let api = FakeApi::default();
        let err = view.submit(&api, &session()).await.unwrap_err();
        assert_eq!(err.message, "Upload failed");
    }

    #[tokio::test]
    async fn test_transport_failure_is_generic() {
        let api = FakeApi {
            upload: Box::new(|| Err(transport_error())),
            ..FakeApi::default()
        };
        let mut view = UploadView::new(UploadConfig::default());
        view.form = filled();

        let err = view.submit(&api, &session()).await.unwrap_err();
        assert_eq!(err.message, "Failed to upload file");
        assert_eq!(view.error(), Some("Failed to upload file"));
        assert_eq!(view.form, filled());
    }
}
