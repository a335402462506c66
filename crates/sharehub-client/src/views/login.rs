//! Login form submission.

use tracing::{error, warn};

use sharehub_auth::{LoginCredentials, Route, SessionContext};

use super::notice::Notice;
use crate::api::ShareHubApi;

/// The login screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginView;

impl LoginView {
    /// Validate, call the backend, and log the session in.
    ///
    /// Returns the route to navigate to, or the notice to show. Transport
    /// and server failures all collapse into one generic "Login Error".
    pub async fn submit(
        api: &dyn ShareHubApi,
        session: &mut SessionContext,
        credentials: &LoginCredentials,
    ) -> Result<Route, Notice> {
        credentials
            .check()
            .map_err(|e| Notice::error("Invalid input", e.message))?;

        let response = match api.login(credentials).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Login error");
                return Err(login_error());
            }
        };

        let Some(token) = response.token.filter(|t| !t.is_empty()) else {
            warn!(message = ?response.message, "Login refused");
            return Err(Notice::error(
                "Login Failed",
                response.message.unwrap_or_else(|| "Unable to login".to_string()),
            ));
        };

        session.login(&token).map_err(|e| {
            error!(error = %e, "Failed to persist session");
            login_error()
        })
    }
}

fn login_error() -> Notice {
    Notice::error("Login Error", "An unexpected error occurred")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::types::LoginResponse;
    use crate::views::testing::{FakeApi, transport_error};
    use sharehub_auth::MemoryTokenStore;
    use sharehub_core::config::SessionConfig;
    use sharehub_core::traits::TokenStore;

    const ALICE: &str = "header.eyJuYW1lIjoiQWxpY2UiLCJ1c2VySWQiOiIxMjMifQ.sig";

    fn session(store: Arc<dyn TokenStore>) -> SessionContext {
        SessionContext::initialize(store, &SessionConfig::default())
    }

    fn credentials() -> LoginCredentials {
        LoginCredentials::new("alice@example.com", "password123")
    }

    #[tokio::test]
    async fn test_successful_login_navigates_to_explore() {
        let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
        let mut ctx = session(store.clone());
        let api = FakeApi {
            login: Box::new(|| {
                Ok(LoginResponse {
                    token: Some(ALICE.to_string()),
                    message: None,
                })
            }),
            ..FakeApi::default()
        };

        let route = LoginView::submit(&api, &mut ctx, &credentials()).await.unwrap();
        assert_eq!(route, Route::Explore);
        assert_eq!(ctx.user().unwrap().name, "Alice");
        assert_eq!(store.load().unwrap().as_deref(), Some(ALICE));
    }

    #[tokio::test]
    async fn test_missing_token_shows_server_message() {
        let mut ctx = session(Arc::new(MemoryTokenStore::new()));
        let api = FakeApi {
            login: Box::new(|| {
                Ok(LoginResponse {
                    token: None,
                    message: Some("Wrong password".to_string()),
                })
            }),
            ..FakeApi::default()
        };

        let notice = LoginView::submit(&api, &mut ctx, &credentials()).await.unwrap_err();
        assert_eq!(notice, Notice::error("Login Failed", "Wrong password"));
        assert!(!ctx.is_logged_in());

        let api = FakeApi::default();
        let notice = LoginView::submit(&api, &mut ctx, &credentials()).await.unwrap_err();
        assert_eq!(notice.description, "Unable to login");
    }

    #[tokio::test]
    async fn test_empty_token_is_refused() {
        let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
        let mut ctx = session(store.clone());
        let api = FakeApi {
            login: Box::new(|| {
                Ok(LoginResponse {
                    token: Some(String::new()),
                    message: Some("bad".to_string()),
                })
            }),
            ..FakeApi::default()
        };

        let notice = LoginView::submit(&api, &mut ctx, &credentials()).await.unwrap_err();
        assert_eq!(notice, Notice::error("Login Failed", "bad"));
        assert!(!ctx.is_logged_in());
        assert!(store.load().unwrap().is_none());

        let api = FakeApi {
            login: Box::new(|| {
                Ok(LoginResponse {
                    token: Some(String::new()),
                    message: None,
                })
            }),
            ..FakeApi::default()
        };
        let notice = LoginView::submit(&api, &mut ctx, &credentials()).await.unwrap_err();
        assert_eq!(notice.description, "Unable to login");
    }

    #[tokio::test]
    async fn test_transport_error_is_generic() {
        let mut ctx = session(Arc::new(MemoryTokenStore::new()));
        let api = FakeApi {
            login: Box::new(|| Err(transport_error())),
            ..FakeApi::default()
        };

        let notice = LoginView::submit(&api, &mut ctx, &credentials()).await.unwrap_err();
        assert_eq!(notice, Notice::error("Login Error", "An unexpected error occurred"));
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let mut ctx = session(Arc::new(MemoryTokenStore::new()));
        let api = FakeApi::default();

        let bad = LoginCredentials::new("alice", "password123");
        let notice = LoginView::submit(&api, &mut ctx, &bad).await.unwrap_err();
        assert_eq!(notice.description, "Invalid email address");
        assert_eq!(api.calls(), 0);
    }
}
