//! Session context owned by the application root.
//!
//! The context is built once at start-up from the token store and then
//! handed by reference to every view. `login` and `logout` are the only
//! mutations, and each one returns the route the client should navigate to.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use sharehub_core::config::{LoginPolicy, SessionConfig};
use sharehub_core::result::AppResult;
use sharehub_core::traits::TokenStore;
use sharehub_entity::UserIdentity;

use crate::guard::Route;
use crate::jwt::TokenDecoder;

/// What the client currently believes about who is logged in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Whether views behind the guard may render.
    pub is_logged_in: bool,
    /// Identity decoded from the token, if it could be read.
    pub user: Option<UserIdentity>,
}

impl Session {
    /// A logged-out session.
    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// Owns the session and the token store behind it.
#[derive(Debug)]
pub struct SessionContext {
    /// Durable token storage.
    store: Arc<dyn TokenStore>,
    /// Payload decoder.
    decoder: TokenDecoder,
    /// What counts as logged in when decoding fails.
    policy: LoginPolicy,
    /// Current state.
    session: Session,
}

impl SessionContext {
    /// Build the session from whatever token the store holds.
    ///
    /// No request is made to validate the token. An empty token counts as
    /// none, and an unreadable store is logged and treated as empty.
    pub fn initialize(store: Arc<dyn TokenStore>, config: &SessionConfig) -> Self {
        let mut context = Self {
            store,
            decoder: TokenDecoder::new(),
            policy: config.login_policy,
            session: Session::anonymous(),
        };

        match context.store.load() {
            Ok(Some(token)) if !token.is_empty() => {
                context.session = context.session_for(&token);
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Failed to read stored token, starting logged out"),
        }

        context
    }

    /// Current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether the user is considered logged in.
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in
    }

    /// Identity of the logged-in user.
    pub fn user(&self) -> Option<&UserIdentity> {
        self.session.user.as_ref()
    }

    /// The token store backing this session.
    ///
    /// Authenticated requests read the token from here at send time rather
    /// than caching it.
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Store `token`, adopt its identity, and return the next route.
    ///
    /// Returns [`Route::Explore`] once logged in, or [`Route::Login`] when
    /// the policy refuses an undecodable token.
    pub fn login(&mut self, token: &str) -> AppResult<Route> {
        self.store.save(token)?;
        self.session = self.session_for(token);

        if self.session.is_logged_in {
            info!(
                user_id = self.session.user.as_ref().map(|u| u.user_id.as_str()),
                "Logged in"
            );
            Ok(Route::Explore)
        } else {
            Ok(Route::Login)
        }
    }

    /// Forget the session and the stored token, returning [`Route::Login`].
    ///
    /// In-memory state is reset even when clearing the store fails.
    pub fn logout(&mut self) -> AppResult<Route> {
        self.session = Session::anonymous();
        self.store.clear()?;
        info!("Logged out");
        Ok(Route::Login)
    }

    fn session_for(&self, token: &str) -> Session {
        let user = self.decoder.decode_identity(token);

        let is_logged_in = match self.policy {
            LoginPolicy::TokenPresence => true,
            LoginPolicy::DecodedIdentity => user.is_some(),
        };

        if user.is_none() {
            warn!(
                policy = ?self.policy,
                is_logged_in,
                "Stored token has no readable identity"
            );
        }

        Session { is_logged_in, user }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTokenStore;
    use sharehub_core::error::AppError;

    const ALICE: &str = "header.eyJuYW1lIjoiQWxpY2UiLCJ1c2VySWQiOiIxMjMifQ.sig";

    fn config(policy: LoginPolicy) -> SessionConfig {
        SessionConfig {
            login_policy: policy,
        }
    }

    #[derive(Debug)]
    struct BrokenStore;

    impl TokenStore for BrokenStore {
        fn load(&self) -> AppResult<Option<String>> {
            Err(AppError::storage("disk gone"))
        }

        fn save(&self, _token: &str) -> AppResult<()> {
            Err(AppError::storage("disk gone"))
        }

        fn clear(&self) -> AppResult<()> {
            Err(AppError::storage("disk gone"))
        }
    }

    #[test]
    fn test_initialize_without_token() {
        let ctx = SessionContext::initialize(
            Arc::new(MemoryTokenStore::new()),
            &config(LoginPolicy::TokenPresence),
        );
        assert_eq!(ctx.session(), &Session::anonymous());
    }

    #[test]
    fn test_initialize_with_empty_token_stays_logged_out() {
        let ctx = SessionContext::initialize(
            Arc::new(MemoryTokenStore::with_token("")),
            &config(LoginPolicy::TokenPresence),
        );
        assert!(!ctx.is_logged_in());
        assert_eq!(ctx.session(), &Session::anonymous());
        assert_eq!(
            crate::guard::RouteGuard::check("/upload", ctx.session()),
            crate::guard::Navigation::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_initialize_with_token_decodes_identity() {
        let ctx = SessionContext::initialize(
            Arc::new(MemoryTokenStore::with_token(ALICE)),
            &config(LoginPolicy::TokenPresence),
        );
        assert!(ctx.is_logged_in());
        assert_eq!(ctx.user(), Some(&UserIdentity::new("Alice", "123")));
    }

    #[test]
    fn test_login_then_reload_restores_identity() {
        let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
        let mut ctx = SessionContext::initialize(store.clone(), &SessionConfig::default());

        assert_eq!(ctx.login(ALICE).unwrap(), Route::Explore);
        let before = ctx.session().clone();

        let reloaded = SessionContext::initialize(store, &SessionConfig::default());
        assert_eq!(reloaded.session(), &before);
    }

    #[test]
    fn test_logout_clears_store_and_identity() {
        let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::with_token(ALICE));
        let mut ctx = SessionContext::initialize(store.clone(), &SessionConfig::default());

        assert_eq!(ctx.logout().unwrap(), Route::Login);
        assert!(!ctx.is_logged_in());
        assert!(ctx.user().is_none());
        assert!(store.load().unwrap().is_none());

        // Logging out twice is harmless.
        assert_eq!(ctx.logout().unwrap(), Route::Login);
    }

    #[test]
    fn test_malformed_token_under_token_presence_policy() {
        let ctx = SessionContext::initialize(
            Arc::new(MemoryTokenStore::with_token("garbage")),
            &config(LoginPolicy::TokenPresence),
        );
        assert!(ctx.is_logged_in());
        assert!(ctx.user().is_none());
    }

    #[test]
    fn test_malformed_token_under_decoded_identity_policy() {
        let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
        let mut ctx =
            SessionContext::initialize(store.clone(), &config(LoginPolicy::DecodedIdentity));

        assert_eq!(ctx.login("garbage").unwrap(), Route::Login);
        assert!(!ctx.is_logged_in());
        assert_eq!(store.load().unwrap().as_deref(), Some("garbage"));
    }

    #[test]
    fn test_broken_store() {
        let mut ctx = SessionContext::initialize(Arc::new(BrokenStore), &SessionConfig::default());
        assert!(!ctx.is_logged_in());

        assert!(ctx.login(ALICE).is_err());
        assert!(!ctx.is_logged_in());

        assert!(ctx.logout().is_err());
        assert_eq!(ctx.session(), &Session::anonymous());
    }
}
