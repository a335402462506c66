//! Registration form submission.

use tracing::{error, info, warn};

use sharehub_auth::{Registration, Route};

use super::notice::Notice;
use crate::api::ShareHubApi;

/// The registration screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterView;

impl RegisterView {
    /// Validate and create the account.
    ///
    /// On success the client goes to the login screen with a confirmation
    /// notice. Server error bodies carrying a `message` are shown verbatim.
    pub async fn submit(
        api: &dyn ShareHubApi,
        registration: &Registration,
    ) -> Result<(Route, Notice), Notice> {
        registration
            .check()
            .map_err(|e| Notice::error("Invalid input", e.message))?;

        match api.register(registration).await {
            Ok(response) if response.success => {
                info!(email = %registration.email, "Account created");
                Ok((
                    Route::Login,
                    Notice::success("Signup successful", "Redirecting to login page"),
                ))
            }
            Ok(response) => {
                warn!(message = ?response.message, "Registration refused");
                Err(Notice::error(
                    "Signup Failed",
                    response
                        .message
                        .unwrap_or_else(|| "Unable to create account".to_string()),
                ))
            }
            Err(e) => {
                error!(error = %e, "Registration error");
                let description = e
                    .server_message()
                    .unwrap_or("Something went wrong")
                    .to_string();
                Err(Notice::error("Signup Error", description))
            }
        }
    }
}
