//! View state and submit logic for each screen of the client.
//!
//! Views own their form and result state, talk to the backend through
//! [`ShareHubApi`](crate::api::ShareHubApi), and resolve every failure into a
//! [`Notice`] or an error string the shell can render.

pub mod explore;
pub mod login;
pub mod notice;
pub mod register;
pub mod upload;

#[cfg(test)]
mod testing;

pub use explore::{ExploreView, Tab};
pub use login::LoginView;
pub use notice::{Notice, NoticeKind};
pub use register::RegisterView;
pub use upload::{UploadForm, UploadView};
