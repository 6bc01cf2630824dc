//! Outbound mail port.
//!
//! Mail transport and templating belong to the surrounding application;
//! invitation dispatch only needs a synchronous "deliver one invite" call.

use async_trait::async_trait;

use crate::domain::entities::{Party, User};
use crate::shared::error::AppError;

/// Port to the mail-sending collaborator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one invitation email from `host` to `friend` for `party`.
    ///
    /// Completes once the collaborator has accepted the message; a failure
    /// is reported to the caller, which decides whether the rest of the
    /// batch still goes out.
    async fn invite(&self, host: &User, friend: &User, party: &Party) -> Result<(), AppError>;
}
