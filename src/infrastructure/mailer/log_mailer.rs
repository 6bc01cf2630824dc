//! Logging mailer.
//!
//! Development implementation of the mail port: "delivery" is a structured
//! tracing event. Real transport belongs to the surrounding application.

use async_trait::async_trait;

use crate::config::MailerSettings;
use crate::domain::entities::{Party, User};
use crate::domain::services::Mailer;
use crate::shared::error::AppError;

/// Mailer that records deliveries through tracing.
pub struct LogMailer {
    from_address: String,
}

impl LogMailer {
    /// Create a logging mailer using the configured sender address.
    pub fn new(settings: &MailerSettings) -> Self {
        Self {
            from_address: settings.from_address.clone(),
        }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn invite(&self, host: &User, friend: &User, party: &Party) -> Result<(), AppError> {
        tracing::info!(
            from = %self.from_address,
            to = %friend.email,
            host = %host.username,
            party_id = party.id,
            movie = %party.movie_title,
            "sending party invitation"
        );
        Ok(())
    }
}
