use async_trait::async_trait;
use chrono_tz::Tz;
use recuerda_models::reminder::ReminderRequest;
use thiserror::Error;

/// Failure of an external collaborator (timezone lookup or reminder
/// creation). Terminal for the interaction: there is no retry policy at this
/// layer.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("HTTP: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("unknown time zone id {0:?}")]
    UnknownTimeZone(String),
}

/// Resolves the timezone configured for a device.
#[async_trait]
pub trait TimeZoneLookup: Send + Sync {
    async fn system_time_zone(&self, device_id: &str) -> Result<Tz, CollaboratorError>;
}

/// Creates reminders in the external reminder service.
#[async_trait]
pub trait ReminderService: Send + Sync {
    async fn create_reminder(&self, request: &ReminderRequest) -> Result<(), CollaboratorError>;
}
