//! HTTP implementations of the collaborator traits, talking to the voice
//! platform's device-settings and reminders APIs with the per-request bearer
//! token carried in the envelope.

use async_trait::async_trait;
use chrono_tz::Tz;
use recuerda_models::reminder::ReminderRequest;

use crate::collaborators::{CollaboratorError, ReminderService, TimeZoneLookup};
use crate::envelope::SystemContext;

/// Client for the device settings API, used for the timezone lookup.
#[derive(Debug, Clone)]
pub struct DeviceSettingsClient {
    http: reqwest::Client,
    api_endpoint: String,
    api_access_token: String,
}

impl DeviceSettingsClient {
    pub fn from_system(system: &SystemContext) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_endpoint: system.api_endpoint.clone(),
            api_access_token: system.api_access_token.clone(),
        }
    }
}

#[async_trait]
impl TimeZoneLookup for DeviceSettingsClient {
    async fn system_time_zone(&self, device_id: &str) -> Result<Tz, CollaboratorError> {
        let url = format!(
            "{}/v2/devices/{}/settings/System.timeZone",
            self.api_endpoint, device_id
        );
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_access_token)
            .send()
            .await?;
        let response = into_api_error(response).await?;

        // The settings API returns the IANA id as a bare JSON string.
        let zone_id: String = response.json().await?;
        zone_id
            .parse()
            .map_err(|_| CollaboratorError::UnknownTimeZone(zone_id))
    }
}

/// Client for the reminder-management API.
#[derive(Debug, Clone)]
pub struct RemindersClient {
    http: reqwest::Client,
    api_endpoint: String,
    api_access_token: String,
}

impl RemindersClient {
    pub fn from_system(system: &SystemContext) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_endpoint: system.api_endpoint.clone(),
            api_access_token: system.api_access_token.clone(),
        }
    }
}

#[async_trait]
impl ReminderService for RemindersClient {
    async fn create_reminder(&self, request: &ReminderRequest) -> Result<(), CollaboratorError> {
        let url = format!("{}/v1/alerts/reminders", self.api_endpoint);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_access_token)
            .json(request)
            .send()
            .await?;
        into_api_error(response).await?;

        Ok(())
    }
}

async fn into_api_error(
    response: reqwest::Response,
) -> Result<reqwest::Response, CollaboratorError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(CollaboratorError::Api {
            status: status.as_u16(),
            message: response.text().await.unwrap_or_default(),
        })
    }
}
