use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono_tz::Tz;
use recuerda_models::reminder::ReminderRequest;

use crate::collaborators::{CollaboratorError, ReminderService, TimeZoneLookup};
use crate::envelope::{Context, Device, Intent, Permissions, RequestEnvelope, Request, Slot, SystemContext, User};

pub struct FixedTimeZone(pub Tz);

#[async_trait]
impl TimeZoneLookup for FixedTimeZone {
    async fn system_time_zone(&self, _device_id: &str) -> Result<Tz, CollaboratorError> {
        Ok(self.0)
    }
}

pub struct FailingTimeZoneLookup;

#[async_trait]
impl TimeZoneLookup for FailingTimeZoneLookup {
    async fn system_time_zone(&self, _device_id: &str) -> Result<Tz, CollaboratorError> {
        Err(CollaboratorError::Api {
            status: 403,
            message: "forbidden".to_owned(),
        })
    }
}

#[derive(Default)]
pub struct RecordingReminderService {
    pub requests: Mutex<Vec<ReminderRequest>>,
}

#[async_trait]
impl ReminderService for RecordingReminderService {
    async fn create_reminder(&self, request: &ReminderRequest) -> Result<(), CollaboratorError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(())
    }
}

pub struct FailingReminderService;

#[async_trait]
impl ReminderService for FailingReminderService {
    async fn create_reminder(&self, _request: &ReminderRequest) -> Result<(), CollaboratorError> {
        Err(CollaboratorError::Api {
            status: 500,
            message: "internal error".to_owned(),
        })
    }
}

pub fn system(permissions: Option<Permissions>) -> SystemContext {
    SystemContext {
        device: Device {
            device_id: "test-device".to_owned(),
        },
        user: User {
            user_id: Some("test-user".to_owned()),
            permissions,
        },
        api_endpoint: "https://api.example.test".to_owned(),
        api_access_token: "test-token".to_owned(),
    }
}

pub fn granted_permissions() -> Option<Permissions> {
    Some(Permissions {
        consent_token: Some("consent".to_owned()),
    })
}

pub fn envelope(request: Request) -> RequestEnvelope {
    RequestEnvelope {
        version: "1.0".to_owned(),
        context: Context {
            system: system(granted_permissions()),
        },
        request,
    }
}

pub fn set_reminder_intent(
    text: Option<&str>,
    time_of_day: Option<&str>,
    recurrence: Option<&str>,
) -> Intent {
    let mut slots = HashMap::new();
    let mut put = |name: &str, value: Option<&str>| {
        slots.insert(
            name.to_owned(),
            Slot {
                value: value.map(str::to_owned),
            },
        );
    };
    put("reminderText", text);
    put("reminderTime", time_of_day);
    put("recurrence", recurrence);

    Intent {
        name: "SetReminderIntent".to_owned(),
        slots,
    }
}
