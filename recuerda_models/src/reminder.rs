use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// Raw slot values as the intent layer extracted them. Nothing is guaranteed
/// to be present or non-empty yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotValues {
    pub text: Option<String>,
    pub time_of_day: Option<String>,
    pub recurrence: Option<String>,
}

/// Slot values that passed validation: `text` and `time_of_day` are
/// non-empty. The recurrence phrase, when present, has not been matched
/// against the catalog yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderSlots {
    pub text: String,
    pub time_of_day: String,
    pub recurrence: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TriggerType {
    #[serde(rename = "SCHEDULED_ABSOLUTE")]
    ScheduledAbsolute,
}

/// When (and how often) the reminder fires.
///
/// `scheduled_time` holds the spoken hour and minute as UTC wall-clock fields
/// on the resolution date; `time_zone_id` is metadata for the reminder
/// service and is never consumed by the scheduling arithmetic itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTrigger {
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    pub scheduled_time: DateTime<Utc>,
    pub time_zone_id: Tz,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
}

impl ScheduledTrigger {
    pub fn scheduled_absolute(scheduled_time: DateTime<Utc>, time_zone_id: Tz) -> Self {
        Self {
            trigger_type: TriggerType::ScheduledAbsolute,
            scheduled_time,
            time_zone_id,
            recurrence: None,
        }
    }
}

/// The creation request body handed to the external reminder service.
/// Constructed fresh per interaction and never mutated after assembly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    pub request_time: DateTime<Utc>,
    pub trigger: ScheduledTrigger,
    pub alert_info: AlertInfo,
    pub push_notification: PushNotification,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertInfo {
    pub spoken_info: SpokenInfo,
}

impl AlertInfo {
    /// Single-content spoken alert in the given locale. `text` is what the
    /// device speaks when the reminder fires.
    pub fn spoken(locale: &str, text: &str) -> Self {
        Self {
            spoken_info: SpokenInfo {
                content: vec![SpokenContent {
                    locale: locale.to_owned(),
                    text: text.to_owned(),
                }],
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpokenInfo {
    pub content: Vec<SpokenContent>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpokenContent {
    pub locale: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PushNotification {
    pub status: PushNotificationStatus,
}

impl PushNotification {
    pub fn enabled() -> Self {
        Self {
            status: PushNotificationStatus::Enabled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PushNotificationStatus {
    #[serde(rename = "ENABLED")]
    Enabled,
    #[serde(rename = "DISABLED")]
    Disabled,
}
