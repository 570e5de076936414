use std::collections::HashMap;

use serde::Deserialize;

/// One incoming request from the voice platform, as delivered to the skill
/// endpoint. Fields the skill never reads (session state, request ids,
/// interface inventories) are left to serde to ignore.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    pub version: String,
    pub context: Context,
    pub request: Request,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    #[serde(rename = "System")]
    pub system: SystemContext,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemContext {
    pub device: Device,
    pub user: User,
    pub api_endpoint: String,
    pub api_access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: Option<String>,
    /// Absent until the user grants the skill its permission scopes.
    #[serde(default)]
    pub permissions: Option<Permissions>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    #[serde(default)]
    pub consent_token: Option<String>,
}

/// The request payload, tagged by its `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "LaunchRequest")]
    Launch,
    #[serde(rename = "IntentRequest")]
    Intent(IntentRequest),
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntentRequest {
    pub intent: Intent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// The value of a named slot, if the platform filled it.
    pub fn slot_value(&self, name: &str) -> Option<String> {
        self.slots.get(name).and_then(|slot| slot.value.clone())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub value: Option<String>,
}

/// Intent names resolved once at the boundary into a closed tag. Handlers
/// dispatch on this, never on the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    SetReminder,
    Help,
    Yes,
    Cancel,
    Stop,
    Unknown,
}

impl IntentKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "SetReminderIntent" => Self::SetReminder,
            "AMAZON.HelpIntent" => Self::Help,
            "AMAZON.YesIntent" => Self::Yes,
            "AMAZON.CancelIntent" => Self::Cancel,
            "AMAZON.StopIntent" => Self::Stop,
            _ => Self::Unknown,
        }
    }
}
