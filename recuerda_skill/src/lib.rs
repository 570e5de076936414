mod client;
mod collaborators;
mod dispatch;
mod envelope;
mod handlers;
mod response;
mod speech;

pub use client::{DeviceSettingsClient, RemindersClient};
pub use collaborators::{CollaboratorError, ReminderService, TimeZoneLookup};
pub use dispatch::handle_envelope;
pub use envelope::{Intent, IntentKind, Request, RequestEnvelope, SystemContext};
pub use response::{Directive, ResponseEnvelope, SkillResponse};

#[cfg(test)]
mod tests;
