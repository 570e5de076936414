use chrono::{DateTime, Utc};

use crate::collaborators::{ReminderService, TimeZoneLookup};
use crate::envelope::{IntentKind, Request, RequestEnvelope};
use crate::handlers;
use crate::response::SkillResponse;
use crate::speech;

/// Dispatch one request envelope to its handler and produce the response.
///
/// The request kind and intent name are resolved into tags exactly once,
/// here; handlers never inspect raw strings. Every path produces a spoken
/// answer — unknown intents fall through to the generic error line rather
/// than leaving the interaction unanswered.
pub async fn handle_envelope(
    envelope: &RequestEnvelope,
    time_zones: &dyn TimeZoneLookup,
    reminders: &dyn ReminderService,
    now: DateTime<Utc>,
    locale: &str,
) -> SkillResponse {
    match &envelope.request {
        Request::Launch => handlers::launch(&envelope.context.system),
        Request::Intent(intent_request) => {
            let intent = &intent_request.intent;
            match IntentKind::from_name(&intent.name) {
                IntentKind::SetReminder => {
                    handlers::set_reminder(
                        intent,
                        &envelope.context.system,
                        time_zones,
                        reminders,
                        now,
                        locale,
                    )
                    .await
                }
                IntentKind::Help => handlers::help(),
                IntentKind::Yes => handlers::yes(),
                IntentKind::Cancel | IntentKind::Stop => handlers::goodbye(),
                IntentKind::Unknown => {
                    log::warn!("unhandled intent {:?}", intent.name);
                    SkillResponse::speak(speech::GENERIC_ERROR)
                }
            }
        }
        Request::SessionEnded => SkillResponse::empty(),
    }
}
