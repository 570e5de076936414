use chrono::{DateTime, Utc};
use recuerda_core::{assembler, recurrence, slots, time};
use recuerda_models::reminder::SlotValues;

use crate::collaborators::{CollaboratorError, ReminderService, TimeZoneLookup};
use crate::envelope::{Intent, SystemContext};
use crate::response::{Directive, SkillResponse};
use crate::speech;

const REMINDERS_PERMISSION_SCOPE: &str = "alexa::alerts:reminders:skill:readwrite";

const SLOT_TEXT: &str = "reminderText";
const SLOT_TIME: &str = "reminderTime";
const SLOT_RECURRENCE: &str = "recurrence";

pub fn launch(system: &SystemContext) -> SkillResponse {
    if system.user.permissions.is_none() {
        SkillResponse::speak(speech::WELCOME_NEEDS_PERMISSION)
            .with_directive(Directive::ask_for_permission(REMINDERS_PERMISSION_SCOPE))
    } else {
        SkillResponse::speak(speech::WELCOME).with_reprompt(speech::WELCOME)
    }
}

pub fn help() -> SkillResponse {
    SkillResponse::speak(speech::HELP).with_reprompt(speech::HELP)
}

pub fn yes() -> SkillResponse {
    SkillResponse::speak(speech::YES).with_reprompt(speech::YES)
}

pub fn goodbye() -> SkillResponse {
    SkillResponse::speak(speech::GOODBYE).ending_session()
}

/// The reminder-creation pipeline: validate slots, resolve the recurrence
/// phrase, look up the device timezone, resolve the spoken time, assemble
/// the request and hand it to the reminder service.
///
/// The recurrence phrase is matched before the timezone call so a bad phrase
/// is rejected without suspending. Validation rejections become clarifying
/// prompts; a collaborator failure becomes the creation apology.
pub async fn set_reminder(
    intent: &Intent,
    system: &SystemContext,
    time_zones: &dyn TimeZoneLookup,
    reminders: &dyn ReminderService,
    now: DateTime<Utc>,
    locale: &str,
) -> SkillResponse {
    let values = SlotValues {
        text: intent.slot_value(SLOT_TEXT),
        time_of_day: intent.slot_value(SLOT_TIME),
        recurrence: intent.slot_value(SLOT_RECURRENCE),
    };

    let slots = match slots::validate(values) {
        Ok(slots) => slots,
        Err(error) => return SkillResponse::speak(speech::rejection(&error)),
    };

    let entry = match recurrence::resolve_recurrence(slots.recurrence.as_deref()) {
        Ok(entry) => entry,
        Err(error) => return SkillResponse::speak(speech::rejection(&error)),
    };

    let tz = match time_zones.system_time_zone(&system.device.device_id).await {
        Ok(tz) => tz,
        Err(error) => return creation_failed(&error),
    };

    let trigger = match time::resolve(&slots.time_of_day, tz, now) {
        Ok(trigger) => trigger,
        Err(error) => return SkillResponse::speak(speech::rejection(&error)),
    };

    let assembled = assembler::assemble(&slots, trigger, entry, now, locale);

    if let Err(error) = reminders.create_reminder(&assembled.request).await {
        return creation_failed(&error);
    }

    log::info!(
        "created reminder at {} (zone {}, recurrence {:?})",
        assembled.request.trigger.scheduled_time,
        assembled.request.trigger.time_zone_id,
        assembled.request.trigger.recurrence
    );

    SkillResponse::speak(assembled.confirmation)
}

fn creation_failed(error: &CollaboratorError) -> SkillResponse {
    log::error!("reminder creation failed: {error}");
    SkillResponse::speak(speech::CREATION_FAILED)
}
