use chrono::{DateTime, Utc};
use recuerda_models::recurrence::RecurrenceEntry;
use recuerda_models::reminder::{
    AlertInfo, PushNotification, ReminderRequest, ReminderSlots, ScheduledTrigger,
};

/// A fully assembled creation request together with the confirmation line
/// the skill speaks once the service call succeeds.
#[derive(Debug, Clone)]
pub struct AssembledReminder {
    pub request: ReminderRequest,
    pub confirmation: String,
}

/// Compose validated slots, a resolved trigger and an optional recurrence
/// entry into the reminder-service request body plus the confirmation
/// utterance.
///
/// Pure: submitting the request to the reminder service is the caller's side
/// effect. The spoken alert text (`Recordatorio: <text>`) is what the device
/// says when the reminder later fires; the confirmation is what the skill
/// answers right now.
pub fn assemble(
    slots: &ReminderSlots,
    mut trigger: ScheduledTrigger,
    recurrence: Option<&RecurrenceEntry>,
    request_time: DateTime<Utc>,
    locale: &str,
) -> AssembledReminder {
    if let Some(entry) = recurrence {
        trigger.recurrence = Some(entry.rule.to_owned());
    }

    let spoken_text = format!("Recordatorio: {}", slots.text);
    let request = ReminderRequest {
        request_time,
        trigger,
        alert_info: AlertInfo::spoken(locale, &spoken_text),
        push_notification: PushNotification::enabled(),
    };

    let mut confirmation = format!(
        "He configurado tu recordatorio para \"{}\" a las {}",
        slots.text, slots.time_of_day
    );
    match recurrence {
        Some(entry) => {
            confirmation.push_str(&format!(", que se repetirá {}.", entry.description));
        }
        None => confirmation.push('.'),
    }

    AssembledReminder {
        request,
        confirmation,
    }
}
