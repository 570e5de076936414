use recuerda_models::reminder::{ReminderSlots, SlotValues};

use crate::ReminderError;

/// Gate on slot presence before any computation runs.
///
/// The time slot is checked before the text slot; which one is missing
/// decides which clarifying question the caller asks. The shape of the time
/// string is not inspected here — `time::resolve` rejects malformed values
/// itself. An empty recurrence slot counts as no recurrence.
pub fn validate(values: SlotValues) -> Result<ReminderSlots, ReminderError> {
    let time_of_day = non_empty(values.time_of_day).ok_or(ReminderError::MissingTime)?;
    let text = non_empty(values.text).ok_or(ReminderError::MissingText)?;

    Ok(ReminderSlots {
        text,
        time_of_day,
        recurrence: non_empty(values.recurrence),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
