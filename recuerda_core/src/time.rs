use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use recuerda_models::reminder::ScheduledTrigger;

use crate::ReminderError;

/// Resolve a spoken time of day into an absolute scheduled trigger.
///
/// Accepts `"H"` or `"H:MM"` in 24-hour form; a missing or unparseable
/// minute falls back to 0. The instant is built from `now`'s UTC calendar
/// date with the parsed hour and minute taken directly as UTC wall-clock
/// fields. `tz` travels on the trigger as metadata for the reminder service
/// to interpret and takes no part in the arithmetic here. A time already
/// past on the current date stays in the past; there is no rollover to the
/// next day.
pub fn resolve(
    time_of_day: &str,
    tz: Tz,
    now: DateTime<Utc>,
) -> Result<ScheduledTrigger, ReminderError> {
    let mut parts = time_of_day.split(':');
    let hour: u32 = parts
        .next()
        .unwrap_or_default()
        .parse()
        .map_err(|_| ReminderError::InvalidTimeFormat(time_of_day.to_owned()))?;
    let minute: u32 = parts.next().and_then(|m| m.parse().ok()).unwrap_or(0);

    // and_hms_opt bounds-checks the fields, so 25:00 is a rejection rather
    // than a silent wrap into tomorrow.
    let scheduled_time = now
        .date_naive()
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| ReminderError::InvalidTimeFormat(time_of_day.to_owned()))?
        .and_utc();

    Ok(ScheduledTrigger::scheduled_absolute(scheduled_time, tz))
}
