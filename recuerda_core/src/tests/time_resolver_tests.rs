use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::time::resolve;
use crate::ReminderError;

const MADRID: Tz = chrono_tz::Europe::Madrid;

fn now_at(hour: u32, minute: u32) -> DateTime<Utc> {
    let now_utc = NaiveDateTime::new(
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
    );
    DateTime::from_naive_utc_and_offset(now_utc, Utc)
}

#[test]
fn hour_and_minute_become_utc_wall_clock_fields() {
    let trigger = resolve("18:30", MADRID, now_at(12, 0)).unwrap();

    assert_eq!(trigger.scheduled_time.hour(), 18);
    assert_eq!(trigger.scheduled_time.minute(), 30);
    assert_eq!(trigger.scheduled_time.second(), 0);
    assert_eq!(trigger.scheduled_time.date_naive(), now_at(12, 0).date_naive());
    assert_eq!(trigger.time_zone_id, MADRID);
    assert_eq!(trigger.recurrence, None);
}

#[test]
fn bare_hour_defaults_minute_to_zero() {
    let trigger = resolve("9", MADRID, now_at(12, 0)).unwrap();

    assert_eq!(trigger.scheduled_time.hour(), 9);
    assert_eq!(trigger.scheduled_time.minute(), 0);
}

#[test]
fn unparseable_minute_defaults_to_zero() {
    let trigger = resolve("18:xx", MADRID, now_at(12, 0)).unwrap();

    assert_eq!(trigger.scheduled_time.hour(), 18);
    assert_eq!(trigger.scheduled_time.minute(), 0);
}

#[test]
fn the_zone_does_not_shift_the_instant() {
    // Madrid is UTC+2 on this date; the scheduled instant must still carry
    // the spoken digits as UTC fields, zone attached as metadata only.
    let trigger = resolve("18:00", MADRID, now_at(12, 0)).unwrap();
    let utc_trigger = resolve("18:00", chrono_tz::UTC, now_at(12, 0)).unwrap();

    assert_eq!(trigger.scheduled_time, utc_trigger.scheduled_time);
}

#[test]
fn a_time_already_past_stays_on_the_current_date() {
    let now = now_at(20, 0);
    let trigger = resolve("6:00", MADRID, now).unwrap();

    assert_eq!(trigger.scheduled_time.date_naive(), now.date_naive());
    assert!(trigger.scheduled_time < now);
}

#[test]
fn unparseable_hour_is_an_invalid_time_format() {
    let error = resolve("mañana", MADRID, now_at(12, 0)).unwrap_err();
    assert_eq!(error, ReminderError::InvalidTimeFormat("mañana".to_owned()));

    let error = resolve("", MADRID, now_at(12, 0)).unwrap_err();
    assert_eq!(error, ReminderError::InvalidTimeFormat(String::new()));
}

#[test]
fn out_of_range_fields_are_rejected_not_wrapped() {
    let error = resolve("25:00", MADRID, now_at(12, 0)).unwrap_err();
    assert_eq!(error, ReminderError::InvalidTimeFormat("25:00".to_owned()));

    let error = resolve("12:75", MADRID, now_at(12, 0)).unwrap_err();
    assert_eq!(error, ReminderError::InvalidTimeFormat("12:75".to_owned()));
}

proptest::proptest! {
    #[test]
    fn resolved_instant_always_carries_the_parsed_fields(
        hour in 0..24u32,
        minute in 0..60u32,
        now_hour in 0..24u32,
        bare_hour_form: bool,
    ) {
        let spoken = if bare_hour_form {
            hour.to_string()
        } else {
            format!("{hour}:{minute:02}")
        };
        let now = now_at(now_hour, 17);

        let trigger = resolve(&spoken, MADRID, now).unwrap();

        let expected_minute = if bare_hour_form { 0 } else { minute };
        proptest::prop_assert_eq!(trigger.scheduled_time.hour(), hour);
        proptest::prop_assert_eq!(trigger.scheduled_time.minute(), expected_minute);
        proptest::prop_assert_eq!(trigger.scheduled_time.year(), 2026);
        proptest::prop_assert_eq!(trigger.scheduled_time.date_naive(), now.date_naive());
    }
}
