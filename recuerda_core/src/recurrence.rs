use std::collections::HashMap;
use std::sync::OnceLock;

use recuerda_models::recurrence::RecurrenceEntry;

use crate::ReminderError;

const DAILY: &str = "FREQ=DAILY;INTERVAL=1";
const WEEKLY: &str = "FREQ=WEEKLY;INTERVAL=1";
const MONTHLY: &str = "FREQ=MONTHLY;INTERVAL=1";
const WEEKDAYS: &str = "FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR";
const WEEKEND: &str = "FREQ=WEEKLY;BYDAY=SA,SU";

/// The closed set of recognized recurrence phrases. Keys must already be
/// lower-cased; `lookup` lower-cases its input before matching.
const ENTRIES: &[RecurrenceEntry] = &[
    RecurrenceEntry { phrase: "diario", rule: DAILY, description: "todos los días" },
    RecurrenceEntry { phrase: "diariamente", rule: DAILY, description: "todos los días" },
    RecurrenceEntry { phrase: "cada día", rule: DAILY, description: "todos los días" },
    RecurrenceEntry { phrase: "semanal", rule: WEEKLY, description: "cada semana" },
    RecurrenceEntry { phrase: "semanalmente", rule: WEEKLY, description: "cada semana" },
    RecurrenceEntry { phrase: "cada semana", rule: WEEKLY, description: "cada semana" },
    RecurrenceEntry { phrase: "mensual", rule: MONTHLY, description: "cada mes" },
    RecurrenceEntry { phrase: "mensualmente", rule: MONTHLY, description: "cada mes" },
    RecurrenceEntry { phrase: "cada mes", rule: MONTHLY, description: "cada mes" },
    RecurrenceEntry { phrase: "lunes a viernes", rule: WEEKDAYS, description: "de lunes a viernes" },
    RecurrenceEntry { phrase: "días laborables", rule: WEEKDAYS, description: "en días laborables" },
    RecurrenceEntry { phrase: "fin de semana", rule: WEEKEND, description: "los fines de semana" },
];

fn catalog() -> &'static HashMap<&'static str, &'static RecurrenceEntry> {
    static CATALOG: OnceLock<HashMap<&'static str, &'static RecurrenceEntry>> = OnceLock::new();
    CATALOG.get_or_init(|| ENTRIES.iter().map(|entry| (entry.phrase, entry)).collect())
}

/// Every phrase the catalog recognizes, in declaration order.
pub fn known_phrases() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|entry| entry.phrase)
}

/// Case-insensitive lookup of a spoken recurrence phrase. Matching is exact
/// after lower-casing; surrounding whitespace is not trimmed.
pub fn lookup(phrase: &str) -> Option<&'static RecurrenceEntry> {
    catalog().get(phrase.to_lowercase().as_str()).copied()
}

/// Map an optional spoken phrase onto its catalog entry.
///
/// A supplied phrase that matches no entry rejects the whole creation; the
/// reminder is never silently created without the recurrence the user asked
/// for. No phrase at all is an ordinary one-shot reminder.
pub fn resolve_recurrence(
    phrase: Option<&str>,
) -> Result<Option<&'static RecurrenceEntry>, ReminderError> {
    match phrase {
        None => Ok(None),
        Some(phrase) => lookup(phrase)
            .map(Some)
            .ok_or_else(|| ReminderError::UnrecognizedRecurrence(phrase.to_owned())),
    }
}
