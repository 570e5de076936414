pub mod recurrence;
pub mod reminder;
