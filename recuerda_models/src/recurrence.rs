/// One recognized recurrence phrase with its machine-readable rule and the
/// spoken description used in confirmations.
///
/// Phrases sharing a rule may still carry distinct descriptions ("lunes a
/// viernes" and "días laborables" both map to the weekday rule but are
/// confirmed with different wording), so the description stays keyed by the
/// phrase, never by the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceEntry {
    pub phrase: &'static str,
    pub rule: &'static str,
    pub description: &'static str,
}
