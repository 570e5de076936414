//! Everything the skill says, in its single locale (es-ES).

use recuerda_core::ReminderError;

pub const WELCOME: &str = "¿Qué te gustaría recordar?";

pub const WELCOME_NEEDS_PERMISSION: &str =
    "Bienvenido a Recordatorios Inteligentes. Necesito permiso para gestionar tus recordatorios.";

pub const HELP: &str = "Puedes decirme cosas como: \"¿Qué te gustaría recordar?\" o \
                        \"Recuérdame la reunión los viernes a las 3 pm\". ¿En qué puedo ayudarte?";

pub const YES: &str = "Perfecto. ¿Qué quieres que te recuerde y a qué hora?";

pub const GOODBYE: &str =
    "¡Hasta luego! Recuerda que puedes pedirme que te recuerde cosas importantes.";

pub const CREATION_FAILED: &str =
    "Lo siento, hubo un problema al crear tu recordatorio. Por favor, inténtalo de nuevo.";

pub const GENERIC_ERROR: &str =
    "Lo siento, ha ocurrido un error al procesar tu solicitud. Por favor, inténtalo de nuevo.";

/// The clarifying prompt for a validation rejection. Every core error kind
/// has its own line; none of them falls through to the generic apology.
pub fn rejection(error: &ReminderError) -> String {
    match error {
        ReminderError::MissingTime => "¿A qué hora pongo el recordatorio?".to_owned(),
        ReminderError::MissingText => "Por favor dime qué quieres que te recuerde.".to_owned(),
        ReminderError::UnrecognizedRecurrence(phrase) => format!(
            "No reconozco el patrón de recurrencia \"{phrase}\". \
             Prueba con \"diario\", \"semanal\" o \"mensual\"."
        ),
        ReminderError::InvalidTimeFormat(time_of_day) => format!(
            "No he entendido la hora \"{time_of_day}\". Dime una hora como \"18:00\"."
        ),
    }
}
