use crate::response::{Directive, ResponseEnvelope, SkillResponse};

#[test]
fn spoken_response_serializes_with_platform_field_names() {
    let response = SkillResponse::speak("¿Qué te gustaría recordar?")
        .with_reprompt("¿Qué te gustaría recordar?");

    let value = serde_json::to_value(ResponseEnvelope::new(response)).unwrap();

    assert_eq!(value["version"], "1.0");
    let response = &value["response"];
    assert_eq!(response["outputSpeech"]["type"], "PlainText");
    assert_eq!(response["outputSpeech"]["text"], "¿Qué te gustaría recordar?");
    assert_eq!(
        response["reprompt"]["outputSpeech"]["text"],
        "¿Qué te gustaría recordar?"
    );
    assert_eq!(response["shouldEndSession"], false);
    assert!(response.get("directives").is_none());
}

#[test]
fn consent_directive_serializes_with_annotated_payload_keys() {
    let response = SkillResponse::speak("Necesito permiso.")
        .with_directive(Directive::ask_for_permission("alexa::alerts:reminders:skill:readwrite"));

    let value = serde_json::to_value(ResponseEnvelope::new(response)).unwrap();

    let directive = &value["response"]["directives"][0];
    assert_eq!(directive["type"], "Connections.SendRequest");
    assert_eq!(directive["name"], "AskFor");
    assert_eq!(directive["token"], "");
    let payload = &directive["payload"];
    assert_eq!(payload["@type"], "AskForPermissionsConsentRequest");
    assert_eq!(payload["@version"], "1");
    assert_eq!(
        payload["permissionScope"],
        "alexa::alerts:reminders:skill:readwrite"
    );
}

#[test]
fn empty_response_carries_no_speech_and_ends_the_session() {
    let value = serde_json::to_value(ResponseEnvelope::new(SkillResponse::empty())).unwrap();

    let response = &value["response"];
    assert!(response.get("outputSpeech").is_none());
    assert!(response.get("reprompt").is_none());
    assert_eq!(response["shouldEndSession"], true);
}

#[test]
fn goodbye_ends_the_session() {
    let response = SkillResponse::speak("¡Hasta luego!").ending_session();

    assert!(response.should_end_session);
    assert_eq!(response.speech_text(), Some("¡Hasta luego!"));
}
