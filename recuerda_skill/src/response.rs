use serde::Serialize;

/// Response envelope written back to the platform.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope {
    pub version: &'static str,
    pub response: SkillResponse,
}

impl ResponseEnvelope {
    pub fn new(response: SkillResponse) -> Self {
        Self {
            version: "1.0",
            response,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    pub should_end_session: bool,
}

impl SkillResponse {
    /// Speak one line and keep the session open.
    pub fn speak(text: impl Into<String>) -> Self {
        Self {
            output_speech: Some(OutputSpeech::plain(text)),
            ..Self::default()
        }
    }

    /// A response with no speech at all (session-ended acknowledgements).
    pub fn empty() -> Self {
        Self {
            should_end_session: true,
            ..Self::default()
        }
    }

    /// Re-ask with the given line if the user stays silent.
    pub fn with_reprompt(mut self, text: impl Into<String>) -> Self {
        self.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::plain(text),
        });
        self
    }

    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn ending_session(mut self) -> Self {
        self.should_end_session = true;
        self
    }

    /// The spoken line, for assertions and logging.
    pub fn speech_text(&self) -> Option<&str> {
        self.output_speech.as_ref().map(|speech| speech.text.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: &'static str,
    pub text: String,
}

impl OutputSpeech {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            speech_type: "PlainText",
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// A platform directive attached to a response. The only one this skill
/// sends is the permission consent request.
#[derive(Debug, Clone, Serialize)]
pub struct Directive {
    #[serde(rename = "type")]
    pub directive_type: &'static str,
    pub name: &'static str,
    pub payload: AskForPayload,
    pub token: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AskForPayload {
    #[serde(rename = "@type")]
    pub payload_type: &'static str,
    #[serde(rename = "@version")]
    pub version: &'static str,
    #[serde(rename = "permissionScope")]
    pub permission_scope: &'static str,
}

impl Directive {
    /// Consent request asking the user to grant a permission scope.
    pub fn ask_for_permission(scope: &'static str) -> Self {
        Self {
            directive_type: "Connections.SendRequest",
            name: "AskFor",
            payload: AskForPayload {
                payload_type: "AskForPermissionsConsentRequest",
                version: "1",
                permission_scope: scope,
            },
            token: "",
        }
    }
}
