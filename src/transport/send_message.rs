use serde::Deserialize;
use url::form_urlencoded;

use crate::domain::SendMessageResponse;

/// Encode the `From`/`To`/`Body` form payload for `Messages.json`.
pub(crate) fn encode_form(from: &str, to: &str, body: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("From", from)
        .append_pair("To", to)
        .append_pair("Body", body)
        .finish()
}

#[derive(Debug, Clone, Deserialize)]
struct SendMessageJsonResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_code: Option<i64>,
    #[serde(default)]
    error_message: Option<String>,
}

/// Decode a send-message response body. Twilio sends many more fields than
/// modeled here; they are ignored, and `null` decodes to the field default.
pub(crate) fn decode_response(json: &str) -> Result<SendMessageResponse, serde_json::Error> {
    let parsed: SendMessageJsonResponse = serde_json::from_str(json)?;

    Ok(SendMessageResponse {
        status: parsed.status.unwrap_or_default(),
        error_code: parsed.error_code.unwrap_or_default(),
        error_message: parsed.error_message.unwrap_or_default(),
    })
}
