use url::Url;

use crate::client::{ApiRequest, Method, TwilioClient, TwilioError};
use crate::domain::SendMessageResponse;
use crate::transport::send_message as wire;

const ACCEPT_JSON: (&str, &str) = ("Accept", "application/json");
const CONTENT_TYPE_FORM: (&str, &str) = ("Content-Type", "application/x-www-form-urlencoded");

#[derive(Clone)]
/// Builder for `POST {api_base_url}/Accounts/{sid}/Messages.json`.
///
/// Created by [`TwilioClient::send_message`] with all three required fields;
/// there are no optional parameters. Intended to be built and sent once by a
/// single call site.
pub struct SendMessageBuilder<'a> {
    client: &'a TwilioClient,
    from: String,
    to: String,
    body: String,
}

impl<'a> SendMessageBuilder<'a> {
    pub(crate) fn new(client: &'a TwilioClient, from: String, to: String, body: String) -> Self {
        Self {
            client,
            from,
            to,
            body,
        }
    }

    /// Build the POST request without performing it: form-encoded
    /// `From`/`To`/`Body` payload against the account-scoped messages
    /// endpoint, with JSON `Accept` and form `Content-Type` headers.
    pub fn build(&self) -> Result<ApiRequest, TwilioError> {
        let mut url = Url::parse(self.client.api_base())?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| TwilioError::BaseUrl {
                url: self.client.api_base().to_owned(),
            })?;
            segments.pop_if_empty();
            segments.push("Accounts");
            segments.push(self.client.account_sid().as_str());
            segments.push("Messages.json");
        }

        Ok(ApiRequest {
            method: Method::Post,
            url,
            headers: vec![ACCEPT_JSON, CONTENT_TYPE_FORM],
            body: Some(wire::encode_form(&self.from, &self.to, &self.body)),
        })
    }

    /// Build and perform the request, expecting HTTP 200.
    pub async fn send(self) -> Result<SendMessageResponse, TwilioError> {
        let request = self.build()?;
        let body = self.client.execute(&request, true, 200).await?;
        Ok(wire::decode_response(&body)?)
    }
}
