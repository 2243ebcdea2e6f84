use url::Url;

use crate::client::{ApiRequest, Method, TwilioClient, TwilioError};
use crate::domain::LookupPhoneNumberResponse;
use crate::transport::lookup_phone_number as wire;

#[derive(Clone)]
/// Fluent builder for `GET {lookup_base_url}/v1/PhoneNumbers/{number}`.
///
/// Created by [`TwilioClient::lookup_phone_number`]. Configure the optional
/// parameters, then call [`send`](Self::send) (or [`build`](Self::build) to
/// inspect the request without performing it). Intended to be configured and
/// sent once by a single call site.
pub struct LookupPhoneNumberBuilder<'a> {
    client: &'a TwilioClient,
    phone_number: String,
    country_code: Option<String>,
    include_caller_name: bool,
    include_carrier: bool,
}

impl<'a> LookupPhoneNumberBuilder<'a> {
    pub(crate) fn new(client: &'a TwilioClient, phone_number: String) -> Self {
        Self {
            client,
            phone_number,
            country_code: None,
            include_caller_name: false,
            include_carrier: false,
        }
    }

    /// Set the ISO country code used to interpret numbers given in a
    /// national format. When not set, no `CountryCode` parameter is sent.
    pub fn country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    /// Request caller-name information in the response. Extra charges may
    /// apply.
    pub fn include_caller_name(mut self) -> Self {
        self.include_caller_name = true;
        self
    }

    /// Request carrier information in the response. Extra charges may apply.
    pub fn include_carrier(mut self) -> Self {
        self.include_carrier = true;
        self
    }

    /// Build the GET request without performing it.
    ///
    /// The phone number is percent-encoded into the path. When both include
    /// flags are set, the two `Type` values keep the fixed `caller-name`,
    /// `carrier` order.
    pub fn build(&self) -> Result<ApiRequest, TwilioError> {
        let mut url = Url::parse(self.client.lookup_base())?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| TwilioError::BaseUrl {
                url: self.client.lookup_base().to_owned(),
            })?;
            segments.pop_if_empty();
            segments.push("v1");
            segments.push("PhoneNumbers");
            segments.push(&self.phone_number);
        }

        let params = wire::query_params(
            self.country_code.as_deref(),
            self.include_caller_name,
            self.include_carrier,
        );
        if !params.is_empty() {
            let mut query = url.query_pairs_mut();
            for (name, value) in &params {
                query.append_pair(name, value);
            }
        }

        Ok(ApiRequest {
            method: Method::Get,
            url,
            headers: Vec::new(),
            body: None,
        })
    }

    /// Build and perform the request, expecting HTTP 200.
    pub async fn send(self) -> Result<LookupPhoneNumberResponse, TwilioError> {
        let request = self.build()?;
        let body = self.client.execute(&request, true, 200).await?;
        Ok(wire::decode_response(&body)?)
    }
}
