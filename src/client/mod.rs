//! Client layer: configuration, the shared request-execution routine, and the
//! per-endpoint request builders.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{AccountSid, AuthToken};

mod lookup;
mod sms;

pub use lookup::LookupPhoneNumberBuilder;
pub use sms::SendMessageBuilder;

const DEFAULT_LOOKUP_BASE_URL: &str = "https://lookups.twilio.com";
const DEFAULT_API_BASE_URL: &str = "https://api.twilio.com/2010-04-01";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// HTTP method of an [`ApiRequest`]. Only the two methods the Twilio
/// endpoints use are modeled.
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone)]
/// A fully built Twilio API request, produced by a builder's `build()` and
/// consumed by the execution routine.
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    /// Static header pairs; the builders only ever set `Accept` and
    /// `Content-Type`.
    pub headers: Vec<(&'static str, &'static str)>,
    /// Form-encoded body for POST requests, `None` for GET.
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
/// Raw response handed back by an [`HttpTransport`].
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Strategy performing the actual HTTP round-trip.
///
/// The production implementation wraps [`reqwest::Client`]; tests inject a
/// fake to exercise the execution routine without a network.
pub trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: &'a ApiRequest,
        basic_auth: Option<(&'a str, &'a str)>,
    ) -> BoxFuture<'a, Result<ApiResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: &'a ApiRequest,
        basic_auth: Option<(&'a str, &'a str)>,
    ) -> BoxFuture<'a, Result<ApiResponse, BoxError>> {
        Box::pin(async move {
            let mut builder = match request.method {
                Method::Get => self.client.get(request.url.as_str()),
                Method::Post => self.client.post(request.url.as_str()),
            };
            for (name, value) in &request.headers {
                builder = builder.header(*name, *value);
            }
            if let Some(body) = request.body.clone() {
                builder = builder.body(body);
            }
            if let Some((user, password)) = basic_auth {
                builder = builder.basic_auth(user, Some(password));
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(ApiResponse { status, body })
        })
    }
}

/// Hook applied to every response body before JSON decoding.
///
/// Production uses the identity pass-through; tests substitute a failing
/// transform to simulate a body-read error without touching the happy path.
pub trait BodyTransform: Send + Sync {
    fn transform(&self, body: String) -> Result<String, BoxError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Identity [`BodyTransform`]; the production default.
pub struct IdentityTransform;

impl BodyTransform for IdentityTransform {
    fn transform(&self, body: String) -> Result<String, BoxError> {
        Ok(body)
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TwilioClient`] calls.
///
/// Every failure is terminal for that call: there are no retries and no
/// transient/permanent classification.
pub enum TwilioError {
    /// A configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    Url(#[from] url::ParseError),

    /// A configured base URL cannot carry path segments (e.g. `data:` URLs).
    #[error("base URL cannot carry path segments: {url}")]
    BaseUrl { url: String },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc), unmodified.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The server answered with a status other than the expected one.
    #[error("unexpected response status: expected {expected}, got {actual}")]
    UnexpectedStatus { expected: u16, actual: u16 },

    /// The response body could not be read; the underlying message is
    /// preserved verbatim.
    #[error(transparent)]
    BodyRead(BoxError),

    /// The response body was not valid JSON for the expected shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone)]
/// Builder for [`TwilioClient`].
///
/// Use this to point the client at a mock server, set a timeout or
/// user-agent, or inject a custom transport / body transform.
pub struct TwilioClientBuilder {
    sid: AccountSid,
    token: AuthToken,
    lookup_base_url: String,
    api_base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
    body_transform: Arc<dyn BodyTransform>,
}

impl TwilioClientBuilder {
    /// Create a builder with the default Twilio base URLs.
    pub fn new(sid: AccountSid, token: AuthToken) -> Self {
        Self {
            sid,
            token,
            lookup_base_url: DEFAULT_LOOKUP_BASE_URL.to_owned(),
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
            body_transform: Arc::new(IdentityTransform),
        }
    }

    /// Override the base URL of the lookup service
    /// (default `https://lookups.twilio.com`).
    pub fn lookup_base_url(mut self, url: impl Into<String>) -> Self {
        self.lookup_base_url = url.into();
        self
    }

    /// Override the base URL of the account-scoped REST API
    /// (default `https://api.twilio.com/2010-04-01`).
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Only used when no custom transport is injected.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Only used when no custom transport is injected.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the HTTP transport entirely.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the response-body transform (identity by default).
    pub fn body_transform(mut self, transform: Arc<dyn BodyTransform>) -> Self {
        self.body_transform = transform;
        self
    }

    /// Build a [`TwilioClient`].
    pub fn build(self) -> Result<TwilioClient, TwilioError> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }

                let client = builder
                    .build()
                    .map_err(|err| TwilioError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client }) as Arc<dyn HttpTransport>
            }
        };

        Ok(TwilioClient {
            sid: self.sid,
            token: self.token,
            lookup_base_url: self.lookup_base_url,
            api_base_url: self.api_base_url,
            http: transport,
            body_transform: self.body_transform,
        })
    }
}

#[derive(Clone)]
/// Client for the Twilio phone-number lookup and SMS-send endpoints.
///
/// The client is a configuration holder: credentials, base URLs, the HTTP
/// transport, and the response-body transform. It is immutable once built and
/// cheap to clone. Each call is a single round-trip with no retries.
pub struct TwilioClient {
    sid: AccountSid,
    token: AuthToken,
    lookup_base_url: String,
    api_base_url: String,
    http: Arc<dyn HttpTransport>,
    body_transform: Arc<dyn BodyTransform>,
}

impl TwilioClient {
    /// Create a client using the default Twilio base URLs.
    ///
    /// For more customization, use [`TwilioClient::builder`].
    pub fn new(sid: AccountSid, token: AuthToken) -> Self {
        Self {
            sid,
            token,
            lookup_base_url: DEFAULT_LOOKUP_BASE_URL.to_owned(),
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
            body_transform: Arc::new(IdentityTransform),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(sid: AccountSid, token: AuthToken) -> TwilioClientBuilder {
        TwilioClientBuilder::new(sid, token)
    }

    /// Start a phone-number lookup request.
    ///
    /// The number is sent as given (percent-encoded into the request path);
    /// parse a [`crate::PhoneNumber`] first if you want E.164 normalization.
    pub fn lookup_phone_number(
        &self,
        phone_number: impl Into<String>,
    ) -> LookupPhoneNumberBuilder<'_> {
        LookupPhoneNumberBuilder::new(self, phone_number.into())
    }

    /// Start an SMS send request. All three fields are required.
    pub fn send_message(
        &self,
        from: impl Into<String>,
        to: impl Into<String>,
        body: impl Into<String>,
    ) -> SendMessageBuilder<'_> {
        SendMessageBuilder::new(self, from.into(), to.into(), body.into())
    }

    pub(crate) fn account_sid(&self) -> &AccountSid {
        &self.sid
    }

    pub(crate) fn lookup_base(&self) -> &str {
        &self.lookup_base_url
    }

    pub(crate) fn api_base(&self) -> &str {
        &self.api_base_url
    }

    /// Shared execution routine: attach basic auth when requested, perform
    /// the request once, enforce the expected status, and run the body
    /// through the configured transform. Decoding is left to the endpoint's
    /// transport module.
    pub(crate) async fn execute(
        &self,
        request: &ApiRequest,
        authorize: bool,
        expected_status: u16,
    ) -> Result<String, TwilioError> {
        let basic_auth = authorize.then(|| (self.sid.as_str(), self.token.as_str()));

        let response = self
            .http
            .execute(request, basic_auth)
            .await
            .map_err(TwilioError::Transport)?;

        if response.status != expected_status {
            return Err(TwilioError::UnexpectedStatus {
                expected: expected_status,
                actual: response.status,
            });
        }

        self.body_transform
            .transform(response.body)
            .map_err(TwilioError::BodyRead)
    }
}
