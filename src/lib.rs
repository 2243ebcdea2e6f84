//! Typed Rust client for the Twilio phone-number Lookup and SMS HTTP APIs.
//!
//! The crate covers exactly two endpoints: phone-number lookup
//! (`lookups.twilio.com`) and SMS send (`api.twilio.com`). Each call is a
//! single round-trip with no retries; the design is a domain layer of plain
//! typed values, a transport layer for wire-format details, and a client
//! layer holding configuration plus fluent per-request builders.
//!
//! ```rust,no_run
//! use twilio_rest::{AccountSid, AuthToken, TwilioClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), twilio_rest::TwilioError> {
//!     let client = TwilioClient::new(AccountSid::new("AC..."), AuthToken::new("..."));
//!
//!     let lookup = client
//!         .lookup_phone_number("+15108675310")
//!         .country_code("US")
//!         .include_carrier()
//!         .send()
//!         .await?;
//!     println!("carrier: {}", lookup.carrier.name);
//!
//!     let sent = client
//!         .send_message("+14155552345", "+15108675310", "Hello!")
//!         .send()
//!         .await?;
//!     println!("status: {}", sent.status);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ApiRequest, ApiResponse, BodyTransform, HttpTransport, IdentityTransform,
    LookupPhoneNumberBuilder, Method, SendMessageBuilder, TwilioClient, TwilioClientBuilder,
    TwilioError,
};
pub use domain::{
    AccountSid, AuthToken, CallerNameInfo, CarrierInfo, LookupPhoneNumberResponse, PhoneNumber,
    SendMessageResponse, ValidationError,
};
