//! Typed response models mirroring the Twilio JSON shapes.
//!
//! Fields the remote service sends as `null` decode to the Rust default
//! (`""` for strings, `0` for `error_code`). Fields present in real Twilio
//! responses but not listed here are intentionally not modeled.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Optional caller-name section of a lookup response (`caller_name`).
pub struct CallerNameInfo {
    pub caller_name: String,
    pub caller_type: String,
    pub error_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Optional carrier section of a lookup response (`carrier`).
pub struct CarrierInfo {
    pub mobile_country_code: String,
    pub mobile_network_code: String,
    pub name: String,
    /// Carrier type (`type` on the wire), e.g. `"mobile"`.
    pub kind: String,
    pub error_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Response of `GET /v1/PhoneNumbers/{number}` on the lookup service.
pub struct LookupPhoneNumberResponse {
    pub country_code: String,
    pub phone_number: String,
    pub national_format: String,
    pub caller_name: CallerNameInfo,
    pub carrier: CarrierInfo,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Response of `POST /Accounts/{sid}/Messages.json` on the messaging API.
pub struct SendMessageResponse {
    pub status: String,
    pub error_code: i64,
    pub error_message: String,
}
