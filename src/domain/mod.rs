//! Domain layer: plain typed values and response models (no I/O).

mod response;
mod validation;
mod value;

pub use response::{CallerNameInfo, CarrierInfo, LookupPhoneNumberResponse, SendMessageResponse};
pub use validation::ValidationError;
pub use value::{AccountSid, AuthToken, PhoneNumber};
