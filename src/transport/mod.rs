//! Transport layer: wire-format details (query/form encoding and JSON
//! decoding), kept free of I/O so each endpoint's format can be tested in
//! isolation.

pub(crate) mod lookup_phone_number;
pub(crate) mod send_message;
