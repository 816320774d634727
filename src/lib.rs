//! Client SDK for the iGivefirst donation API.
//!
//! iGivefirst processes micro-donations on behalf of publishers: a donor is
//! created once, funded through a payment account, and donations are then
//! issued against publisher and non-profit campaigns.  Every API request is
//! authenticated with an HMAC-SHA1 signature over a canonical serialization
//! of the request; the [`signature`] module implements that wire contract
//! and the HTTP client (behind the default `client` cargo feature) applies
//! it to every call.  See the client type's docs for a usage example.
//!
//! With `default-features = false` the crate drops the HTTP layer and still
//! provides the signature algorithm, the error taxonomy, and the wire
//! objects, which is enough to verify signed requests on a server.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod error;
pub mod objects;
pub mod signature;

#[cfg(feature = "client")]
pub use client::{AccountApi, Client, ClientError, DonationApi, DonorApi};
pub use config::{Credentials, Environment};
pub use error::{ApiError, classify};
pub use objects::{Created, Validate, ValidationError};

// Compile-time assertions: shared types must be Send + Sync for use across
// concurrent tasks.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<Credentials>;
    let _ = assert_send_sync::<ApiError>;
    #[cfg(feature = "client")]
    let _ = assert_send_sync::<Client>;
};
