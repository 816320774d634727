//! Request and response objects for the donation API.
//!
//! Request objects (`*Info`) serialize to the API's camelCase JSON and carry
//! a required-field check that runs before any request is signed or sent.
//! Response records (`*Record`) keep every field optional because the server
//! controls which fields come back.

pub mod account;
pub mod donation;
pub mod donor;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Required-field validation for request objects.
///
/// Mirrors the server's own checks so an incomplete object fails locally
/// instead of burning a round trip.
pub trait Validate {
    /// Object name used in error messages.
    const OBJECT: &'static str;

    /// Wire-format names of required fields that are missing or empty.
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Check all required fields, reporting every missing one at once.
    fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                object: Self::OBJECT,
                missing,
            })
        }
    }
}

/// A request object failed required-field validation.
///
/// Raised before the request is signed; never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{object} information incomplete: missing {}", .missing.join(", "))]
pub struct ValidationError {
    /// Which object failed.
    pub object: &'static str,
    /// Wire-format names of the missing fields.
    pub missing: Vec<&'static str>,
}

/// Response body of every successful create call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Created {
    /// Guid of the newly created object.
    pub guid: Uuid,
}
