//! Donor objects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Validate;

/// Donor information for `POST /donor`.
///
/// `username` and `screen_name` are required; everything else is optional
/// and serializes as `null` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorInfo {
    pub username: String,
    /// Public display name; may equal the username.
    pub screen_name: String,
    pub share_personal_info: Option<bool>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub billing_address1: Option<String>,
    pub billing_address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub cell_phone_number: Option<String>,
    pub home_phone_number: Option<String>,
    pub work_phone_number: Option<String>,
}

impl DonorInfo {
    /// Create a donor whose screen name defaults to the username.
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            screen_name: username.clone(),
            username,
            ..Self::default()
        }
    }

    /// Override the public screen name.
    pub fn with_screen_name(mut self, screen_name: impl Into<String>) -> Self {
        self.screen_name = screen_name.into();
        self
    }
}

impl Validate for DonorInfo {
    const OBJECT: &'static str = "donor";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.username.is_empty() {
            missing.push("username");
        }
        if self.screen_name.is_empty() {
            missing.push("screenName");
        }
        missing
    }
}

/// Donor as returned by the lookup and get endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorRecord {
    pub guid: Option<Uuid>,
    pub email_address: Option<String>,
    pub username: Option<String>,
    pub screen_name: Option<String>,
    pub share_personal_info: Option<bool>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub billing_address1: Option<String>,
    pub billing_address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub cell_phone_number: Option<String>,
    pub home_phone_number: Option<String>,
    pub work_phone_number: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_screen_name_to_username() {
        let donor = DonorInfo::new("jdoe");
        assert_eq!(donor.username, "jdoe");
        assert_eq!(donor.screen_name, "jdoe");

        let named = DonorInfo::new("jdoe").with_screen_name("JDoe");
        assert_eq!(named.screen_name, "JDoe");
    }

    #[test]
    fn test_validate_reports_wire_names() {
        let err = DonorInfo::default().validate().unwrap_err();
        assert_eq!(err.missing, vec!["username", "screenName"]);
        assert_eq!(
            err.to_string(),
            "donor information incomplete: missing username, screenName"
        );

        assert!(DonorInfo::new("jdoe").validate().is_ok());
    }

    #[test]
    fn test_serializes_camel_case_with_explicit_nulls() {
        let value = serde_json::to_value(DonorInfo::new("jdoe")).unwrap();
        assert_eq!(value["username"], "jdoe");
        assert_eq!(value["screenName"], "jdoe");
        // unset optionals go out as null rather than being omitted
        assert!(value["firstName"].is_null());
        assert!(value["sharePersonalInfo"].is_null());
        assert!(value.get("screen_name").is_none());
    }

    #[test]
    fn test_record_tolerates_sparse_and_unknown_fields() {
        let record: DonorRecord = serde_json::from_str(
            r#"{
                "guid": "6ca2b5a1-8c06-4a4d-8ffd-7d9a23c67b32",
                "emailAddress": "jdoe@example.com",
                "accountBalance": "12.00"
            }"#,
        )
        .unwrap();
        assert_eq!(
            record.guid.unwrap().to_string(),
            "6ca2b5a1-8c06-4a4d-8ffd-7d9a23c67b32"
        );
        assert_eq!(record.email_address.as_deref(), Some("jdoe@example.com"));
        assert!(record.username.is_none());
    }
}
