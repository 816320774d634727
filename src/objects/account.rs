//! Donor payment account objects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Validate;

/// How a donor account is funded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "creditCard")]
    CreditCard,
    #[serde(rename = "ach")]
    Ach,
}

/// Billing contact details attached to an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountContactInfo {
    pub billing_address1: Option<String>,
    pub billing_address2: Option<String>,
    pub billing_city: Option<String>,
    pub billing_state: Option<String>,
    pub billing_zip: Option<String>,
    pub billing_country: Option<String>,
}

/// Payment account information for `POST /account` and `PUT /account/{guid}`.
///
/// Required: `donor_guid`, `payment_method`, and a `contact_info` carrying at
/// least billing address line 1 and billing state.  The card or bank fields
/// to fill depend on the payment method; [`credit_card`](Self::credit_card)
/// and [`ach`](Self::ach) set the matching combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub donor_guid: Option<Uuid>,
    pub payment_method: Option<PaymentMethod>,
    pub credit_card_number: Option<String>,
    /// Card verification code, under the API's field spelling.
    pub cw_code: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub account_holder_name: Option<String>,
    pub contact_info: AccountContactInfo,
}

impl AccountInfo {
    /// Credit-card account for an existing donor.
    pub fn credit_card(
        donor_guid: Uuid,
        number: impl Into<String>,
        cw_code: impl Into<String>,
        expiration_month: impl Into<String>,
        expiration_year: impl Into<String>,
    ) -> Self {
        Self {
            donor_guid: Some(donor_guid),
            payment_method: Some(PaymentMethod::CreditCard),
            credit_card_number: Some(number.into()),
            cw_code: Some(cw_code.into()),
            expiration_month: Some(expiration_month.into()),
            expiration_year: Some(expiration_year.into()),
            ..Self::default()
        }
    }

    /// ACH bank account for an existing donor.
    pub fn ach(
        donor_guid: Uuid,
        account_number: impl Into<String>,
        routing_number: impl Into<String>,
        account_holder_name: impl Into<String>,
    ) -> Self {
        Self {
            donor_guid: Some(donor_guid),
            payment_method: Some(PaymentMethod::Ach),
            account_number: Some(account_number.into()),
            routing_number: Some(routing_number.into()),
            account_holder_name: Some(account_holder_name.into()),
            ..Self::default()
        }
    }

    /// Attach billing contact details.
    pub fn with_contact_info(mut self, contact_info: AccountContactInfo) -> Self {
        self.contact_info = contact_info;
        self
    }
}

impl Validate for AccountInfo {
    const OBJECT: &'static str = "account";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.donor_guid.is_none() {
            missing.push("donorGuid");
        }
        if self.payment_method.is_none() {
            missing.push("paymentMethod");
        }
        if is_blank(&self.contact_info.billing_address1) {
            missing.push("billingAddress1");
        }
        if is_blank(&self.contact_info.billing_state) {
            missing.push("billingState");
        }
        missing
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
