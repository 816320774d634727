//! Donation objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::Validate;

/// Donation information for `POST /donation`.
///
/// Required: `amount` plus the non-profit campaign, publisher campaign,
/// donor account, and donor guids.  `date_created` is stamped with the
/// current UTC time on construction and serializes as RFC-3339.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationInfo {
    /// Creation time, truncated to whole seconds.
    #[serde(with = "time::serde::rfc3339")]
    pub date_created: OffsetDateTime,
    /// Amount in dollars, e.g. `40.00`; a string on the wire.
    pub amount: Option<Decimal>,
    pub sponsor_matching_percentage: Option<Decimal>,
    pub non_profit_campaign_guid: Option<Uuid>,
    pub publisher_campaign_guid: Option<Uuid>,
    pub sponsor_campaign_guid: Option<Uuid>,
    pub publisher_guid: Option<Uuid>,
    pub donor_account_guid: Option<Uuid>,
    pub donor_guid: Option<Uuid>,
    pub publisher_transaction_id: Option<String>,
}

impl DonationInfo {
    /// Create a donation from its five required fields.
    pub fn new(
        amount: Decimal,
        non_profit_campaign_guid: Uuid,
        publisher_campaign_guid: Uuid,
        donor_account_guid: Uuid,
        donor_guid: Uuid,
    ) -> Self {
        Self {
            amount: Some(amount),
            non_profit_campaign_guid: Some(non_profit_campaign_guid),
            publisher_campaign_guid: Some(publisher_campaign_guid),
            donor_account_guid: Some(donor_account_guid),
            donor_guid: Some(donor_guid),
            ..Self::default()
        }
    }
}

impl Default for DonationInfo {
    fn default() -> Self {
        Self {
            date_created: now_whole_seconds(),
            amount: None,
            sponsor_matching_percentage: None,
            non_profit_campaign_guid: None,
            publisher_campaign_guid: None,
            sponsor_campaign_guid: None,
            publisher_guid: None,
            donor_account_guid: None,
            donor_guid: None,
            publisher_transaction_id: None,
        }
    }
}

impl Validate for DonationInfo {
    const OBJECT: &'static str = "donation";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.amount.is_none() {
            missing.push("amount");
        }
        if self.non_profit_campaign_guid.is_none() {
            missing.push("nonProfitCampaignGuid");
        }
        if self.publisher_campaign_guid.is_none() {
            missing.push("publisherCampaignGuid");
        }
        if self.donor_account_guid.is_none() {
            missing.push("donorAccountGuid");
        }
        if self.donor_guid.is_none() {
            missing.push("donorGuid");
        }
        missing
    }
}

// sub-second precision would leak into the RFC-3339 output
fn now_whole_seconds() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    now.replace_nanosecond(0).unwrap_or(now)
}

/// Donation as returned by the get endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    pub guid: Option<Uuid>,
    /// Server-formatted timestamp, kept verbatim.
    pub date_created: Option<String>,
    pub amount: Option<Decimal>,
    pub sponsor_matching_percentage: Option<Decimal>,
    pub non_profit_campaign_guid: Option<Uuid>,
    pub publisher_campaign_guid: Option<Uuid>,
    pub sponsor_campaign_guid: Option<Uuid>,
    pub publisher_guid: Option<Uuid>,
    pub donor_account_guid: Option<Uuid>,
    pub donor_guid: Option<Uuid>,
    pub publisher_transaction_id: Option<String>,
}
