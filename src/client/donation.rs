//! Donation operations.

use uuid::Uuid;

use super::{Client, ClientError, parse_response};
use crate::error::ApiError;
use crate::objects::donation::{DonationInfo, DonationRecord};
use crate::objects::{Created, Validate};

/// Donation operations: create and fetch.
///
/// Borrowed from [`Client::donation`].
#[derive(Debug, Clone, Copy)]
pub struct DonationApi<'a> {
    pub(super) client: &'a Client,
}

impl DonationApi<'_> {
    /// `POST /donation` – issue a donation against a donor account.
    pub async fn create(&self, donation: &DonationInfo) -> Result<Created, ClientError> {
        donation.validate()?;

        let url = self.client.base_url.join("/donation")?;
        let request = self.client.http.post(url).json(donation).build()?;
        let response = self.client.execute(request).await?;
        parse_response(response).await
    }

    /// `GET /donation/{guid}` – fetch a donation by guid.
    ///
    /// Returns `None` when the donation does not exist.
    pub async fn get(&self, guid: Uuid) -> Result<Option<DonationRecord>, ClientError> {
        let url = self.client.base_url.join(&format!("/donation/{guid}"))?;
        let request = self.client.http.get(url).build()?;
        match self.client.execute(request).await {
            Ok(response) => Ok(Some(parse_response(response).await?)),
            Err(ClientError::Api(ApiError::NotFound { .. })) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
