//! Donor operations.

use uuid::Uuid;

use super::{Client, ClientError, parse_response};
use crate::error::ApiError;
use crate::objects::donor::{DonorInfo, DonorRecord};
use crate::objects::{Created, Validate};

/// Donor operations: create, and look up by email address or guid.
///
/// Borrowed from [`Client::donor`].
#[derive(Debug, Clone, Copy)]
pub struct DonorApi<'a> {
    pub(super) client: &'a Client,
}

impl DonorApi<'_> {
    /// `POST /donor` – create a donor.
    ///
    /// Validates locally first, so an incomplete [`DonorInfo`] never reaches
    /// the network.  A donor that already exists surfaces as
    /// [`ApiError::Conflict`].
    pub async fn create(&self, donor: &DonorInfo) -> Result<Created, ClientError> {
        donor.validate()?;

        let url = self.client.base_url.join("/donor")?;
        let request = self.client.http.post(url).json(donor).build()?;
        let response = self.client.execute(request).await?;
        parse_response(response).await
    }

    /// `GET /find-donor?emailAddress={email}` – look up a donor by email
    /// address.
    ///
    /// Returns `None` when no donor matches.
    pub async fn lookup(&self, email: &str) -> Result<Option<DonorRecord>, ClientError> {
        let url = self.client.base_url.join("/find-donor")?;
        let request = self
            .client
            .http
            .get(url)
            .query(&[("emailAddress", email)])
            .build()?;
        match self.client.execute(request).await {
            Ok(response) => Ok(Some(parse_response(response).await?)),
            Err(ClientError::Api(ApiError::NotFound { .. })) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// `GET /donor/{guid}` – fetch a donor by guid.
    ///
    /// Returns `None` when the donor does not exist.
    pub async fn get(&self, guid: Uuid) -> Result<Option<DonorRecord>, ClientError> {
        let url = self.client.base_url.join(&format!("/donor/{guid}"))?;
        let request = self.client.http.get(url).build()?;
        match self.client.execute(request).await {
            Ok(response) => Ok(Some(parse_response(response).await?)),
            Err(ClientError::Api(ApiError::NotFound { .. })) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
