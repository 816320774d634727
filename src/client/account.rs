//! Donor payment account operations.

use uuid::Uuid;

use super::{Client, ClientError, parse_response};
use crate::objects::account::AccountInfo;
use crate::objects::{Created, Validate};

/// Payment account operations: create, update, disable.
///
/// Borrowed from [`Client::account`].
#[derive(Debug, Clone, Copy)]
pub struct AccountApi<'a> {
    pub(super) client: &'a Client,
}

impl AccountApi<'_> {
    /// `POST /account` – attach a payment account to a donor.
    pub async fn create(&self, account: &AccountInfo) -> Result<Created, ClientError> {
        account.validate()?;

        let url = self.client.base_url.join("/account")?;
        let request = self.client.http.post(url).json(account).build()?;
        let response = self.client.execute(request).await?;
        parse_response(response).await
    }

    /// `PUT /account/{guid}` – replace an existing account.  The endpoint
    /// takes the complete account information, not a partial update.
    ///
    /// This is a write, so a missing account surfaces as
    /// [`ApiError::NotFound`](crate::error::ApiError::NotFound) instead of an
    /// absent result.
    pub async fn update(&self, guid: Uuid, account: &AccountInfo) -> Result<(), ClientError> {
        account.validate()?;

        let url = self.client.base_url.join(&format!("/account/{guid}"))?;
        let request = self.client.http.put(url).json(account).build()?;
        self.client.execute(request).await?;
        Ok(())
    }

    /// `DELETE /account/{guid}` – disable an existing account.
    pub async fn disable(&self, guid: Uuid) -> Result<(), ClientError> {
        let url = self.client.base_url.join(&format!("/account/{guid}"))?;
        let request = self.client.http.delete(url).build()?;
        self.client.execute(request).await?;
        Ok(())
    }
}
