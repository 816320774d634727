//! HTTP client for the donation API.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the shared types (signature algorithm, objects, error taxonomy) do
//! not pull in `reqwest`.

mod account;
mod donation;
mod donor;
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod testutil;

pub use account::AccountApi;
pub use donation::DonationApi;
pub use donor::DonorApi;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, DATE, HeaderValue};
use reqwest::{Request, Response};
use time::OffsetDateTime;
use tracing::debug;
use url::Url;

use crate::config::{Credentials, Environment};
use crate::error::{ApiError, classify};
use crate::objects::ValidationError;
use crate::signature::{self, CanonicalRequest, SignatureError};

/// User agent sent with every request from the default HTTP client.
const USER_AGENT: &str = concat!("igivefirst-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Request timeout for the default HTTP client.
const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Errors produced by the SDK HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A request object failed required-field validation; nothing was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The API call failed; see [`ApiError`] for the classification.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// HMAC signing of the outgoing request failed.
    #[error("signature error: {0}")]
    Signature(#[from] SignatureError),

    /// A 2xx response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Api(ApiError::from(err))
    }
}

/// Typed HTTP client for the iGivefirst donation API.
///
/// Holds the immutable [`Credentials`] and signs every outgoing request
/// with HMAC-SHA1 via [`sign_request`](Self::sign_request).  Cloning is
/// cheap; clones share the underlying connection pool and may be used from
/// concurrent tasks.
///
/// ```no_run
/// use igivefirst_sdk::objects::donor::DonorInfo;
/// use igivefirst_sdk::{Client, Credentials};
///
/// # async fn example() -> Result<(), igivefirst_sdk::ClientError> {
/// let client = Client::new(Credentials::new("api-key", "api-secret"))?;
///
/// let created = client.donor().create(&DonorInfo::new("jdoe")).await?;
/// println!("created donor {}", created.guid);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl Client {
    /// Create a client against the sandbox environment.
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Self::with_environment(Environment::Sandbox, credentials)
    }

    /// Create a client against a specific environment.
    pub fn with_environment(
        environment: Environment,
        credentials: Credentials,
    ) -> Result<Self, ClientError> {
        let base_url = Url::parse(environment.base_url())?;
        Ok(Self::with_base_url(base_url, credentials))
    }

    /// Create a client against an arbitrary base URL (e.g. a local stub
    /// server).
    pub fn with_base_url(base_url: Url, credentials: Credentials) -> Self {
        Self {
            http: default_http_client(),
            base_url,
            credentials,
        }
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure a proxy or different timeouts).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    /// Donor operations.
    pub fn donor(&self) -> DonorApi<'_> {
        DonorApi { client: self }
    }

    /// Account operations.
    pub fn account(&self) -> AccountApi<'_> {
        AccountApi { client: self }
    }

    /// Donation operations.
    pub fn donation(&self) -> DonationApi<'_> {
        DonationApi { client: self }
    }

    /// Sign a request in place: stamp the `Date` header and attach the
    /// `Authorization` header.
    ///
    /// The timestamp is formatted once and that same string goes into both
    /// the `Date` header and the canonical string, keeping the two
    /// byte-identical.  Call this once per request, immediately before
    /// sending; signing the same request again would stamp a fresh timestamp
    /// and produce a different (still valid) signature.
    pub fn sign_request(&self, request: &mut Request) -> Result<(), SignatureError> {
        let date = signature::http_date(OffsetDateTime::now_utc())?;

        let body_md5 = match request.body() {
            None => String::new(),
            Some(body) => {
                let bytes = body.as_bytes().ok_or(SignatureError::StreamingBody)?;
                signature::content_md5(bytes)
            }
        };
        let content_type = match request.headers().get(CONTENT_TYPE) {
            None => String::new(),
            Some(value) => value
                .to_str()
                .map_err(|_| SignatureError::InvalidHeaderValue)?
                .to_owned(),
        };
        let path = signature::normalize_path(request.url().path());

        let string_to_sign = CanonicalRequest {
            method: request.method().as_str(),
            body_md5: &body_md5,
            content_type: &content_type,
            date: &date,
            path: &path,
        }
        .string_to_sign();
        let signed = signature::sign(self.credentials.secret_bytes(), &string_to_sign);
        let authorization =
            signature::format_authorization_header(self.credentials.api_key(), &signed);

        let date_value =
            HeaderValue::from_str(&date).map_err(|_| SignatureError::InvalidHeaderValue)?;
        let auth_value = HeaderValue::from_str(&authorization)
            .map_err(|_| SignatureError::InvalidHeaderValue)?;
        let headers = request.headers_mut();
        headers.insert(DATE, date_value);
        headers.insert(AUTHORIZATION, auth_value);

        debug!(method = %request.method(), path = %path, "signed request");
        Ok(())
    }

    /// Sign and send a request, classifying any failure.
    ///
    /// A 2xx response is handed back for the caller to decode; every other
    /// outcome becomes exactly one [`ApiError`].  No retries happen here.
    pub async fn execute(&self, mut request: Request) -> Result<Response, ClientError> {
        self.sign_request(&mut request)?;

        let method = request.method().clone();
        let path = request.url().path().to_owned();
        let response = self.http.execute(request).await?;

        let status = response.status();
        if status.is_success() {
            debug!(%method, %path, %status, "request succeeded");
            return Ok(response);
        }

        let detail = response.text().await.unwrap_or_default();
        let detail = if detail.is_empty() {
            status.to_string()
        } else {
            detail
        };
        debug!(%method, %path, %status, "request failed");
        Err(ClientError::Api(classify(status.as_u16(), &detail)))
    }
}

/// Decode a 2xx response body.
async fn parse_response<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, ClientError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}

fn default_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::objects::donor::DonorInfo;
    use time::format_description::well_known::Rfc2822;

    fn test_client() -> Client {
        Client::with_base_url(
            Url::parse("https://api.example.test").unwrap(),
            Credentials::new("AK1", "s3cr3t"),
        )
    }

    fn header(request: &Request, name: reqwest::header::HeaderName) -> String {
        request
            .headers()
            .get(name)
            .unwrap()
            .to_str()
            .unwrap()
            .to_owned()
    }

    #[test]
    fn test_sign_request_stamps_matching_date_and_signature() {
        let client = test_client();
        let donor = DonorInfo::new("jdoe");
        let mut request = client
            .http
            .post(client.base_url.join("/donor").unwrap())
            .json(&donor)
            .build()
            .unwrap();
        client.sign_request(&mut request).unwrap();

        let date = header(&request, DATE);
        let authorization = header(&request, AUTHORIZATION);

        // the stamped date is RFC-1123 UTC
        assert!(OffsetDateTime::parse(&date, &Rfc2822).is_ok());
        assert!(date.ends_with("+0000"));

        // recompute the signature from the request contents and the date
        // that was actually stamped; any divergence between the Date header
        // and the canonical string would fail this
        let body = request.body().unwrap().as_bytes().unwrap();
        let string_to_sign = CanonicalRequest {
            method: "POST",
            body_md5: &signature::content_md5(body),
            content_type: "application/json",
            date: &date,
            path: "/donor",
        }
        .string_to_sign();
        let expected = signature::format_authorization_header(
            "AK1",
            &signature::sign(b"s3cr3t", &string_to_sign),
        );
        assert_eq!(authorization, expected);
        assert!(authorization.starts_with("IGF_HMAC_SHA1 AK1:"));
    }

    #[test]
    fn test_sign_request_bodyless_get_uses_empty_hash() {
        let client = test_client();
        let mut request = client
            .http
            .get(client.base_url.join("/donor/123").unwrap())
            .build()
            .unwrap();
        client.sign_request(&mut request).unwrap();

        let date = header(&request, DATE);
        let expected = signature::sign(b"s3cr3t", &format!("GET\n\n\n{date}\n/donor/123"));
        assert_eq!(
            header(&request, AUTHORIZATION),
            format!("IGF_HMAC_SHA1 AK1:{expected}")
        );
    }

    #[test]
    fn test_sign_request_normalizes_path() {
        let client = test_client();
        // the url parser already folds the dot segment; the duplicate slash
        // survives it and must be folded by the signer
        let url = Url::parse("https://api.example.test/donor//lookup/../get").unwrap();
        assert_eq!(url.path(), "/donor//get");

        let mut request = client.http.get(url).build().unwrap();
        client.sign_request(&mut request).unwrap();

        let date = header(&request, DATE);
        let expected = signature::sign(b"s3cr3t", &format!("GET\n\n\n{date}\n/donor/get"));
        assert_eq!(
            header(&request, AUTHORIZATION),
            format!("IGF_HMAC_SHA1 AK1:{expected}")
        );
    }

    #[test]
    fn test_sign_request_rejects_unreadable_content_type() {
        let client = test_client();
        let mut request = client
            .http
            .get(client.base_url.join("/donor").unwrap())
            .build()
            .unwrap();
        request.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_bytes(b"application/json; charset=\xff").unwrap(),
        );

        // a value the canonical string cannot reproduce must fail loudly
        // instead of signing an empty field the server would never match
        let err = client.sign_request(&mut request).unwrap_err();
        assert!(matches!(err, SignatureError::InvalidHeaderValue));
        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert!(request.headers().get(DATE).is_none());
    }

    #[tokio::test]
    async fn test_connection_failure_classifies_as_transport() {
        let client = Client::with_base_url(
            Url::parse("http://127.0.0.1:9/").unwrap(),
            Credentials::new("AK1", "s3cr3t"),
        );
        let request = client
            .http
            .get(client.base_url.join("/donor").unwrap())
            .build()
            .unwrap();

        let err = client.execute(request).await.unwrap_err();
        assert!(matches!(err, ClientError::Api(ApiError::Transport { .. })));
    }

    #[tokio::test]
    async fn test_execute_empty_error_body_falls_back_to_status_line() {
        let (client, server) = testutil::canned_server("404 Not Found", "").await;
        let request = client
            .http
            .get(client.base_url.join("/donor").unwrap())
            .build()
            .unwrap();

        let err = client.execute(request).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Api(ApiError::NotFound { detail }) if detail == "404 Not Found"
        ));

        // the signed headers really went out on the wire
        let raw = server.await.unwrap();
        let raw = String::from_utf8_lossy(&raw).to_ascii_lowercase();
        assert!(raw.contains("igf_hmac_sha1 ak1:"));
        assert!(raw.contains("\r\ndate:"));
    }

    #[tokio::test]
    async fn test_execute_classifies_canned_server_error() {
        let (client, server) = testutil::canned_server("503 Service Unavailable", "down").await;
        let request = client
            .http
            .get(client.base_url.join("/donation").unwrap())
            .build()
            .unwrap();

        let err = client.execute(request).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Api(ApiError::ServerError { status: 503 })
        ));
        server.await.unwrap();
    }
}
