//! Request signing and verification for the iGivefirst API.
//!
//! Every API request is authenticated with an HMAC-SHA1 signature over a
//! canonical serialization of the request.  The wire format for the header
//! is:
//!
//! ```text
//! Authorization: IGF_HMAC_SHA1 {api_key}:{base64_signature}
//! ```
//!
//! where the signature is `HMAC-SHA1(secret, string_to_sign)` and the string
//! to sign is five newline-joined fields:
//!
//! ```text
//! {method}\n{body_md5}\n{content_type}\n{date}\n{path}
//! ```
//!
//! * `method` – uppercase HTTP verb, verbatim.
//! * `body_md5` – base64 MD5 of the exact body bytes, or the empty string
//!   for a bodyless request.
//! * `content_type` – the `Content-Type` header value, or the empty string
//!   if absent.
//! * `date` – RFC-1123 UTC timestamp, e.g. `Tue, 01 Jan 2019 00:00:00 +0000`.
//!   The byte-identical string must be sent as the `Date` header.
//! * `path` – the URL path only (no scheme, host, or query), with `.`, `..`,
//!   and duplicate slashes normalized away.

use md5::{Digest, Md5};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc2822;
use tracing::debug;

/// Authorization scheme prefix for the signature header.
pub const AUTH_SCHEME: &str = "IGF_HMAC_SHA1";

/// Errors produced by signature operations.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("invalid header format")]
    InvalidFormat,
    #[error("invalid base64 encoding")]
    InvalidBase64,
    #[error("invalid signature")]
    SignatureMismatch,
    #[error("date formatting failed: {0}")]
    DateFormat(#[from] time::error::Format),
    #[error("streaming request body cannot be signed")]
    StreamingBody,
    #[error("header value contains invalid characters")]
    InvalidHeaderValue,
}

impl From<ring::error::Unspecified> for SignatureError {
    fn from(_: ring::error::Unspecified) -> Self {
        Self::SignatureMismatch
    }
}

// ---------------------------------------------------------------------------
// Canonical request
// ---------------------------------------------------------------------------

/// The five authenticated fields of one request, in signing order.
///
/// Ephemeral: assembled immediately before signing and dropped afterwards,
/// never cached across requests.  The `date` field must be the same string
/// that goes out as the `Date` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest<'a> {
    /// Uppercase HTTP verb, verbatim.
    pub method: &'a str,
    /// Base64 MD5 of the body bytes ([`content_md5`]), or `""` when the
    /// request carries no body.
    pub body_md5: &'a str,
    /// `Content-Type` header value, or `""` when absent.
    pub content_type: &'a str,
    /// RFC-1123 UTC timestamp from [`http_date`].
    pub date: &'a str,
    /// Normalized URL path from [`normalize_path`].
    pub path: &'a str,
}

impl CanonicalRequest<'_> {
    /// Join the five fields into the exact HMAC input.
    ///
    /// Absent fields stay as empty strings; the field count and order never
    /// change.
    pub fn string_to_sign(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n{}",
            self.method, self.body_md5, self.content_type, self.date, self.path
        )
    }
}

/// Format a timestamp as the RFC-1123 UTC string used on the wire.
///
/// Non-UTC inputs are converted to UTC first, so the offset field is always
/// `+0000`.
pub fn http_date(at: OffsetDateTime) -> Result<String, SignatureError> {
    Ok(at.to_offset(time::UtcOffset::UTC).format(&Rfc2822)?)
}

/// Base64-encode the MD5 digest of a request body.
///
/// Matches the transport's `Content-MD5` convention, so a server-side
/// integrity check and signature verification see the same value.
pub fn content_md5(body: &[u8]) -> String {
    let digest = Md5::digest(body);
    fast32::base64::RFC4648.encode(digest.as_slice())
}

/// Normalize a URL path for signing.
///
/// Removes `.` segments, resolves `..` against the preceding segment, and
/// collapses duplicate slashes, so textually different spellings of the same
/// path sign identically.  `..` at the root is dropped.  The result always
/// starts with `/`.
pub fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    if segments.is_empty() {
        return "/".to_owned();
    }
    let mut normalized = String::with_capacity(path.len());
    for segment in segments {
        normalized.push('/');
        normalized.push_str(segment);
    }
    normalized
}

// ---------------------------------------------------------------------------
// Signing / verification
// ---------------------------------------------------------------------------

/// Compute `base64(HMAC-SHA1(secret, string_to_sign))`.
///
/// The key is the raw secret bytes, the digest is binary before base64, and
/// the output is padded base64.  Pure and deterministic.
pub fn sign(secret: &[u8], string_to_sign: &str) -> String {
    let tag = ring::hmac::sign(
        &ring::hmac::Key::new(ring::hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, secret),
        string_to_sign.as_bytes(),
    );
    fast32::base64::RFC4648.encode(tag.as_ref())
}

/// Verify a base64 signature against a string to sign.
///
/// The comparison is constant-time.
pub fn verify(secret: &[u8], string_to_sign: &str, signature: &str) -> Result<(), SignatureError> {
    let raw = fast32::base64::RFC4648
        .decode_str(signature)
        .map_err(|_| SignatureError::InvalidBase64)?;
    if let Err(err) = ring::hmac::verify(
        &ring::hmac::Key::new(ring::hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, secret),
        string_to_sign.as_bytes(),
        &raw,
    ) {
        debug!("signature mismatch");
        return Err(err.into());
    }
    debug!("signature verified");
    Ok(())
}

// ---------------------------------------------------------------------------
// Header formatting / parsing
// ---------------------------------------------------------------------------

/// Format the full `Authorization` header value
/// (`IGF_HMAC_SHA1 {api_key}:{signature}`).
pub fn format_authorization_header(api_key: &str, signature: &str) -> String {
    format!("{AUTH_SCHEME} {api_key}:{signature}")
}

/// Parse an `Authorization` header value into `(api_key, signature)`.
///
/// The signature part stays base64; pass it to [`verify`].
pub fn parse_authorization_header(value: &str) -> Result<(&str, &str), SignatureError> {
    let rest = value
        .strip_prefix(AUTH_SCHEME)
        .and_then(|r| r.strip_prefix(' '))
        .ok_or(SignatureError::InvalidFormat)?;
    let (api_key, signature) = rest.split_once(':').ok_or(SignatureError::InvalidFormat)?;
    if api_key.is_empty() || signature.is_empty() {
        return Err(SignatureError::InvalidFormat);
    }
    Ok((api_key, signature))
}
