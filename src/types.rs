//! Wire-level types shared by the client.

use serde::Deserialize;
use serde_json::Value;

/// Cloudflare v4 API endpoint used when no custom endpoint is configured.
pub const CF_API_ENDPOINT: &str = "https://api.cloudflare.com/client/v4";

/// HTTP methods the API client can dispatch.
///
/// The set is closed on purpose: every endpoint of the DNS API uses one
/// of these five verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Whether a request of this method may carry a body.
    ///
    /// GET and DELETE must not; the client rejects such requests before
    /// they reach the network.
    pub(crate) fn allows_body(self) -> bool {
        !matches!(self, Self::Get | Self::Delete)
    }

    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        })
    }
}

/// Response envelope every API endpoint wraps its payload in.
///
/// A response is usable only when `success` is `true`. A missing flag
/// deserializes to `false` and is treated the same as an explicit
/// failure; callers rely on that conflation. Fields other than the
/// well-known ones are ignored.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    pub result: Option<Value>,
    /// Error objects as the API sent them, kept opaque.
    pub errors: Option<Vec<Value>>,
    pub result_info: Option<Value>,
}
