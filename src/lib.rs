//! # cloudflare-dns-client
//!
//! A thin client for the [Cloudflare v4 API](https://api.cloudflare.com/)
//! covering DNS record management: authenticated requests, zone and
//! record name→id resolution, and record create/update/delete.
//!
//! The client is deliberately minimal. It performs exactly one HTTP
//! call per logical request, reads only the first page of lookup
//! results, caches nothing, and retries nothing — every failure
//! surfaces immediately as an [`ApiError`].
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — use the platform's native TLS
//!   implementation.
//! - **`rustls`** — use rustls instead.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cloudflare_dns_client::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new("admin@example.com", "api-key");
//!
//!     // Point www.example.com at a new address (TTL 1 = automatic).
//!     client
//!         .update_record("www.example.com", "example.com", "203.0.113.7", "A", 1)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Lower-level access goes through [`ApiClient::call`], which returns
//! the raw response [`Envelope`] of any endpoint:
//!
//! ```rust,no_run
//! # use cloudflare_dns_client::{ApiClient, Method, Result};
//! # async fn example(client: &ApiClient) -> Result<()> {
//! let envelope = client.call("/zones?name=example.com", Method::Get, None).await?;
//! println!("{:?}", envelope.result);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). Usage
//! violations, transport failures, non-success HTTP statuses,
//! unparsable bodies, and envelope-level failures all map onto the
//! same error type; an unresolvable zone or record name is not
//! distinguishable from any other API failure except by message.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use types::{CF_API_ENDPOINT, Envelope, Method};
