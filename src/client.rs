//! The API client: authenticated calls and record operations.

use serde_json::{Map, Value, json};

use crate::error::{ApiError, Result};
use crate::types::{CF_API_ENDPOINT, Envelope, Method};

/// Client for the Cloudflare v4 DNS management API.
///
/// Holds only immutable configuration, so a single instance can be
/// shared freely across tasks. Every operation is one or more round
/// trips issued strictly in sequence; nothing is cached or retried.
pub struct ApiClient {
    client: reqwest::Client,
    email: String,
    auth_key: String,
    endpoint: String,
}

// The auth key never appears in Debug output.
impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("email", &self.email)
            .field("auth_key", &"<REDACTED>")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client against the default v4 endpoint.
    ///
    /// `auth_key` is the account's "API Key" from the Cloudflare
    /// dashboard, sent together with `email` on every request.
    pub fn new(email: impl Into<String>, auth_key: impl Into<String>) -> Self {
        Self::with_endpoint(email, auth_key, CF_API_ENDPOINT)
    }

    /// Create a client against a custom base endpoint.
    ///
    /// The endpoint is used verbatim as the prefix of every request
    /// URL. No timeouts are configured; transport defaults apply.
    pub fn with_endpoint(
        email: impl Into<String>,
        auth_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            email: email.into(),
            auth_key: auth_key.into(),
            endpoint: endpoint.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn auth_key(&self) -> &str {
        &self.auth_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform one authenticated API call and unwrap its envelope.
    ///
    /// `path` is appended verbatim to the base endpoint. A `body` is
    /// only legal for methods that admit one; supplying a body with
    /// GET or DELETE fails before any request is dispatched.
    ///
    /// Returns the full envelope of a successful response. Every
    /// failure signal — transport error, non-2xx status, unparsable
    /// body, or an envelope whose `success` flag is false or missing —
    /// comes back as an [`ApiError`].
    pub async fn call(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
    ) -> Result<Envelope> {
        if body.is_some() && !method.allows_body() {
            return Err(ApiError::InvalidUsage { method });
        }

        let url = format!("{}{}", self.endpoint, path);
        log::debug!("{method} {url}");

        let mut request = self
            .client
            .request(method.as_reqwest(), &url)
            .header("X-Auth-Email", &self.email)
            .header("X-Auth-Key", &self.auth_key)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send().await?;

        let status = response.status();
        log::debug!("response status: {status}");
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }

        let text = response.text().await?;
        log::debug!("response body: {}", truncate_for_log(&text));

        let envelope: Envelope = serde_json::from_str(&text).inspect_err(|e| {
            log::error!("failed to parse API response: {e}");
        })?;

        if !envelope.success {
            let message = match &envelope.errors {
                Some(errors) if !errors.is_empty() => {
                    format!("API call failed: {}", Value::Array(errors.clone()))
                }
                _ => "API call failed".to_string(),
            };
            log::error!("{message}");
            return Err(ApiError::Api { message });
        }

        Ok(envelope)
    }

    /// Look up the id of the zone named exactly `zone_name`.
    pub async fn resolve_zone_id(&self, zone_name: &str) -> Result<String> {
        let envelope = self
            .call(&format!("/zones?name={zone_name}"), Method::Get, None)
            .await?;
        first_result_id(&envelope)
            .map(str::to_owned)
            .ok_or_else(|| ApiError::Api {
                message: format!("zone {zone_name} not found"),
            })
    }

    /// Look up the id of the record named exactly `record_name` within
    /// the given zone.
    pub async fn resolve_record_id(&self, record_name: &str, zone_id: &str) -> Result<String> {
        let envelope = self
            .call(
                &format!("/zones/{zone_id}/dns_records?name={record_name}"),
                Method::Get,
                None,
            )
            .await?;
        first_result_id(&envelope)
            .map(str::to_owned)
            .ok_or_else(|| ApiError::Api {
                message: format!("record {record_name} not found in zone {zone_id}"),
            })
    }

    /// Replace an existing record's name, content, type and TTL.
    ///
    /// Resolves the zone and record ids by name first, then issues a
    /// single PUT carrying exactly those fields. A `ttl` of 1 means
    /// "automatic" per Cloudflare's convention.
    pub async fn update_record(
        &self,
        name: &str,
        zone: &str,
        content: &str,
        record_type: &str,
        ttl: u32,
    ) -> Result<()> {
        let zone_id = self.resolve_zone_id(zone).await?;
        let record_id = self.resolve_record_id(name, &zone_id).await?;

        let body = json!({
            "id": record_id,
            "name": name,
            "content": content,
            "type": record_type,
            "ttl": ttl,
        });
        self.call(
            &format!("/zones/{zone_id}/dns_records/{record_id}"),
            Method::Put,
            Some(body),
        )
        .await?;
        Ok(())
    }

    /// Create a record in the given zone.
    ///
    /// `data` carries structured extra attributes for record types
    /// that need them (SRV priority/weight/target and the like); it is
    /// included in the request body only when non-empty.
    pub async fn create_record(
        &self,
        name: &str,
        zone: &str,
        content: &str,
        data: Option<Map<String, Value>>,
        record_type: &str,
        ttl: u32,
    ) -> Result<()> {
        let zone_id = self.resolve_zone_id(zone).await?;

        let mut body = json!({
            "name": name,
            "content": content,
            "type": record_type,
            "ttl": ttl,
        });
        if let Some(data) = data
            && !data.is_empty()
        {
            body["data"] = Value::Object(data);
        }
        self.call(
            &format!("/zones/{zone_id}/dns_records"),
            Method::Post,
            Some(body),
        )
        .await?;
        Ok(())
    }

    /// Delete the record named `name` from the given zone.
    pub async fn delete_record(&self, name: &str, zone: &str) -> Result<()> {
        let zone_id = self.resolve_zone_id(zone).await?;
        let record_id = self.resolve_record_id(name, &zone_id).await?;
        self.call(
            &format!("/zones/{zone_id}/dns_records/{record_id}"),
            Method::Delete,
            None,
        )
        .await?;
        Ok(())
    }
}

/// Id of the first entry of the envelope's `result` sequence.
///
/// `None` covers both an empty result and a structurally unexpected
/// one; callers convert that to the uniform error at the boundary.
fn first_result_id(envelope: &Envelope) -> Option<&str> {
    envelope
        .result
        .as_ref()?
        .as_array()?
        .first()?
        .get("id")?
        .as_str()
}

/// Maximum number of response-body bytes echoed into debug logs.
const LOG_BODY_LIMIT: usize = 256;

fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let mut end = LOG_BODY_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_endpoint() {
        let client = ApiClient::new("a@a.com", "foo");
        assert_eq!(client.email(), "a@a.com");
        assert_eq!(client.auth_key(), "foo");
        assert_eq!(client.endpoint(), CF_API_ENDPOINT);
    }

    #[test]
    fn with_endpoint_overrides_default() {
        let client = ApiClient::with_endpoint("a@a.com", "foo", "http://localhost:8080");
        assert_eq!(client.endpoint(), "http://localhost:8080");
    }

    #[test]
    fn debug_does_not_expose_auth_key() {
        let client = ApiClient::new("a@a.com", "secret_key_12345");
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret_key_12345"));
        assert!(debug.contains("ApiClient"));
    }

    fn envelope_from(value: Value) -> Envelope {
        serde_json::from_value(value).expect("test envelope")
    }

    #[test]
    fn first_result_id_reads_first_entry() {
        let envelope = envelope_from(json!({
            "success": true,
            "result": [
                {"id": "02cffc58027ebabbe29614c6bf6e3716", "name": "twindb.com"},
                {"id": "ignored"},
            ],
        }));
        assert_eq!(
            first_result_id(&envelope),
            Some("02cffc58027ebabbe29614c6bf6e3716")
        );
    }

    #[test]
    fn first_result_id_empty_or_malformed_is_none() {
        // result missing entirely
        assert!(first_result_id(&envelope_from(json!({"success": true}))).is_none());
        // result not an array
        assert!(
            first_result_id(&envelope_from(json!({"success": true, "result": {"id": "x"}})))
                .is_none()
        );
        // empty result
        assert!(first_result_id(&envelope_from(json!({"success": true, "result": []}))).is_none());
        // first entry without id
        assert!(
            first_result_id(&envelope_from(json!({"success": true, "result": [{"name": "x"}]})))
                .is_none()
        );
        // id not a string
        assert!(
            first_result_id(&envelope_from(json!({"success": true, "result": [{"id": 42}]})))
                .is_none()
        );
    }

    #[test]
    fn short_body_logged_unchanged() {
        assert_eq!(truncate_for_log("{}"), "{}");
    }

    #[test]
    fn long_body_truncated_for_log() {
        let body = "a".repeat(LOG_BODY_LIMIT + 100);
        let logged = truncate_for_log(&body);
        assert!(logged.len() < body.len());
        assert!(logged.contains("truncated"));
    }
}
