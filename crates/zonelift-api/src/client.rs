// Hand-crafted async HTTP client for the Netlify DNS API (v1).
//
// Base path: /api/v1/
// Auth: Authorization: Bearer header

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::types::{DnsRecord, DnsZone};

/// Production endpoint for the hosted API.
pub const DEFAULT_API_URL: &str = "https://api.netlify.com/api/v1/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ── Error response shape ─────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the provider's DNS endpoints.
///
/// Authenticates with a bearer token injected as a default header on every
/// request, so callers only deal in zone and record payloads.
pub struct DnsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DnsClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client against the production API.
    pub fn new(token: &secrecy::SecretString) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_API_URL, token)
    }

    /// Build a client against an explicit base URL.
    ///
    /// Injects `Authorization: Bearer <token>` as a default header; the
    /// header value is marked sensitive so it never appears in logs.
    pub fn with_base_url(base_url: &str, token: &secrecy::SecretString) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|e| Error::Authentication {
                message: format!("invalid token header value: {e}"),
            })?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Parse the base URL, guaranteeing a trailing slash so joins work.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"dns_zones"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/`, so joining relative paths works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── Request / response plumbing ──────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::InvalidToken;
        }

        let raw = resp.text().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            Error::Api {
                status: status.as_u16(),
                message: err.message.unwrap_or_else(|| status.to_string()),
            }
        } else {
            Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
            }
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// List every DNS zone on the account.
    pub async fn list_zones(&self) -> Result<Vec<DnsZone>, Error> {
        self.get("dns_zones").await
    }

    /// List every DNS record in a zone.
    pub async fn list_records(&self, zone_id: &str) -> Result<Vec<DnsRecord>, Error> {
        self.get(&format!("dns_zones/{zone_id}/dns_records")).await
    }
}
