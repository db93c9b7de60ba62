use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::{Coordinates, GeoLocation};
use crate::provider::{REQUEST_TIMEOUT, truncate_body};

use super::GeoProvider;

const IPAPI_BASE_URL: &str = "https://ipapi.co";

/// Geolocation client backed by ipapi.co.
#[derive(Debug, Clone)]
pub struct IpApiProvider {
    http: Client,
    base_url: String,
}

impl IpApiProvider {
    pub fn new() -> Result<Self> {
        Self::with_base_url(IPAPI_BASE_URL)
    }

    /// Point the client at a different endpoint, e.g. a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for ipapi")?;

        Ok(Self { http, base_url: base_url.into() })
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    ip: String,
    city: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[async_trait]
impl GeoProvider for IpApiProvider {
    async fn lookup(&self, client_ip: Option<&str>) -> Result<GeoLocation> {
        let url = match client_ip {
            Some(ip) => format!("{}/{}/json/", self.base_url, ip),
            None => format!("{}/json/", self.base_url),
        };

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .context("Failed to send request to ipapi")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read ipapi response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "ipapi request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        log::debug!("ipapi response: {body}");

        let parsed: IpApiResponse =
            serde_json::from_str(&body).context("Failed to parse ipapi JSON")?;

        let city = parsed.city.unwrap_or_default();
        if city.is_empty() {
            return Err(anyhow!("city not found in ipapi response"));
        }

        let coordinates = match (parsed.latitude, parsed.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
            _ => None,
        };

        Ok(GeoLocation { ip: parsed.ip, city, coordinates })
    }
}
