use crate::model::{GeoLocation, WeatherReading, WeatherTarget};
use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

pub mod ipapi;
pub mod openweather;

/// Timeout applied to every outbound provider call.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves an address to an approximate geographic location.
#[async_trait]
pub trait GeoProvider: Send + Sync + Debug {
    /// Look up `client_ip`, or the provider's own view of this server
    /// when `None`.
    async fn lookup(&self, client_ip: Option<&str>) -> anyhow::Result<GeoLocation>;
}

/// Fetches current weather conditions for a location.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, target: &WeatherTarget) -> anyhow::Result<WeatherReading>;
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so multibyte bodies don't panic the slice.
    let cut = (0..=MAX).rev().find(|i| body.is_char_boundary(*i)).unwrap_or(0);
    format!("{}...", &body[..cut])
}
