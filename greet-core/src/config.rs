use anyhow::{Result, anyhow};
use std::env;

/// Display name used when the request carries no visitor name.
pub const DEFAULT_VISITOR_NAME: &str = "six-shot";

/// Which address the geolocation lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeoLookup {
    /// Resolve the detected client address.
    #[default]
    ClientAddress,
    /// Resolve the provider's own view of this server (self lookup).
    ServerVantage,
}

impl GeoLookup {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeoLookup::ClientAddress => "client-address",
            GeoLookup::ServerVantage => "server-vantage",
        }
    }
}

impl std::fmt::Display for GeoLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for GeoLookup {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "client-address" => Ok(GeoLookup::ClientAddress),
            "server-vantage" => Ok(GeoLookup::ServerVantage),
            _ => Err(anyhow!(
                "Unknown geolocation lookup mode '{value}'. Supported modes: client-address, server-vantage."
            )),
        }
    }
}

/// How the weather query is keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeatherLookup {
    /// Query by the geolocated latitude/longitude.
    #[default]
    Coordinates,
    /// Query by the geolocated city name.
    City,
}

impl WeatherLookup {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherLookup::Coordinates => "coordinates",
            WeatherLookup::City => "city",
        }
    }
}

impl std::fmt::Display for WeatherLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for WeatherLookup {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "coordinates" => Ok(WeatherLookup::Coordinates),
            "city" => Ok(WeatherLookup::City),
            _ => Err(anyhow!(
                "Unknown weather lookup mode '{value}'. Supported modes: coordinates, city."
            )),
        }
    }
}

/// Process-level configuration, resolved once at startup and passed
/// explicitly into the request-handling path.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the weather provider.
    pub weather_api_key: String,

    /// Display name substituted when no visitor name is supplied.
    pub default_visitor_name: String,

    pub geo_lookup: GeoLookup,
    pub weather_lookup: WeatherLookup,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// `OPENWEATHER_API_KEY` is required; the rest fall back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var("OPENWEATHER_API_KEY").ok(),
            env::var("DEFAULT_VISITOR_NAME").ok(),
            env::var("GEO_LOOKUP").ok(),
            env::var("WEATHER_LOOKUP").ok(),
        )
    }

    fn from_vars(
        weather_api_key: Option<String>,
        default_visitor_name: Option<String>,
        geo_lookup: Option<String>,
        weather_lookup: Option<String>,
    ) -> Result<Self> {
        let weather_api_key = weather_api_key.filter(|key| !key.is_empty()).ok_or_else(|| {
            anyhow!(
                "OPENWEATHER_API_KEY is not set.\n\
                 Hint: export OPENWEATHER_API_KEY=<key> before starting the server."
            )
        })?;

        let default_visitor_name = default_visitor_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_VISITOR_NAME.to_string());

        let geo_lookup = match geo_lookup {
            Some(raw) => GeoLookup::try_from(raw.as_str())?,
            None => GeoLookup::default(),
        };

        let weather_lookup = match weather_lookup {
            Some(raw) => WeatherLookup::try_from(raw.as_str())?,
            None => WeatherLookup::default(),
        };

        Ok(Self { weather_api_key, default_visitor_name, geo_lookup, weather_lookup })
    }
}
