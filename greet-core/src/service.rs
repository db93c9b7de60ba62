//! The request-scoped greeting pipeline: geolocation, then weather, then
//! the composed response. Each call re-fetches fresh data; nothing is
//! cached or retried, and a partial result is never returned.

use anyhow::{Result, anyhow};

use crate::config::{Config, GeoLookup, WeatherLookup};
use crate::greeting::{compose_greeting, effective_name};
use crate::model::{GreetingResponse, WeatherTarget};
use crate::provider::ipapi::IpApiProvider;
use crate::provider::openweather::OpenWeatherProvider;
use crate::provider::{GeoProvider, WeatherProvider};

/// Pipeline knobs resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    pub geo_lookup: GeoLookup,
    pub weather_lookup: WeatherLookup,
    pub default_visitor_name: String,
}

impl ServiceOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            geo_lookup: config.geo_lookup,
            weather_lookup: config.weather_lookup,
            default_visitor_name: config.default_visitor_name.clone(),
        }
    }
}

/// Resolves one greeting per call. Holds no per-request state, so a single
/// instance is shared across concurrent requests.
#[derive(Debug)]
pub struct GreetingService {
    geo: Box<dyn GeoProvider>,
    weather: Box<dyn WeatherProvider>,
    options: ServiceOptions,
}

impl GreetingService {
    pub fn new(
        geo: Box<dyn GeoProvider>,
        weather: Box<dyn WeatherProvider>,
        options: ServiceOptions,
    ) -> Self {
        Self { geo, weather, options }
    }

    /// Construct the service with the concrete ipapi/OpenWeather clients.
    pub fn from_config(config: &Config) -> Result<Self> {
        let geo = Box::new(IpApiProvider::new()?);
        let weather = Box::new(OpenWeatherProvider::new(config.weather_api_key.clone())?);

        Ok(Self::new(geo, weather, ServiceOptions::from_config(config)))
    }

    /// Run the full pipeline for one request.
    pub async fn greet(
        &self,
        visitor_name: Option<&str>,
        client_address: Option<&str>,
    ) -> Result<GreetingResponse> {
        let address = match self.options.geo_lookup {
            GeoLookup::ClientAddress => client_address,
            GeoLookup::ServerVantage => None,
        };

        let location = self.geo.lookup(address).await?;

        let target = match self.options.weather_lookup {
            WeatherLookup::City => WeatherTarget::City(location.city.clone()),
            WeatherLookup::Coordinates => {
                let coords = location.coordinates.ok_or_else(|| {
                    anyhow!("latitude/longitude not found in geolocation response")
                })?;
                WeatherTarget::Coordinates(coords)
            }
        };

        let reading = self.weather.current(&target).await?;

        let name = effective_name(visitor_name, &self.options.default_visitor_name);
        let greeting = compose_greeting(&name, reading.temperature_c, &location.city);

        Ok(GreetingResponse {
            client_ip: location.ip,
            location: location.city,
            greeting,
        })
    }
}
