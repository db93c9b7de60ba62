use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::{WeatherReading, WeatherTarget};
use crate::provider::{REQUEST_TIMEOUT, truncate_body};

use super::WeatherProvider;

const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";

/// Weather client backed by OpenWeatherMap. All queries use metric units.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
    base_url: String,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, OPENWEATHER_BASE_URL)
    }

    /// Point the client at a different endpoint, e.g. a local mock server.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self { api_key, http, base_url: base_url.into() })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, target: &WeatherTarget) -> Result<WeatherReading> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        let mut query: Vec<(&str, String)> = match target {
            WeatherTarget::City(city) => vec![("q", city.clone())],
            WeatherTarget::Coordinates(coords) => vec![
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
            ],
        };
        query.push(("appid", self.api_key.clone()));
        query.push(("units", "metric".to_string()));

        let res = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .context("Failed to send request to OpenWeather")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read OpenWeather response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        log::debug!("OpenWeather response: {body}");

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather JSON")?;

        Ok(WeatherReading { temperature_c: parsed.main.temp })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinates;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn current_by_city_queries_city_name() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "Paris"))
            .and(query_param("appid", "KEY"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "main": { "temp": 18.04 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider =
            OpenWeatherProvider::with_base_url("KEY".to_string(), server.uri()).unwrap();
        let reading =
            provider.current(&WeatherTarget::City("Paris".to_string())).await.unwrap();

        assert_eq!(reading.temperature_c, 18.04);
    }

    #[tokio::test]
    async fn current_by_coordinates_queries_lat_lon() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("lat", "48.85"))
            .and(query_param("lon", "2.35"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "main": { "temp": 11.5 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider =
            OpenWeatherProvider::with_base_url("KEY".to_string(), server.uri()).unwrap();
        let target =
            WeatherTarget::Coordinates(Coordinates { latitude: 48.85, longitude: 2.35 });
        let reading = provider.current(&target).await.unwrap();

        assert_eq!(reading.temperature_c, 11.5);
    }

    #[tokio::test]
    async fn missing_temperature_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "main": { "humidity": 40 }
            })))
            .mount(&server)
            .await;

        let provider =
            OpenWeatherProvider::with_base_url("KEY".to_string(), server.uri()).unwrap();
        let err =
            provider.current(&WeatherTarget::City("Paris".to_string())).await.unwrap_err();

        let msg = format!("{err:#}");
        assert!(msg.contains("Failed to parse OpenWeather JSON"));
        assert!(msg.contains("temp"));
    }

    #[tokio::test]
    async fn upstream_error_status_carries_code_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string("{\"message\":\"Invalid API key\"}"),
            )
            .mount(&server)
            .await;

        let provider =
            OpenWeatherProvider::with_base_url("KEY".to_string(), server.uri()).unwrap();
        let err =
            provider.current(&WeatherTarget::City("Paris".to_string())).await.unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("Invalid API key"));
    }
}
