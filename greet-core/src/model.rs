use serde::{Deserialize, Serialize};

/// Latitude/longitude pair as reported by the geolocation provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Location data resolved for one request.
///
/// `coordinates` is only guaranteed by the provider when looking up an
/// explicit address; callers that need it must check.
#[derive(Debug, Clone)]
pub struct GeoLocation {
    pub ip: String,
    pub city: String,
    pub coordinates: Option<Coordinates>,
}

/// Current conditions fetched from the weather provider.
#[derive(Debug, Clone, Copy)]
pub struct WeatherReading {
    pub temperature_c: f64,
}

/// How the weather query is formed.
#[derive(Debug, Clone)]
pub enum WeatherTarget {
    City(String),
    Coordinates(Coordinates),
}

/// Response body returned to the caller, serialized once per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub client_ip: String,
    pub location: String,
    pub greeting: String,
}
