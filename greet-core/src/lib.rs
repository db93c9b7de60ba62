//! Core library for the greeting service.
//!
//! This crate defines:
//! - Configuration handling (API key, default display name, lookup modes)
//! - Clients for the geolocation and weather providers
//! - The request-scoped greeting pipeline and shared domain models
//!
//! It is used by `greet-server`, but can also be reused by other binaries
//! or services.

pub mod config;
pub mod greeting;
pub mod model;
pub mod provider;
pub mod service;

pub use config::{Config, GeoLookup, WeatherLookup};
pub use model::{Coordinates, GeoLocation, GreetingResponse, WeatherReading, WeatherTarget};
pub use provider::{GeoProvider, WeatherProvider};
pub use service::{GreetingService, ServiceOptions};
