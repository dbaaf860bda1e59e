//! Location suggestion providers.
//!
//! Two implementations behind one trait: a live Google Places client and the
//! static catalog matcher. Selection happens once at startup from the
//! environment. The live client degrades to the static matcher on any
//! failure or timeout; callers always get a usable suggestion list and never
//! see a provider error.

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use crate::catalog::PLACES;
use crate::models::{LatLng, LocationSuggestion};
use crate::suggest::Suggester;

const PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);
const AUTOCOMPLETE_LIMIT: usize = 8;

pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn autocomplete(&self, input: &str) -> Vec<LocationSuggestion>;
    async fn place_details(&self, place_id: &str) -> Option<LocationSuggestion>;
    fn name(&self) -> &str;
}

/// Select a provider from the environment. A missing or blank credential is
/// a normal development configuration, not an error: the static catalog
/// provider is used and the choice is logged once.
pub fn provider_from_env(matcher: Suggester) -> Box<dyn LocationProvider> {
    match env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => match GooglePlaces::new(key, matcher) {
            Ok(provider) => {
                info!(provider = provider.name(), "location provider selected");
                Box::new(provider)
            }
            Err(err) => {
                warn!(error = %err, "failed to build live location provider, using static catalog");
                Box::new(StaticLocations::new(Suggester::new()))
            }
        },
        _ => {
            info!("no geocoding credential configured, using static location catalog");
            Box::new(StaticLocations::new(matcher))
        }
    }
}

// --- Static catalog provider ---

pub struct StaticLocations {
    matcher: Suggester,
}

impl StaticLocations {
    pub fn new(matcher: Suggester) -> Self {
        Self { matcher }
    }
}

#[async_trait]
impl LocationProvider for StaticLocations {
    async fn autocomplete(&self, input: &str) -> Vec<LocationSuggestion> {
        self.matcher.locations(input).await
    }

    async fn place_details(&self, place_id: &str) -> Option<LocationSuggestion> {
        PLACES.iter().find(|p| p.place_id == place_id).map(Into::into)
    }

    fn name(&self) -> &str {
        "static-catalog"
    }
}

// --- Google Places provider ---

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    place_id: String,
    description: String,
    structured_formatting: Option<StructuredFormatting>,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct StructuredFormatting {
    main_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    result: Option<PlaceDetails>,
}

#[derive(Debug, Deserialize)]
struct PlaceDetails {
    place_id: String,
    formatted_address: String,
    #[serde(default)]
    types: Vec<String>,
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

pub struct GooglePlaces {
    api_key: String,
    client: reqwest::Client,
    fallback: StaticLocations,
}

impl GooglePlaces {
    pub fn new(api_key: String, matcher: Suggester) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for Places API")?;
        Ok(Self {
            api_key,
            client,
            fallback: StaticLocations::new(matcher),
        })
    }

    async fn fetch_autocomplete(&self, input: &str) -> Result<Vec<LocationSuggestion>> {
        let url = format!("{}/autocomplete/json", PLACES_BASE_URL);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("input", input),
                ("key", self.api_key.as_str()),
                ("types", "geocode"),
            ])
            .send()
            .await
            .context("Failed to send Places autocomplete request")?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Places autocomplete request failed with status {}",
                response.status()
            ));
        }

        let body: AutocompleteResponse = response
            .json()
            .await
            .context("Failed to parse Places autocomplete response")?;

        Ok(body
            .predictions
            .into_iter()
            .take(AUTOCOMPLETE_LIMIT)
            .map(|p| {
                let formatted_address = p
                    .structured_formatting
                    .and_then(|f| f.main_text)
                    .unwrap_or_else(|| p.description.clone());
                LocationSuggestion {
                    place_id: p.place_id,
                    description: p.description,
                    formatted_address,
                    types: p.types,
                    geometry: None,
                }
            })
            .collect())
    }

    async fn fetch_details(&self, place_id: &str) -> Result<Option<LocationSuggestion>> {
        let url = format!("{}/details/json", PLACES_BASE_URL);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("place_id", place_id),
                ("key", self.api_key.as_str()),
                ("fields", "place_id,formatted_address,geometry,types"),
            ])
            .send()
            .await
            .context("Failed to send Places details request")?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Places details request failed with status {}",
                response.status()
            ));
        }

        let body: DetailsResponse = response
            .json()
            .await
            .context("Failed to parse Places details response")?;

        Ok(body.result.map(|r| LocationSuggestion {
            place_id: r.place_id,
            description: r.formatted_address.clone(),
            formatted_address: r.formatted_address,
            types: r.types,
            geometry: r.geometry.map(|g| g.location),
        }))
    }
}

#[async_trait]
impl LocationProvider for GooglePlaces {
    async fn autocomplete(&self, input: &str) -> Vec<LocationSuggestion> {
        match self.fetch_autocomplete(input).await {
            Ok(suggestions) => suggestions,
            Err(err) => {
                warn!(error = %err, "autocomplete fell back to static catalog");
                self.fallback.autocomplete(input).await
            }
        }
    }

    async fn place_details(&self, place_id: &str) -> Option<LocationSuggestion> {
        match self.fetch_details(place_id).await {
            Ok(details) => details,
            Err(err) => {
                warn!(error = %err, "place details fell back to static catalog");
                self.fallback.place_details(place_id).await
            }
        }
    }

    fn name(&self) -> &str {
        "google-places"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_matches_catalog_contract() {
        let provider = StaticLocations::new(Suggester::instant());
        let all = provider.autocomplete("").await;
        assert_eq!(all.len(), 10);

        let berlin = provider.autocomplete("berlin").await;
        assert_eq!(berlin.len(), 1);
        assert_eq!(berlin[0].description, "Berlin, Germany");
    }

    #[tokio::test]
    async fn test_static_place_details_lookup() {
        let provider = StaticLocations::new(Suggester::instant());
        let place = provider.place_details("17").await.expect("known place id");
        assert_eq!(place.description, "London, UK");
        assert!(place.geometry.is_some());

        assert!(provider.place_details("no-such-id").await.is_none());
    }

    #[tokio::test]
    async fn test_missing_credential_selects_static_provider() {
        let original = env::var(API_KEY_ENV).ok();
        unsafe {
            env::remove_var(API_KEY_ENV);
        }

        let provider = provider_from_env(Suggester::instant());

        if let Some(val) = original {
            unsafe {
                env::set_var(API_KEY_ENV, val);
            }
        }

        assert_eq!(provider.name(), "static-catalog");
    }
}
