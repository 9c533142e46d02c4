//! Thin client for the SerpAPI Google Flights engine.
//!
//! One inbound request maps to exactly one outbound call: no retries, no
//! caching, no rate limiting. Failures carry a best-effort message taken from
//! the provider's own `error` field when present, otherwise the transport
//! error, otherwise a fixed fallback string.

use serde_json::Value;
use tracing::{debug, warn};

use crate::adapter;
use crate::config::PROVIDER_ENGINE;
use crate::model::{BookingOption, BookingRequest, Flight, SearchQuery};

const SEARCH_FALLBACK: &str = "Failed to fetch flight data";
const PRICES_FALLBACK: &str = "Failed to fetch flight price data";
const BOOKING_FALLBACK: &str = "Failed to fetch booking options from provider.";

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ProviderError(pub String);

/// One search call's worth of adapted results.
pub struct SearchOutcome {
    pub flights: Vec<Flight>,
    pub lowest_price: Option<f64>,
}

pub struct ProviderClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ProviderClient {
    pub fn new(http: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    /// GET the provider search endpoint and adapt the response into
    /// normalized flights plus the route's lowest known price.
    pub async fn search_flights(&self, query: &SearchQuery) -> Result<SearchOutcome, ProviderError> {
        debug!(
            "Provider search: {} -> {}",
            query.departure_id.as_deref().unwrap_or("?"),
            query.arrival_id.as_deref().unwrap_or("?"),
        );
        let raw = self.fetch(query, SEARCH_FALLBACK).await?;
        Ok(SearchOutcome {
            flights: adapter::adapt_provider_flights(&raw),
            lowest_price: adapter::lowest_price(&raw),
        })
    }

    /// Same call with the currency pinned to USD, for calendar price views.
    pub async fn flight_prices(&self, query: &SearchQuery) -> Result<SearchOutcome, ProviderError> {
        let mut query = query.clone();
        query.currency = Some("USD".to_string());
        let raw = self.fetch(&query, PRICES_FALLBACK).await?;
        Ok(SearchOutcome {
            flights: adapter::adapt_provider_flights(&raw),
            lowest_price: adapter::lowest_price(&raw),
        })
    }

    /// Fetch OTA/airline booking options for a booking token. The provider
    /// requires the original route and date alongside the token.
    pub async fn booking_options(
        &self,
        booking_token: &str,
        departure_id: &str,
        arrival_id: &str,
        outbound_date: &str,
    ) -> Result<Vec<BookingOption>, ProviderError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("engine", PROVIDER_ENGINE),
                ("api_key", self.api_key.as_str()),
                ("booking_token", booking_token),
                ("departure_id", departure_id),
                ("arrival_id", arrival_id),
                ("outbound_date", outbound_date),
                // Booking detail lookups are always one-way
                ("type", "2"),
            ])
            .send()
            .await
            .map_err(|e| transport_error(e, BOOKING_FALLBACK))?;

        let body = read_provider_body(response, BOOKING_FALLBACK).await?;
        let options = body
            .get("booking_options")
            .and_then(Value::as_array)
            .map(|groups| groups.iter().map(adapt_booking_option).collect())
            .unwrap_or_default();
        Ok(options)
    }

    async fn fetch(&self, query: &SearchQuery, fallback: &str) -> Result<Value, ProviderError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("engine", PROVIDER_ENGINE),
                ("api_key", self.api_key.as_str()),
            ])
            .query(query)
            .send()
            .await
            .map_err(|e| transport_error(e, fallback))?;

        read_provider_body(response, fallback).await
    }
}

/// Decode the provider body and surface its error field if set. The provider
/// reports some failures with a 200 body carrying `error`, others with a
/// non-2xx status.
async fn read_provider_body(
    response: reqwest::Response,
    fallback: &str,
) -> Result<Value, ProviderError> {
    let status = response.status();
    let body: Value = response
        .json()
        .await
        .map_err(|e| transport_error(e, fallback))?;

    if let Some(message) = body.get("error").and_then(Value::as_str) {
        warn!("Provider error: {}", message);
        return Err(ProviderError(message.to_string()));
    }
    if !status.is_success() {
        warn!("Provider returned status {} with no error field", status);
        return Err(ProviderError(fallback.to_string()));
    }
    Ok(body)
}

fn transport_error(err: reqwest::Error, fallback: &str) -> ProviderError {
    let message = err.to_string();
    if message.is_empty() {
        ProviderError(fallback.to_string())
    } else {
        ProviderError(message)
    }
}

/// One `booking_options[]` entry; all provider fields are optional, so the
/// mapping never drops an entry outright.
fn adapt_booking_option(group: &Value) -> BookingOption {
    let together = group.get("together");
    BookingOption {
        name: together
            .and_then(|t| t.get("book_with"))
            .and_then(Value::as_str)
            .map(str::to_string),
        price: together.and_then(|t| t.get("price")).and_then(Value::as_f64),
        booking_request: together
            .and_then(|t| t.get("booking_request"))
            .and_then(|br| {
                Some(BookingRequest {
                    url: br.get("url")?.as_str()?.to_string(),
                    post_data: br
                        .get("post_data")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                })
            }),
    }
}
