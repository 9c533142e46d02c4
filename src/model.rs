use serde::{Deserialize, Serialize};

/// One normalized flight leg, in the shape the frontend consumes.
///
/// Field names are camelCase on the wire except `booking_token`, which the
/// consumer passes back verbatim when requesting booking options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub price: f64,
    pub stops: u32,
    pub aircraft: String,
    pub date: String,
    pub google_flights_url: String,
    #[serde(rename = "booking_token")]
    pub booking_token: String,
}

/// Search parameters accepted on the HTTP surface and forwarded to the
/// provider verbatim. Everything is optional; `None` fields are omitted from
/// the outbound request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    /// 1 = round trip, 2 = one-way, 3 = multi-city
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub trip_type: Option<u8>,
    /// 1 = economy, 2 = premium economy, 3 = business, 4 = first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_class: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adults: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infants_in_seat: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infants_on_lap: Option<u32>,
    /// 0 = any, 1 = nonstop only, 2 = one stop or fewer, 3 = two stops or fewer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_search: Option<bool>,
    /// 1 = top flights, 2 = price, 3 = departure, 4 = arrival, 5 = duration, 6 = emissions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<u8>,
}

/// One synthesized day of the price calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: String,
    pub price: u32,
    pub is_weekend: bool,
    pub is_today: bool,
    pub flights: Vec<Flight>,
}

/// One OTA/airline offer returned for a booking token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_request: Option<BookingRequest>,
}

/// Opaque booking continuation: the consumer replays `post_data` as a single
/// form field POSTed to `url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub url: String,
    pub post_data: String,
}

impl BookingRequest {
    /// The form field (name, value) to replay: the continuation string split
    /// on its first `=`.
    pub fn form_field(&self) -> Option<(&str, &str)> {
        self.post_data.split_once('=')
    }
}

/// Airport catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct Airport {
    pub code: &'static str,
    pub name: &'static str,
    pub city: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_serializes_with_camel_case_and_booking_token() {
        let flight = Flight {
            id: "1".to_string(),
            airline: "Delta Airlines".to_string(),
            flight_number: "DL 2847".to_string(),
            origin: "JFK".to_string(),
            destination: "LAX".to_string(),
            departure_time: "2025-07-20 08:30".to_string(),
            arrival_time: "2025-07-20 11:45".to_string(),
            duration: "6h 15m".to_string(),
            price: 285.0,
            stops: 0,
            aircraft: "Boeing 737-800".to_string(),
            date: "2025-07-20".to_string(),
            google_flights_url: String::new(),
            booking_token: "tok".to_string(),
        };

        let json = serde_json::to_string(&flight).expect("should serialize");
        assert!(json.contains("\"flightNumber\":\"DL 2847\""));
        assert!(json.contains("\"departureTime\":\"2025-07-20 08:30\""));
        assert!(json.contains("\"googleFlightsUrl\":\"\""));
        assert!(json.contains("\"booking_token\":\"tok\""));
    }

    #[test]
    fn test_search_query_omits_unset_fields() {
        let query = SearchQuery {
            departure_id: Some("JFK".to_string()),
            arrival_id: Some("LAX".to_string()),
            trip_type: Some(2),
            ..SearchQuery::default()
        };

        let encoded = serde_json::to_value(&query).expect("should serialize");
        assert_eq!(encoded["type"], 2);
        assert!(encoded.get("return_date").is_none());
        assert!(encoded.get("deep_search").is_none());
    }

    #[test]
    fn test_booking_request_splits_on_first_equals() {
        let request = BookingRequest {
            url: "https://www.google.com/travel/clk/f".to_string(),
            post_data: "u=aBc=dEf=".to_string(),
        };
        assert_eq!(request.form_field(), Some(("u", "aBc=dEf=")));
    }

    #[test]
    fn test_booking_request_without_separator_has_no_field() {
        let request = BookingRequest {
            url: "https://example.com".to_string(),
            post_data: "opaque-blob".to_string(),
        };
        assert_eq!(request.form_field(), None);
    }
}
