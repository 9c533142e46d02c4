//! Normalization of raw provider search responses.
//!
//! The provider reply is loosely shaped: legs appear under `best_flights` and
//! `other_flights` (grouped, with pricing often attached to the group rather
//! than the leg) or under a flat `flights_results` list, and nearly every
//! field may be absent. All access here goes through `Option` chains so a
//! malformed document degrades to an empty result instead of an error.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use uuid::Uuid;

use crate::model::Flight;

static DOLLAR_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+(\.\d+)?)").unwrap());

/// Travel class segment codes for the deep link, keyed by the provider's
/// group-level class label.
const TRAVEL_CLASSES: &[(&str, &str)] = &[
    ("economy", "e:1"),
    ("premium economy", "e:2"),
    ("business", "e:3"),
    ("first", "e:4"),
];

/// Convert a raw provider document into normalized flights.
///
/// Never fails: a document with no recognizable flight lists (or one that is
/// not an object at all) yields an empty vec.
pub fn adapt_provider_flights(raw: &Value) -> Vec<Flight> {
    if !raw.is_object() {
        return Vec::new();
    }
    collect_legs(raw)
        .into_iter()
        .map(|(leg, group)| adapt_leg(leg, group))
        .collect()
}

/// The lowest known route price, when the provider includes price insights.
pub fn lowest_price(raw: &Value) -> Option<f64> {
    raw.get("price_insights")?.get("lowest_price")?.as_f64()
}

/// Flatten `best_flights` and `other_flights` groups into (leg, owning group)
/// pairs, falling back to the flat `flights_results` list when neither yields
/// a leg.
fn collect_legs(raw: &Value) -> Vec<(&Value, Option<&Value>)> {
    let mut legs = Vec::new();
    for key in ["best_flights", "other_flights"] {
        if let Some(groups) = raw.get(key).and_then(Value::as_array) {
            for group in groups {
                if let Some(flights) = group.get("flights").and_then(Value::as_array) {
                    legs.extend(flights.iter().map(|leg| (leg, Some(group))));
                }
            }
        }
    }
    if legs.is_empty() {
        if let Some(flights) = raw.get("flights_results").and_then(Value::as_array) {
            legs.extend(flights.iter().map(|leg| (leg, None)));
        }
    }
    legs
}

fn adapt_leg(leg: &Value, group: Option<&Value>) -> Flight {
    let departure = leg.get("departure_airport");
    let arrival = leg.get("arrival_airport");
    let airline_obj = leg.get("airline");

    let id = str_of(leg, "id")
        .map(str::to_string)
        .unwrap_or_else(|| format!("flight-{}", Uuid::new_v4()));

    let airline = airline_obj
        .and_then(|a| a.get("name"))
        .and_then(Value::as_str)
        .or_else(|| str_of(leg, "airline_name"))
        .unwrap_or_default()
        .to_string();

    let flight_number = str_of(leg, "flight_number")
        .or_else(|| {
            airline_obj
                .and_then(|a| a.get("flight_number"))
                .and_then(Value::as_str)
        })
        .unwrap_or_default()
        .to_string();

    let departure_time = airport_str(departure, "time");
    let arrival_time = airport_str(arrival, "time");

    // Date portion of the provider's "YYYY-MM-DD HH:MM" display time.
    let date = departure_time
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_string();

    // The deep link requires airport codes; the display-name fallback used
    // for origin/destination below does not apply to it.
    let dep_code = airport_str(departure, "id");
    let arr_code = airport_str(arrival, "id");
    let google_flights_url = build_deep_link(group, &dep_code, &arr_code, &date);

    let booking_token = str_of(leg, "booking_token")
        .or_else(|| {
            group
                .and_then(|g| g.get("booking_token"))
                .and_then(Value::as_str)
        })
        .unwrap_or_default()
        .to_string();

    Flight {
        id,
        airline,
        flight_number,
        origin: airport_code(departure),
        destination: airport_code(arrival),
        departure_time,
        arrival_time,
        duration: resolve_duration(leg),
        price: resolve_price(leg, group),
        stops: leg.get("stops").and_then(Value::as_u64).unwrap_or(0) as u32,
        aircraft: str_of(leg, "aircraft").unwrap_or_default().to_string(),
        date,
        google_flights_url,
        booking_token,
    }
}

fn str_of<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn airport_str(airport: Option<&Value>, key: &str) -> String {
    airport
        .and_then(|a| a.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Airport code with display-name fallback, for the origin/destination
/// fields of the record.
fn airport_code(airport: Option<&Value>) -> String {
    airport
        .and_then(|a| {
            a.get("id")
                .and_then(Value::as_str)
                .or_else(|| a.get("name").and_then(Value::as_str))
        })
        .unwrap_or_default()
        .to_string()
}

fn resolve_duration(leg: &Value) -> String {
    if let Some(duration) = str_of(leg, "duration") {
        return duration.to_string();
    }
    match leg.get("duration_minutes").and_then(Value::as_u64) {
        Some(minutes) => format!("{}h {}m", minutes / 60, minutes % 60),
        None => String::new(),
    }
}

/// Multi-source price resolution. First non-zero source wins; anything
/// unparseable counts as "no price from this source", never an error.
fn resolve_price(leg: &Value, group: Option<&Value>) -> f64 {
    let mut price = match leg.get("price") {
        Some(Value::String(s)) => dollar_token(s).unwrap_or(0.0),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        _ => leg
            .get("price_details")
            .and_then(|d| d.get("total"))
            .and_then(numeric)
            .unwrap_or(0.0),
    };

    if price == 0.0 {
        if let Some(group_price) = group.and_then(|g| g.get("price")) {
            price = match group_price {
                // Group prices show up both as "$123" and as bare "123"
                Value::String(s) => dollar_token(s)
                    .or_else(|| s.parse::<f64>().ok())
                    .unwrap_or(0.0),
                Value::Number(n) => n.as_f64().unwrap_or(0.0),
                _ => 0.0,
            };
        }
    }

    if price == 0.0 {
        if let Some(source_price) = leg.get("source_information").and_then(|s| s.get("price")) {
            price = match source_price {
                Value::String(s) => dollar_token(s).unwrap_or(0.0),
                Value::Number(n) => n.as_f64().unwrap_or(0.0),
                _ => 0.0,
            };
        }
    }

    price.max(0.0)
}

fn dollar_token(text: &str) -> Option<f64> {
    DOLLAR_PRICE
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Compose the provider's calendar deep link. Empty unless origin code,
/// destination code, and date are all known.
fn build_deep_link(group: Option<&Value>, dep_code: &str, arr_code: &str, date: &str) -> String {
    if dep_code.is_empty() || arr_code.is_empty() || date.is_empty() {
        return String::new();
    }

    let mut trip_type = "t:f";
    let mut return_date = String::new();
    if let Some(group) = group {
        if let Some(explicit) = str_of(group, "return_date") {
            trip_type = "t:r";
            return_date = explicit.to_string();
        } else if str_of(group, "type").is_some_and(|t| t.to_lowercase().contains("round")) {
            // Sometimes the trip type is only a label like "Round trip"; the
            // return date then comes from the first return leg, if any.
            trip_type = "t:r";
            return_date = group
                .get("return_flights")
                .and_then(Value::as_array)
                .and_then(|flights| flights.first())
                .and_then(|leg| leg.get("departure_airport"))
                .and_then(|airport| airport.get("time"))
                .and_then(Value::as_str)
                .and_then(|time| time.split(' ').next())
                .unwrap_or_default()
                .to_string();
        }
    }

    let currency = group.and_then(|g| str_of(g, "currency")).unwrap_or("USD");
    let travel_class = group
        .and_then(|g| str_of(g, "travel_class"))
        .and_then(|label| {
            let label = label.to_lowercase();
            TRAVEL_CLASSES
                .iter()
                .find(|(name, _)| *name == label)
                .map(|(_, code)| *code)
        })
        .unwrap_or("e:1");
    let passengers = group
        .and_then(|g| g.get("adults"))
        .and_then(Value::as_u64)
        .filter(|&n| n > 0)
        .map(|n| format!("sd:{n}"))
        .unwrap_or_else(|| "sd:1".to_string());

    let flt = if trip_type == "t:r" && !return_date.is_empty() {
        format!("{dep_code}.{arr_code}.{date}*{arr_code}.{dep_code}.{return_date}")
    } else {
        format!("{dep_code}.{arr_code}.{date}")
    };

    format!(
        "https://www.google.com/flights?hl=en#flt={flt};c:{currency};{travel_class};{passengers};{trip_type}"
    )
}
