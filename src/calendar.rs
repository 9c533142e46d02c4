//! Simulated per-day price calendar for a route.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::Rng;

use crate::config::{
    CALENDAR_WINDOW_DAYS, PRICE_VARIATION_MAX, PRICE_VARIATION_MIN, WEEKEND_MULTIPLIER,
};
use crate::model::{CalendarDay, Flight};

/// Synthesize a per-day price distribution for `origin -> destination` over
/// the 60-day window starting at `today`.
///
/// Prices are simulated, not a real feed: each day draws a uniform multiplier
/// from the variation band and applies a fixed weekend surcharge to the
/// cheapest matching fare. Days are emitted only for routes present in
/// `base_flights`, in ascending date order.
///
/// Repeatability is the caller's choice of `Rng`: the HTTP layer passes
/// `thread_rng()`, tests pass a seeded `StdRng`.
pub fn synthesize_calendar<R: Rng>(
    origin: &str,
    destination: &str,
    base_flights: &[Flight],
    today: NaiveDate,
    rng: &mut R,
) -> Vec<CalendarDay> {
    let route: Vec<&Flight> = base_flights
        .iter()
        .filter(|f| f.origin == origin && f.destination == destination)
        .collect();
    if route.is_empty() {
        return Vec::new();
    }

    let base_price = route.iter().map(|f| f.price).fold(f64::INFINITY, f64::min);

    let mut days = Vec::with_capacity(CALENDAR_WINDOW_DAYS as usize);
    for offset in 0..CALENDAR_WINDOW_DAYS {
        let date = today + Days::new(offset);
        let date_str = date.format("%Y-%m-%d").to_string();
        let weekend = is_weekend(date);

        let variation = rng.gen_range(PRICE_VARIATION_MIN..PRICE_VARIATION_MAX);
        let factor = variation * if weekend { WEEKEND_MULTIPLIER } else { 1.0 };

        // The day's flight variants share the day's multiplier draw
        let flights = route
            .iter()
            .map(|flight| {
                let mut day_flight = (*flight).clone();
                day_flight.id = format!("{}-{}", flight.id, date_str);
                day_flight.date = date_str.clone();
                day_flight.price = (flight.price * factor).round();
                day_flight
            })
            .collect();

        days.push(CalendarDay {
            date: date_str,
            price: (base_price * factor).round() as u32,
            is_weekend: weekend,
            is_today: date == today,
            flights,
        });
    }
    days
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekend_detection() {
        // 2025-07-19 is a Saturday, 2025-07-21 a Monday
        assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 7, 19).unwrap()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 7, 20).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2025, 7, 21).unwrap()));
    }
}
