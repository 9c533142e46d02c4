//! Static reference data: the airport catalog behind the search form and the
//! sample schedule that seeds the price calendar when no live search has run.

use crate::model::{Airport, Flight};

pub const AIRPORTS: &[Airport] = &[
    Airport { code: "ATL", name: "Hartsfield-Jackson Atlanta International", city: "Atlanta, GA" },
    Airport { code: "AUS", name: "Austin-Bergstrom International", city: "Austin, TX" },
    Airport { code: "BNA", name: "Nashville International", city: "Nashville, TN" },
    Airport { code: "BOS", name: "Logan International", city: "Boston, MA" },
    Airport { code: "BWI", name: "Baltimore/Washington International Thurgood Marshall", city: "Baltimore, MD" },
    Airport { code: "CLT", name: "Charlotte Douglas International", city: "Charlotte, NC" },
    Airport { code: "DAL", name: "Dallas Love Field", city: "Dallas, TX" },
    Airport { code: "DCA", name: "Ronald Reagan Washington National", city: "Washington, VA" },
    Airport { code: "DEN", name: "Denver International", city: "Denver, CO" },
    Airport { code: "DFW", name: "Dallas/Fort Worth International", city: "Dallas, TX" },
    Airport { code: "DTW", name: "Detroit Metropolitan Wayne County", city: "Detroit, MI" },
    Airport { code: "EWR", name: "Newark Liberty International", city: "Newark, NJ" },
    Airport { code: "FLL", name: "Fort Lauderdale-Hollywood International", city: "Fort Lauderdale, FL" },
    Airport { code: "HNL", name: "Daniel K. Inouye International", city: "Honolulu, HI" },
    Airport { code: "HOU", name: "William P. Hobby", city: "Houston, TX" },
    Airport { code: "IAD", name: "Washington Dulles International", city: "Washington, VA" },
    Airport { code: "IAH", name: "George Bush Intercontinental", city: "Houston, TX" },
    Airport { code: "IND", name: "Indianapolis International", city: "Indianapolis, IN" },
    Airport { code: "JFK", name: "John F. Kennedy International", city: "New York, NY" },
    Airport { code: "LAS", name: "Harry Reid International", city: "Las Vegas, NV" },
    Airport { code: "LAX", name: "Los Angeles International", city: "Los Angeles, CA" },
    Airport { code: "LGA", name: "LaGuardia", city: "New York, NY" },
    Airport { code: "MCI", name: "Kansas City International", city: "Kansas City, KS" },
    Airport { code: "MCO", name: "Orlando International", city: "Orlando, FL" },
    Airport { code: "MDW", name: "Midway International", city: "Chicago, IL" },
    Airport { code: "MIA", name: "Miami International", city: "Miami, FL" },
    Airport { code: "MSP", name: "Minneapolis-Saint Paul International", city: "Minneapolis, MN" },
    Airport { code: "MSY", name: "Louis Armstrong New Orleans International", city: "New Orleans, LA" },
    Airport { code: "OAK", name: "Oakland International", city: "Oakland, CA" },
    Airport { code: "ORD", name: "O'Hare International", city: "Chicago, IL" },
    Airport { code: "PDX", name: "Portland International", city: "Portland, OR" },
    Airport { code: "PHL", name: "Philadelphia International", city: "Philadelphia, PA" },
    Airport { code: "PHX", name: "Phoenix Sky Harbor International", city: "Phoenix, AZ" },
    Airport { code: "PIT", name: "Pittsburgh International", city: "Pittsburgh, PA" },
    Airport { code: "RDU", name: "Raleigh-Durham International", city: "Raleigh, NC" },
    Airport { code: "SAN", name: "San Diego International", city: "San Diego, CA" },
    Airport { code: "SAT", name: "San Antonio International", city: "San Antonio, TX" },
    Airport { code: "SEA", name: "Seattle-Tacoma International", city: "Seattle, WA" },
    Airport { code: "SFO", name: "San Francisco International", city: "San Francisco, CA" },
    Airport { code: "SJC", name: "Norman Y. Mineta San Jose International", city: "San Jose, CA" },
    Airport { code: "SLC", name: "Salt Lake City International", city: "Salt Lake City, UT" },
    Airport { code: "SMF", name: "Sacramento International", city: "Sacramento, CA" },
    Airport { code: "STL", name: "Lambert-St. Louis International", city: "St. Louis, MO" },
    Airport { code: "TPA", name: "Tampa International", city: "Tampa, FL" },
];

/// Sample schedule used to seed the calendar synthesizer and the alert view.
/// A handful of US domestic routes with plausible fares; all nonstop.
pub fn sample_flights() -> Vec<Flight> {
    vec![
        flight("1", "Delta Airlines", "DL 2847", "JFK", "LAX", "08:30", "11:45", "6h 15m", 285.0, "Boeing 737-800"),
        flight("2", "American Airlines", "AA 1205", "JFK", "LAX", "14:20", "17:30", "6h 10m", 342.0, "Airbus A321"),
        flight("3", "United Airlines", "UA 445", "JFK", "LAX", "19:15", "22:40", "6h 25m", 198.0, "Boeing 757-200"),
        flight("4", "JetBlue Airways", "B6 915", "JFK", "LAX", "12:00", "15:25", "6h 25m", 256.0, "Airbus A320"),
        flight("5", "Southwest Airlines", "WN 2156", "JFK", "ORD", "09:45", "11:30", "2h 45m", 156.0, "Boeing 737-700"),
        flight("6", "Delta Airlines", "DL 1842", "JFK", "ORD", "16:10", "17:55", "2h 45m", 189.0, "Boeing 717-200"),
        flight("7", "American Airlines", "AA 3456", "ORD", "LAX", "07:30", "09:15", "4h 45m", 235.0, "Boeing 737-800"),
        flight("8", "United Airlines", "UA 789", "ORD", "LAX", "13:45", "15:30", "4h 45m", 287.0, "Boeing 767-300"),
        flight("9", "Spirit Airlines", "NK 612", "MIA", "JFK", "06:20", "09:10", "2h 50m", 89.0, "Airbus A320"),
        flight("10", "Delta Airlines", "DL 1123", "MIA", "JFK", "11:40", "14:35", "2h 55m", 178.0, "Boeing 737-900"),
        flight("11", "Alaska Airlines", "AS 234", "SEA", "SFO", "10:15", "12:30", "2h 15m", 145.0, "Boeing 737-800"),
        flight("12", "United Airlines", "UA 567", "SEA", "SFO", "15:30", "17:45", "2h 15m", 192.0, "Airbus A320"),
        flight("13", "Frontier Airlines", "F9 1888", "DEN", "LAS", "08:00", "08:45", "1h 45m", 67.0, "Airbus A320"),
        flight("14", "Southwest Airlines", "WN 3421", "DEN", "LAS", "17:25", "18:10", "1h 45m", 98.0, "Boeing 737-700"),
        flight("15", "Delta Airlines", "DL 2654", "ATL", "PHX", "12:30", "14:15", "3h 45m", 234.0, "Boeing 757-200"),
        flight("16", "American Airlines", "AA 1567", "BOS", "MIA", "09:15", "12:45", "3h 30m", 298.0, "Boeing 737-800"),
        flight("17", "Southwest Airlines", "WN 4521", "BOS", "MIA", "14:30", "18:00", "3h 30m", 245.0, "Boeing 737-700"),
        flight("18", "United Airlines", "UA 892", "DFW", "SLC", "11:20", "12:45", "2h 25m", 189.0, "Airbus A320"),
        flight("19", "Delta Airlines", "DL 3421", "DFW", "SLC", "16:45", "18:10", "2h 25m", 215.0, "Boeing 737-900"),
        flight("20", "JetBlue Airways", "B6 1234", "BOS", "LAX", "07:00", "10:30", "6h 30m", 325.0, "Airbus A321"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn flight(
    id: &str,
    airline: &str,
    number: &str,
    origin: &str,
    destination: &str,
    departure: &str,
    arrival: &str,
    duration: &str,
    price: f64,
    aircraft: &str,
) -> Flight {
    Flight {
        id: id.to_string(),
        airline: airline.to_string(),
        flight_number: number.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        departure_time: departure.to_string(),
        arrival_time: arrival.to_string(),
        duration: duration.to_string(),
        price,
        stops: 0,
        aircraft: aircraft.to_string(),
        date: String::new(),
        google_flights_url: String::new(),
        booking_token: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airport_codes_are_unique() {
        let mut codes: Vec<&str> = AIRPORTS.iter().map(|a| a.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), AIRPORTS.len());
    }

    #[test]
    fn test_sample_flights_have_known_airports() {
        let flights = sample_flights();
        assert!(!flights.is_empty());
        for flight in &flights {
            assert!(AIRPORTS.iter().any(|a| a.code == flight.origin), "{}", flight.origin);
            assert!(AIRPORTS.iter().any(|a| a.code == flight.destination), "{}", flight.destination);
            assert!(flight.price > 0.0);
        }
    }
}
