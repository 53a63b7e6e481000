//! Accepted review locations
//!
//! New reviews must name one of these locations exactly. Location filters on
//! reads also consult this list: an unknown location matches nothing.

/// Every "City, State" string accepted for a new review
pub const VALID_LOCATIONS: [&str; 18] = [
    "Albuquerque, New Mexico",
    "Carlsbad, California",
    "Chula Vista, California",
    "Colorado Springs, Colorado",
    "Denver, Colorado",
    "El Cajon, California",
    "El Paso, Texas",
    "Escondido, California",
    "Fresno, California",
    "La Mesa, California",
    "Las Vegas, Nevada",
    "Los Angeles, California",
    "Oceanside, California",
    "Phoenix, Arizona",
    "Sacramento, California",
    "Salt Lake City, Utah",
    "San Diego, California",
    "Tucson, Arizona",
];

/// Exact, case-sensitive membership check
pub fn is_valid_location(location: &str) -> bool {
    VALID_LOCATIONS.contains(&location)
}
