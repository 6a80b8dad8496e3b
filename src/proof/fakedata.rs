//! Embedded fake-data tables and sampling helpers.
//!
//! The proof producers need plausible names, addresses, and coordinates.
//! Everything is sampled locally from small embedded tables; nothing here
//! is real data.

use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "James", "Maria", "Robert", "Linda", "Michael", "Patricia", "David",
    "Jennifer", "Daniel", "Susan", "Carlos", "Amara", "Wei", "Fatima",
    "Oliver", "Priya", "Lucas", "Elena", "Samuel", "Ingrid",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Garcia", "Miller", "Davis", "Martinez", "Lopez",
    "Wilson", "Anderson", "Thomas", "Nguyen", "Kim", "Patel", "Okafor",
    "Schmidt", "Rossi", "Tanaka", "Kowalski", "Haddad", "Eriksson",
];

const STREET_NAMES: &[&str] = &[
    "Maple Street", "Oak Avenue", "Cedar Lane", "Elm Drive", "Pine Court",
    "Willow Way", "Birch Boulevard", "Chestnut Road", "Juniper Terrace",
    "Sycamore Place",
];

const CITIES: &[&str] = &[
    "Springfield", "Riverton", "Fairview", "Kingsport", "Lakewood",
    "Greenville", "Bristol", "Clayton", "Madison", "Ashford",
];

const STATES: &[&str] = &[
    "CA", "NY", "TX", "IL", "WA", "OH", "GA", "CO", "MI", "OR",
];

/// Samples a full name, e.g. "Maria Nguyen".
pub fn full_name(rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{} {}", first, last)
}

/// Samples a street address with city, state, and ZIP.
pub fn street_address(rng: &mut impl Rng) -> String {
    let number = rng.gen_range(1..=9999);
    let street = STREET_NAMES[rng.gen_range(0..STREET_NAMES.len())];
    let city = CITIES[rng.gen_range(0..CITIES.len())];
    let state = STATES[rng.gen_range(0..STATES.len())];
    let zip = rng.gen_range(10000..=99999);
    format!("{} {}, {}, {} {}", number, street, city, state, zip)
}

/// Samples a latitude in [-90, 90], six decimal places.
pub fn latitude(rng: &mut impl Rng) -> f64 {
    round6(rng.gen_range(-90.0..=90.0))
}

/// Samples a longitude in [-180, 180], six decimal places.
pub fn longitude(rng: &mut impl Rng) -> f64 {
    round6(rng.gen_range(-180.0..=180.0))
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_name_has_two_parts() {
        let mut rng = StdRng::seed_from_u64(7);
        let name = full_name(&mut rng);
        assert_eq!(name.split_whitespace().count(), 2);
    }

    #[test]
    fn test_street_address_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let address = street_address(&mut rng);
        // "123 Some Street, City, ST 12345"
        assert_eq!(address.matches(", ").count(), 2);
        let zip = address.rsplit(' ').next().unwrap();
        assert_eq!(zip.len(), 5);
        assert!(zip.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_coordinates_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let lat = latitude(&mut rng);
            let lon = longitude(&mut rng);
            assert!((-90.0..=90.0).contains(&lat));
            assert!((-180.0..=180.0).contains(&lon));
        }
    }

    #[test]
    fn test_seeded_sampling_is_deterministic() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(1);
        assert_eq!(full_name(&mut a), full_name(&mut b));
        assert_eq!(street_address(&mut a), street_address(&mut b));
    }
}
