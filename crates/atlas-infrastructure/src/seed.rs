//! Deterministic mock-data generation for bootstrapping the directory.
//!
//! The same `rng_seed` always yields the same names, addresses and ids, so a
//! seeded directory is reproducible across runs. Only `created_at` moves with
//! the wall clock (it is "some time in the last 30 days").

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Builder;

use atlas_core::config::SeedConfig;
use atlas_core::profile::{Address, Contact, Coordinates, Profile, ProfileFormData};

const FIRST_NAMES: &[&str] = &[
    "Ana", "Ben", "Chloe", "Diego", "Elena", "Farid", "Grace", "Hiro", "Imani", "Jonas", "Keiko",
    "Liam", "Maya", "Noah", "Olivia", "Priya", "Quinn", "Rosa", "Sam", "Tariq",
];

const LAST_NAMES: &[&str] = &[
    "Alvarez", "Brooks", "Chen", "Dubois", "Evans", "Fischer", "Garcia", "Hughes", "Ito",
    "Johnson", "Kowalski", "Lopez", "Morgan", "Nguyen", "Okafor", "Patel",
];

const CITIES: &[(&str, &str)] = &[
    ("Austin", "Texas"),
    ("Boston", "Massachusetts"),
    ("Denver", "Colorado"),
    ("Portland", "Oregon"),
    ("Savannah", "Georgia"),
    ("Madison", "Wisconsin"),
    ("Santa Fe", "New Mexico"),
    ("Burlington", "Vermont"),
    ("Boise", "Idaho"),
    ("Asheville", "North Carolina"),
    ("Tucson", "Arizona"),
    ("Duluth", "Minnesota"),
];

const STREETS: &[&str] = &[
    "Maple", "Oak", "Cedar", "Lakeview", "Hillcrest", "Sunset", "River", "Park", "Elm", "Pine",
];

const STREET_SUFFIXES: &[&str] = &["St", "Ave", "Blvd", "Rd", "Ln", "Way"];

const INTERESTS: &[&str] = &[
    "hiking", "photography", "chess", "cooking", "cycling", "painting", "gardening", "jazz",
    "astronomy", "climbing", "pottery", "sailing", "birdwatching", "woodworking", "running",
];

const ROLES: &[&str] = &[
    "designer", "engineer", "teacher", "nurse", "writer", "architect", "chef", "musician",
    "researcher", "carpenter",
];

const LAT_RANGE: std::ops::RangeInclusive<f64> = 25.0..=49.0;
const LNG_RANGE: std::ops::RangeInclusive<f64> = -125.0..=-70.0;
const RECENT_DAYS: i64 = 30;

/// Generates `config.count` profiles from `config.rng_seed`.
pub fn generate_profiles(config: &SeedConfig) -> Vec<Profile> {
    let mut rng = StdRng::seed_from_u64(config.rng_seed);
    let now = Utc::now();

    let profiles: Vec<Profile> = (0..config.count)
        .map(|_| {
            let id = Builder::from_random_bytes(rng.r#gen()).into_uuid().to_string();
            let age = Duration::seconds(rng.gen_range(0..RECENT_DAYS * 24 * 60 * 60));
            let form = generate_form(&mut rng, &id);
            Profile::with_identity(id, now - age, form)
        })
        .collect();

    tracing::debug!(count = profiles.len(), seed = config.rng_seed, "Generated seed profiles");
    profiles
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn generate_form(rng: &mut StdRng, id: &str) -> ProfileFormData {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let (city, state) = CITIES.choose(rng).copied().unwrap_or(("Austin", "Texas"));
    let role = pick(rng, ROLES);

    let interest_count = rng.gen_range(1..=5);
    let interests = (0..interest_count)
        .map(|_| pick(rng, INTERESTS).to_string())
        .collect();

    // Round to five decimals, the precision the admin form accepts.
    let lat = (rng.gen_range(LAT_RANGE) * 1e5).round() / 1e5;
    let lng = (rng.gen_range(LNG_RANGE) * 1e5).round() / 1e5;

    ProfileFormData {
        name: format!("{first} {last}"),
        image: format!("https://i.pravatar.cc/200?u={id}"),
        description: format!("{role} based in {city}"),
        address: Address {
            street: format!(
                "{} {} {}",
                rng.gen_range(1..=9999),
                pick(rng, STREETS),
                pick(rng, STREET_SUFFIXES)
            ),
            city: city.to_string(),
            state: state.to_string(),
            country: "United States".to_string(),
            zip_code: format!("{:05}", rng.gen_range(1000..=99999)),
            coordinates: Coordinates::new(lat, lng),
        },
        contact: Contact {
            email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            phone: format!(
                "({:03}) 555-{:04}",
                rng.gen_range(201..=989),
                rng.gen_range(0..=9999)
            ),
        },
        interests,
    }
}
