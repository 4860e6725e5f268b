//! Weather widget state with a deterministic simulated refresh.

use serde::{Deserialize, Serialize};
use wos_store::{keys, BlobStore, BlobStoreExt};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
}

const CONDITIONS: [WeatherCondition; 5] = [
    WeatherCondition::Sunny,
    WeatherCondition::Cloudy,
    WeatherCondition::Rainy,
    WeatherCondition::Snowy,
    WeatherCondition::Stormy,
];

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    pub location: String,
    /// Degrees Fahrenheit
    pub temperature: i32,
    pub condition: WeatherCondition,
    /// Percent
    pub humidity: i32,
    /// Miles per hour
    pub wind_speed: i32,
}

impl Default for Weather {
    fn default() -> Self {
        Self {
            location: "San Francisco".to_string(),
            temperature: 68,
            condition: WeatherCondition::Sunny,
            humidity: 65,
            wind_speed: 8,
        }
    }
}

impl Weather {
    pub fn load<S: BlobStore + ?Sized>(store: &S, user_id: &str) -> Self {
        store.get_json(&keys::weather(user_id)).unwrap_or_default()
    }

    pub fn save<S: BlobStore + ?Sized>(&self, store: &S, user_id: &str) {
        store.set_json(&keys::weather(user_id), self);
    }

    /// Regenerate simulated conditions for a location. The seed fully
    /// determines the result: temperature 40-89°F, humidity 30-79%,
    /// wind 2-16 mph.
    pub fn refresh(&mut self, location: &str, seed: u64) {
        let mut rng = Lcg::new(seed);
        self.location = location.trim().to_string();
        self.condition = CONDITIONS[rng.next_below(CONDITIONS.len() as u32) as usize];
        self.temperature = 40 + rng.next_below(50) as i32;
        self.humidity = 30 + rng.next_below(50) as i32;
        self.wind_speed = 2 + rng.next_below(15) as i32;
    }
}

/// Minimal linear congruential generator (Numerical Recipes constants).
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self {
            // avoid the zero fixed point of an all-zero seed
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        (self.next() >> 33) as u32 % bound
    }
}
