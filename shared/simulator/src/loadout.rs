use crate::rng::store_seed;
use crate::ship::Ship;
use crate::torpedo_store::Magazine;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the misfire rate of every store.
pub const MISFIRE_RATE_VAR: &str = "IVT_RATE";

pub const GT4500_STORE_CAPACITY: u32 = 10;

#[derive(thiserror::Error, Debug)]
pub enum LoadoutError {
    #[error("failed to read loadout: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid loadout: {0}")]
    Json(#[from] serde_json::Error),

    #[error("misfire rate {0} is outside [0, 1]")]
    InvalidMisfireRate(f64),
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct StoreConfig {
    pub capacity: u32,
    #[serde(default)]
    pub misfire_rate: f64,
}

impl StoreConfig {
    pub fn build(&self, seed: u32) -> Magazine {
        Magazine::new(self.capacity, self.misfire_rate, seed)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: GT4500_STORE_CAPACITY,
            misfire_rate: 0.0,
        }
    }
}

/// Configuration of both torpedo stores of a ship.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct Loadout {
    pub primary: StoreConfig,
    pub secondary: StoreConfig,
}

impl Loadout {
    pub fn gt4500() -> Loadout {
        Loadout::default()
    }

    /// The stock loadout with `IVT_RATE` applied.
    pub fn from_env() -> Loadout {
        Loadout::gt4500().apply_env()
    }

    pub fn load(path: &Path) -> Result<Loadout, LoadoutError> {
        log::info!("Loading loadout from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Loadout::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Loadout, LoadoutError> {
        let loadout: Loadout = serde_json::from_str(json)?;
        loadout.validate()?;
        Ok(loadout)
    }

    pub fn to_json(&self) -> Result<String, LoadoutError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), LoadoutError> {
        for store in [&self.primary, &self.secondary] {
            if !(0.0..=1.0).contains(&store.misfire_rate) {
                return Err(LoadoutError::InvalidMisfireRate(store.misfire_rate));
            }
        }
        Ok(())
    }

    pub fn with_misfire_rate(mut self, misfire_rate: f64) -> Loadout {
        self.primary.misfire_rate = misfire_rate;
        self.secondary.misfire_rate = misfire_rate;
        self
    }

    /// Overrides both misfire rates if `IVT_RATE` is set.
    pub fn apply_env(self) -> Loadout {
        match std::env::var(MISFIRE_RATE_VAR) {
            Ok(value) => self.with_misfire_rate(parse_misfire_rate(&value)),
            Err(_) => self,
        }
    }

    pub fn build(&self, seed: u32) -> Ship<Magazine, Magazine> {
        log::debug!("Building ship with seed {seed}: {:?}", self);
        Ship::new(
            self.primary.build(store_seed(seed, 0)),
            self.secondary.build(store_seed(seed, 1)),
        )
    }
}

/// Parses an `IVT_RATE` value. Anything that is not a probability counts as 0.
pub fn parse_misfire_rate(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(rate) if (0.0..=1.0).contains(&rate) => rate,
        _ => {
            log::warn!("Ignoring invalid {MISFIRE_RATE_VAR} value {value:?}");
            0.0
        }
    }
}
