use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

pub const MIN_FLOORS: u8 = 2;
pub const MAX_FLOORS: u8 = 10;
pub const MIN_ELEVATORS: u8 = 1;
pub const MAX_ELEVATORS: u8 = 10;
pub const MIN_FLOOR_TRAVEL_TIME: f64 = 0.1;

pub const DEFAULT_FLOORS: u8 = 6;
pub const DEFAULT_ELEVATORS: u8 = 5;
pub const DEFAULT_FLOOR_TRAVEL_TIME: f64 = 2.0;

/// Configuration as a user writes it. Counts may be any integer, they are
/// clamped on the way into `Config`.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigFile {
    pub total_floors: i64,
    pub total_elevators: i64,
    pub floor_travel_time: f64,
}

impl Default for ConfigFile {
    fn default() -> Self {
        ConfigFile {
            total_floors: DEFAULT_FLOORS as i64,
            total_elevators: DEFAULT_ELEVATORS as i64,
            floor_travel_time: DEFAULT_FLOOR_TRAVEL_TIME,
        }
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        Config::clamped(file.total_floors, file.total_elevators, file.floor_travel_time)
    }
}

fn clamp_count(value: i64, min: u8, max: u8) -> u8 {
    value.clamp(min as i64, max as i64) as u8
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase", from = "ConfigFile")]
pub struct Config {
    pub total_floors: u8,
    pub total_elevators: u8,
    /// Seconds to traverse one floor. Doubles as the motion tick period.
    pub floor_travel_time: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            total_floors: DEFAULT_FLOORS,
            total_elevators: DEFAULT_ELEVATORS,
            floor_travel_time: DEFAULT_FLOOR_TRAVEL_TIME,
        }
    }
}

impl Config {
    pub fn new(total_floors: u8, total_elevators: u8, floor_travel_time: f64) -> Self {
        Config::clamped(total_floors.into(), total_elevators.into(), floor_travel_time)
    }

    /// Builds a configuration from values of any size, clamping them into range.
    pub fn clamped(total_floors: i64, total_elevators: i64, floor_travel_time: f64) -> Self {
        Config {
            total_floors: clamp_count(total_floors, MIN_FLOORS, MAX_FLOORS),
            total_elevators: clamp_count(total_elevators, MIN_ELEVATORS, MAX_ELEVATORS),
            floor_travel_time,
        }
        .validated()
    }

    /// Clamps every field into its valid range. Nothing is ever rejected.
    pub fn validated(self) -> Self {
        let floor_travel_time = if self.floor_travel_time.is_finite() {
            self.floor_travel_time.max(MIN_FLOOR_TRAVEL_TIME)
        } else {
            DEFAULT_FLOOR_TRAVEL_TIME
        };
        Config {
            total_floors: self.total_floors.clamp(MIN_FLOORS, MAX_FLOORS),
            total_elevators: self.total_elevators.clamp(MIN_ELEVATORS, MAX_ELEVATORS),
            floor_travel_time,
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis((self.floor_travel_time * 1000.0).round() as u64)
    }

    /// True if going from `self` to `other` invalidates the elevators currently in service.
    pub fn requires_reset(&self, other: &Config) -> bool {
        self.total_floors != other.total_floors || self.total_elevators != other.total_elevators
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
