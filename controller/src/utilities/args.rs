use std::env;

use fleet::Config;
use tracing::{info, warn};

const CONFIG_PATH: &str = "config.json";
const FALLBACK_CONFIG_PATH: &str = "_config.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub floors: Option<i64>,
    pub elevators: Option<i64>,
    pub travel_time: Option<f64>,
    pub display: bool,
}

impl Default for Args {
    fn default() -> Self {
        Args { floors: None, elevators: None, travel_time: None, display: true }
    }
}

impl Args {
    /// Command-line values win over the ones from the configuration file.
    pub fn apply(&self, config: Config) -> Config {
        Config::clamped(
            self.floors.unwrap_or(config.total_floors.into()),
            self.elevators.unwrap_or(config.total_elevators.into()),
            self.travel_time.unwrap_or(config.floor_travel_time),
        )
    }
}

pub fn read_config() -> Config {
    match Config::load(CONFIG_PATH) {
        Ok(config) => {
            info!(path = CONFIG_PATH, "configuration loaded");
            return config;
        },
        Err(e) => warn!(path = CONFIG_PATH, error = %e, "no usable configuration file"),
    }
    match Config::load(FALLBACK_CONFIG_PATH) {
        Ok(config) => {
            info!(path = FALLBACK_CONFIG_PATH, "using default configuration file");
            config
        },
        Err(e) => {
            warn!(path = FALLBACK_CONFIG_PATH, error = %e, "using built-in default settings");
            Config::default()
        },
    }
}

pub fn parse_env_args() -> Args {
    parse_args(env::args().skip(1))
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Args {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-display" => parsed.display = false,
            "--floors" | "--elevators" | "--travel-time" => {
                let value = match args.next() {
                    Some(value) => value,
                    None => {
                        warn!("{} is missing a value, skipping...", arg);
                        continue;
                    },
                };
                match arg.as_str() {
                    "--floors" => parsed.floors = parse_or_skip(&arg, &value).or(parsed.floors),
                    "--elevators" => parsed.elevators = parse_or_skip(&arg, &value).or(parsed.elevators),
                    _ => parsed.travel_time = parse_or_skip(&arg, &value).or(parsed.travel_time),
                }
            },
            _ => warn!("illegal argument {}, skipping...", arg),
        }
    }
    parsed
}

fn parse_or_skip<T: std::str::FromStr>(arg: &str, value: &str) -> Option<T> {
    match value.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("{} {} is not a number, skipping...", arg, value);
            None
        },
    }
}
