//! Server configuration, read from the environment with logged defaults.

use std::path::PathBuf;
use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub catalog_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("MENU_RECS_PORT", "8080"),
            catalog_path: PathBuf::from(try_load::<String>(
                "MENU_RECS_CATALOG",
                "data/platillos.json",
            )),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
