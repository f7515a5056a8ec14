use crate::catalog::{PagePolicy, DEFAULT_PAGE_SIZE};
use crate::store::FirestoreConfig;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const DEFAULT_COLLECTION: &str = "movies";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Application configuration
/// In debug builds: loads a .env file first, then reads the environment
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub firestore: FirestoreConfig,
    pub page_policy: PagePolicy,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            match dotenvy::dotenv() {
                Ok(path) => info!("Config: loaded {}", path.display()),
                Err(_) => info!("Config: no .env file found, using process environment"),
            }
        }

        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let project_id =
            get("MARQUEE_FIRESTORE_PROJECT").ok_or(ConfigError::Missing("MARQUEE_FIRESTORE_PROJECT"))?;

        let page_size = match get("MARQUEE_PAGE_SIZE") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "MARQUEE_PAGE_SIZE",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_PAGE_SIZE,
        };

        let clamp_on_filter_change = match get("MARQUEE_CLAMP_ON_FILTER_CHANGE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                var: "MARQUEE_CLAMP_ON_FILTER_CHANGE",
                value: raw,
            })?,
            None => false,
        };

        let timeout_secs = match get("MARQUEE_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                var: "MARQUEE_REQUEST_TIMEOUT_SECS",
                value: raw,
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let firestore = FirestoreConfig {
            base_url: get("MARQUEE_FIRESTORE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            project_id,
            collection: get("MARQUEE_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            api_key: get("MARQUEE_FIRESTORE_API_KEY"),
            request_timeout: Duration::from_secs(timeout_secs),
        };

        info!(
            "Config: project {}, collection {}, {} movies per page",
            firestore.project_id, firestore.collection, page_size
        );

        Ok(Config {
            firestore,
            page_policy: PagePolicy {
                page_size,
                clamp_on_filter_change,
            },
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
