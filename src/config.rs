use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use url::Url;

use crate::constants::{
    BOOK_ROOM_PATH, REQUEST_TIMEOUT_MS, SEARCH_AVAILABILITY_PATH, TOAST_TIMER_MS,
};
use crate::error::ConfigError;

pub const BIND_ADDR_VAR: &str = "ROOMS_BIND_ADDR";
pub const PORT_VAR: &str = "ROOMS_PORT";
pub const BASE_URL_VAR: &str = "ROOMS_BASE_URL";
pub const SEARCH_PATH_VAR: &str = "ROOMS_SEARCH_PATH";
pub const BOOKING_PATH_VAR: &str = "ROOMS_BOOKING_PATH";
pub const REQUEST_TIMEOUT_VAR: &str = "ROOMS_REQUEST_TIMEOUT_MS";
pub const TOAST_TIMER_VAR: &str = "ROOMS_TOAST_TIMER_MS";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub search_path: String,
    pub booking_path: String,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotifierConfig {
    /// How long a toast stays up while the pointer is not over it.
    pub toast_timer: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub client: ClientConfig,
    pub notifier: NotifierConfig,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        NotifierConfig {
            toast_timer: Duration::from_millis(TOAST_TIMER_MS),
        }
    }
}

impl ClientConfig {
    /// Client settings pointing at `base_url` with every other field defaulted.
    pub fn for_base_url(base_url: Url) -> Self {
        ClientConfig {
            base_url,
            search_path: SEARCH_AVAILABILITY_PATH.to_string(),
            booking_path: BOOK_ROOM_PATH.to_string(),
            request_timeout: Duration::from_millis(REQUEST_TIMEOUT_MS),
        }
    }

    pub fn search_endpoint(&self) -> Result<Url, url::ParseError> {
        self.base_url.join(&self.search_path)
    }
}

impl AppConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads an env file into the process environment, then reads settings
    /// from there. Variables that are already set win over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        dotenv::from_path(path.as_ref())?;
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = text_or(&lookup, BIND_ADDR_VAR, "0.0.0.0");
        let port = parse_number(&lookup, PORT_VAR, 8080u16)?;

        let raw_url = text_or(&lookup, BASE_URL_VAR, &format!("http://127.0.0.1:{port}"));
        let base_url = Url::parse(&raw_url).map_err(|source| ConfigError::InvalidUrl {
            name: BASE_URL_VAR,
            source,
        })?;

        let search_path = text_or(&lookup, SEARCH_PATH_VAR, SEARCH_AVAILABILITY_PATH);
        let booking_path = text_or(&lookup, BOOKING_PATH_VAR, BOOK_ROOM_PATH);
        let request_timeout = parse_number(&lookup, REQUEST_TIMEOUT_VAR, REQUEST_TIMEOUT_MS)?;
        let toast_timer = parse_number(&lookup, TOAST_TIMER_VAR, TOAST_TIMER_MS)?;

        Ok(AppConfig {
            server: ServerConfig { bind_addr, port },
            client: ClientConfig {
                base_url,
                search_path,
                booking_path,
                request_timeout: Duration::from_millis(request_timeout),
            },
            notifier: NotifierConfig {
                toast_timer: Duration::from_millis(toast_timer),
            },
        })
    }
}

fn text_or<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).unwrap_or_else(|| default.to_string())
}

fn parse_number<F, N>(lookup: &F, name: &'static str, default: N) -> Result<N, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    N: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}
