use clap::Parser;
use reqwest::Url;
use simplelog::LevelFilter;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://car-rest-service-carshop.2.rahtiapp.fi";

/// Browse and edit the cars of a car shop service.
#[derive(Debug, Parser)]
#[command(name = "carshop", version)]
pub struct Args {
    /// Address of the car service.
    #[arg(long, env = "CARSHOP_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    /// Log requests and responses.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    #[must_use]
    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("The base URL {0:?} is not a valid URL: {1}")]
    InvalidBaseUrl(String, url::ParseError),
    #[error("The base URL {0:?} can not have paths joined onto it.")]
    NotABase(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(value: Args) -> Result<Self, Self::Error> {
        let base_url = Url::parse(&value.base_url)
            .map_err(|err| ConfigError::InvalidBaseUrl(value.base_url.clone(), err))?;

        if base_url.cannot_be_a_base() {
            Err(ConfigError::NotABase(value.base_url))?;
        }

        Ok(Config { base_url })
    }
}
