use std::env;
use std::time::Duration;

use crate::error::BotError;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

#[derive(Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

// Tokens stay out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoint: String,
    pub retry_period: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// Unset and blank values are both treated as missing, and every missing
    /// name is collected before failing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| present(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(BotError::Configuration { missing });
        }

        let credentials = Credentials {
            practicum_token: present("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: present("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: present("TELEGRAM_CHAT_ID").unwrap_or_default(),
        };

        let endpoint = present("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let retry_secs = present("RETRY_PERIOD_SECS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_RETRY_PERIOD_SECS);

        Ok(Config {
            credentials,
            endpoint,
            retry_period: Duration::from_secs(retry_secs),
        })
    }
}
