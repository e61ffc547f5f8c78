mod api;
mod config;
mod error;
mod logger;
mod models;
mod poller;
mod status;
mod telegram;
#[cfg(test)]
mod test_support;
mod validate;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::api::PracticumClient;
use crate::config::Config;
use crate::poller::PollLoop;
use crate::telegram::TelegramNotifier;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logger::init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(critical = true, error = %err, "Required environment variables are missing");
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let http = reqwest::Client::builder()
        .build()
        .context("Failed to build HTTP client")?;

    let source = PracticumClient::new(
        http.clone(),
        config.endpoint.as_str(),
        config.credentials.practicum_token.as_str(),
    );
    let notifier = TelegramNotifier::new(
        http,
        config.credentials.telegram_token.as_str(),
        config.credentials.telegram_chat_id.as_str(),
    );

    tracing::info!(
        endpoint = %config.endpoint,
        chat_id = %config.credentials.telegram_chat_id,
        "Starting homework status bot"
    );

    PollLoop::new(source, notifier, config.retry_period, Utc::now().timestamp())
        .run()
        .await;

    Ok(())
}
