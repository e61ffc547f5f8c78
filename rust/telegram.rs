use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::error::BotError;

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Delivery channel for chat notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), BotError>;
}

#[derive(Clone)]
pub struct TelegramNotifier {
    http: reqwest::Client,
    api_url: String,
    token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(http: reqwest::Client, token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            http,
            api_url: TELEGRAM_API_URL.to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
        }
    }

    #[cfg(test)]
    fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.token)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), BotError> {
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let resp = self
            .http
            .post(self.send_message_url())
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|err| BotError::Delivery(err.without_url().to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|err| BotError::Delivery(err.without_url().to_string()))?;

        let parsed: Option<SendMessageResponse> = serde_json::from_str(&body).ok();
        match parsed {
            Some(SendMessageResponse { ok: true, .. }) if status.is_success() => Ok(()),
            Some(SendMessageResponse {
                description: Some(description),
                ..
            }) => Err(BotError::Delivery(format!("{} - {}", status, description))),
            _ => Err(BotError::Delivery(format!("Telegram API error: {}", status))),
        }
    }
}

/// Sends `message` and swallows any failure.
///
/// Delivery problems are logged and never reach the polling loop.
pub async fn send_message(notifier: &dyn Notifier, message: &str) {
    tracing::debug!(text = message, "Sending message to chat");

    match notifier.notify(message).await {
        Ok(()) => tracing::debug!("Message sent"),
        Err(err) => tracing::error!(error = %err, "Failed to send message to chat"),
    }

    tracing::debug!("Message send attempt finished");
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}
