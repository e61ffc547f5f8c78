use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::BotError;

/// Source of raw homework status answers.
///
/// The answer is returned unvalidated; shape checks belong to
/// `validate::check_response`.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    async fn get_api_answer(&self, from_date: i64) -> Result<Value, BotError>;
}

#[derive(Clone)]
pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    async fn request(&self, from_date: i64) -> Result<Value, BotError> {
        let resp = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        ensure_ok(resp.status())?;

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn get_api_answer(&self, from_date: i64) -> Result<Value, BotError> {
        tracing::debug!(from_date, endpoint = %self.endpoint, "Requesting homework statuses");
        let result = self.request(from_date).await;
        match &result {
            Ok(_) => {}
            Err(err @ BotError::EndpointUnavailable { .. }) => {
                tracing::error!(error = %err, from_date, "Review API endpoint unavailable");
            }
            Err(err) => {
                tracing::error!(error = %err, from_date, "Request to review API failed");
            }
        }
        result
    }
}

/// Only a plain 200 counts as an answer; redirects and 2xx variants do not.
fn ensure_ok(status: StatusCode) -> Result<(), BotError> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(BotError::EndpointUnavailable {
            status: status.as_u16(),
        })
    }
}
