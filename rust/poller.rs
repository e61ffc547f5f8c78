use std::time::Duration;

use tracing::Instrument;

use crate::api::HomeworkSource;
use crate::error::BotError;
use crate::models::HomeworkRecord;
use crate::status::parse_status;
use crate::telegram::{send_message, Notifier};
use crate::validate::check_response;

/// Polling state that lives for the whole process.
///
/// `cursor` is the `from_date` of the next request and only moves forward.
/// `last_message` is the text of the most recent dispatch and is used to
/// suppress repeating the same failure notice on every iteration.
pub struct PollLoop<S, N> {
    source: S,
    notifier: N,
    retry_period: Duration,
    cursor: i64,
    last_message: Option<String>,
}

impl<S, N> PollLoop<S, N>
where
    S: HomeworkSource,
    N: Notifier,
{
    pub fn new(source: S, notifier: N, retry_period: Duration, cursor: i64) -> Self {
        Self {
            source,
            notifier,
            retry_period,
            cursor,
            last_message: None,
        }
    }

    pub async fn run(mut self) {
        tracing::info!(
            cursor = self.cursor,
            retry_period_secs = self.retry_period.as_secs(),
            "Starting homework status polling"
        );
        loop {
            self.run_iteration().await;
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// One fetch/validate/dispatch pass. Never fails: errors become a chat
    /// notice unless the same notice was the last thing sent.
    pub async fn run_iteration(&mut self) {
        let span = tracing::debug_span!("poll", cursor = self.cursor);
        async {
            if let Err(err) = self.poll_once().await {
                self.report_failure(&err).await;
            }
        }
        .instrument(span)
        .await
    }

    async fn poll_once(&mut self) -> Result<(), BotError> {
        let raw = self.source.get_api_answer(self.cursor).await?;
        let response = check_response(raw)?;

        match response.homeworks.first() {
            Some(latest) => {
                let record = HomeworkRecord::from_value(latest)?;
                let message = parse_status(&record)?;
                self.dispatch(message).await;
            }
            None => tracing::debug!("No new homework status"),
        }

        self.advance_cursor(response.current_date);
        Ok(())
    }

    async fn report_failure(&mut self, err: &BotError) {
        let message = format!("Failure in program operation: {}", err);
        if self.last_message.as_deref() == Some(message.as_str()) {
            tracing::debug!(error = %err, "Same failure as last notification, not resending");
            return;
        }
        self.dispatch(message).await;
    }

    async fn dispatch(&mut self, message: String) {
        send_message(&self.notifier, &message).await;
        self.last_message = Some(message);
    }

    fn advance_cursor(&mut self, checkpoint: i64) {
        if checkpoint < self.cursor {
            tracing::warn!(
                cursor = self.cursor,
                checkpoint,
                "Server checkpoint is behind the cursor, keeping cursor"
            );
            return;
        }
        self.cursor = checkpoint;
    }
}
