use crate::error::BotError;
use crate::models::HomeworkRecord;

/// Review verdicts keyed by the status code the API reports.
pub const HOMEWORK_VERDICTS: &[(&str, &str)] = &[
    ("approved", "Checked: reviewer liked everything. Hooray!"),
    ("reviewing", "Work has been taken for review by the reviewer."),
    ("rejected", "Checked: reviewer has remarks."),
];

pub fn verdict(status: &str) -> Option<&'static str> {
    HOMEWORK_VERDICTS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, text)| *text)
}

/// Renders the chat message for a homework whose status changed.
pub fn parse_status(record: &HomeworkRecord) -> Result<String, BotError> {
    let result = render(record);
    if let Err(err) = &result {
        tracing::error!(error = %err, "Could not describe homework status");
    }
    result
}

fn render(record: &HomeworkRecord) -> Result<String, BotError> {
    let name = record
        .homework_name
        .as_deref()
        .ok_or(BotError::MissingField("homework_name"))?;

    let status = record
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(BotError::MissingField("status"))?;

    let verdict = verdict(status).ok_or_else(|| BotError::UnknownStatus(status.to_string()))?;

    Ok(format!("Changed check status of work \"{}\". {}", name, verdict))
}
