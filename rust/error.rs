use std::fmt;

#[derive(Debug)]
pub enum BotError {
    /// Required environment variables are unset or empty.
    Configuration { missing: Vec<&'static str> },
    /// The request to the review API never produced a response.
    Transport(reqwest::Error),
    /// The review API answered with a status other than 200.
    EndpointUnavailable { status: u16 },
    /// A 200 response whose body is not JSON.
    Decode(serde_json::Error),
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
    MissingField(&'static str),
    UnknownStatus(String),
    /// The chat provider rejected or never received a message.
    Delivery(String),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::Configuration { missing } => {
                write!(
                    f,
                    "missing required environment variables: {}",
                    missing.join(", ")
                )
            }
            BotError::Transport(e) => write!(f, "request to the review API failed: {}", e),
            BotError::EndpointUnavailable { status } => {
                write!(f, "review API endpoint unavailable (HTTP {})", status)
            }
            BotError::Decode(e) => write!(f, "review API returned invalid JSON: {}", e),
            BotError::TypeMismatch { field, expected } => {
                write!(f, "type mismatch in {}: expected {}", field, expected)
            }
            BotError::MissingField(name) => write!(f, "missing field: {}", name),
            BotError::UnknownStatus(code) => write!(f, "unknown homework status: {}", code),
            BotError::Delivery(msg) => write!(f, "message delivery failed: {}", msg),
        }
    }
}

impl std::error::Error for BotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BotError::Transport(e) => Some(e),
            BotError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BotError {
    fn from(e: reqwest::Error) -> Self {
        BotError::Transport(e)
    }
}

impl From<serde_json::Error> for BotError {
    fn from(e: serde_json::Error) -> Self {
        BotError::Decode(e)
    }
}
