use std::time::Duration;

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx response. `body` is the raw response text, untouched.
    #[error("API returned status {status}: {body}")]
    Api { status: StatusCode, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The service reported the job as failed.
    #[error("Transcription failed: {0}")]
    Service(String),
    #[error("response did not include an id")]
    MissingId,
    #[error("timeout, transcription not finished in {0:?}")]
    Timeout(Duration),
    #[error("API key not configured")]
    ApiKeyMissing,
    #[error("API key is not a valid header value")]
    InvalidApiKey,
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Audio content is empty")]
    EmptyAudio,
    #[error("Mock operation not stubbed: {0}")]
    NotStubbed(&'static str),
}

pub type Result<T> = std::result::Result<T, TranscriptionError>;

impl TranscriptionError {
    /// Returns a short message suitable for showing to an end user
    pub fn user_message(&self) -> String {
        match self {
            TranscriptionError::Transport(e) if e.is_timeout() => {
                "The transcription service did not respond in time. Please retry.".to_string()
            }
            TranscriptionError::Transport(_) => {
                "Could not reach the transcription service. Check your connection.".to_string()
            }
            TranscriptionError::Api { status, .. } => match status.as_u16() {
                401 => "Invalid API key. Check your settings.".to_string(),
                429 => "Rate limit reached. Please wait and retry.".to_string(),
                code => format!("Transcription service returned an error ({}).", code),
            },
            TranscriptionError::Decode(_) | TranscriptionError::MissingId => {
                "Unexpected response from the transcription service.".to_string()
            }
            TranscriptionError::Service(msg) => format!("Transcription failed: {}", msg),
            TranscriptionError::Timeout(timeout) => format!(
                "Transcription took longer than {}s. Try again later.",
                timeout.as_secs()
            ),
            TranscriptionError::ApiKeyMissing => {
                "API key not configured. Set ASSEMBLYAI_API_KEY.".to_string()
            }
            TranscriptionError::InvalidApiKey => {
                "API key contains invalid characters. Check your settings.".to_string()
            }
            TranscriptionError::FileNotFound(_) => {
                "Audio file not found. Please check the path.".to_string()
            }
            TranscriptionError::Io(_) => "Failed to read audio file. Please try again.".to_string(),
            TranscriptionError::EmptyAudio => "Audio file is empty.".to_string(),
            TranscriptionError::NotStubbed(op) => format!("No mock response for {}.", op),
        }
    }
}
