//! Request and response payloads exchanged with the AssemblyAI API.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

const DEFAULT_POLL_FREQUENCY: Duration = Duration::from_secs(5);
const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(60);

/// Body of a successful `POST /upload`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UploadResponse {
    pub upload_url: String,
}

/// Body of `POST /transcript`
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptRequest<'a> {
    pub audio_url: &'a str,
}

/// Job state as reported by `POST /transcript` and `GET /transcript/{id}`.
///
/// Fields the service omits or sends as `null` decode to their defaults.
/// `text` is only meaningful once `status` is [`TranscriptStatus::Completed`],
/// `error` only when it is [`TranscriptStatus::Error`].
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct TranscriptResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "status_or_unknown")]
    pub status: TranscriptStatus,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Status of a transcription job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TranscriptStatus {
    Queued,
    Processing,
    Completed,
    Error,
    /// Any status string this client does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

/// `"status": null` keeps polling like a missing or unknown status
fn status_or_unknown<'de, D>(deserializer: D) -> Result<TranscriptStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TranscriptStatus>::deserialize(deserializer)?.unwrap_or_default())
}

/// How often and for how long `poll_transcript` asks for the job status.
///
/// Neither value is validated: a zero `frequency` polls back to back and a
/// zero `timeout` gives up before the first request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub frequency: Duration,
    pub timeout: Duration,
}

impl PollSettings {
    pub fn new(frequency: Duration, timeout: Duration) -> Self {
        Self { frequency, timeout }
    }

    pub fn with_frequency(mut self, frequency: Duration) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_POLL_FREQUENCY,
            timeout: DEFAULT_POLL_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_settings_defaults() {
        let settings = PollSettings::default();
        assert_eq!(settings.frequency, Duration::from_secs(5));
        assert_eq!(settings.timeout, Duration::from_secs(60));

        let settings = settings.with_timeout(Duration::from_millis(1));
        assert_eq!(settings.frequency, Duration::from_secs(5));
        assert_eq!(settings.timeout, Duration::from_millis(1));
    }

    #[test]
    fn test_status_parsing() {
        let test_cases = vec![
            ("queued", TranscriptStatus::Queued),
            ("processing", TranscriptStatus::Processing),
            ("completed", TranscriptStatus::Completed),
            ("error", TranscriptStatus::Error),
            ("paused", TranscriptStatus::Unknown),
        ];

        for (raw, expected) in test_cases {
            let status: TranscriptStatus =
                serde_json::from_value(serde_json::Value::String(raw.to_string())).unwrap();
            assert_eq!(status, expected, "status {:?}", raw);
        }
        assert_eq!(TranscriptStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_transcript_response_tolerates_nulls_and_missing_fields() {
        let response: TranscriptResponse =
            serde_json::from_str(r#"{"id": "abc", "status": "queued", "text": null}"#).unwrap();
        assert_eq!(response.id, "abc");
        assert_eq!(response.status, TranscriptStatus::Queued);
        assert_eq!(response.text, None);
        assert_eq!(response.error, None);

        let response: TranscriptResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, TranscriptResponse::default());

        let response: TranscriptResponse =
            serde_json::from_str(r#"{"id": "abc", "status": null}"#).unwrap();
        assert_eq!(response.status, TranscriptStatus::Unknown);
    }

    #[test]
    fn test_upload_response_rejects_non_string_url() {
        assert!(serde_json::from_str::<UploadResponse>(r#"{"upload_url": 1}"#).is_err());
    }
}
