use std::io::Cursor;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use reqwest::blocking::{Body, RequestBuilder};
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};

use super::client::TranscriptionClient;
use super::config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use super::decode::decode_response;
use super::error::{Result, TranscriptionError};
use super::types::{
    PollSettings, TranscriptRequest, TranscriptResponse, TranscriptStatus, UploadResponse,
};

/// AssemblyAI REST API client
pub struct AssemblyAIClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: SecretString,
}

impl AssemblyAIClient {
    /// Create a new client.
    ///
    /// * `base_url` - API root, e.g. "https://api.assemblyai.com/v2"
    /// * `token` - AssemblyAI API token, sent as the `authorization` header
    /// * `http` - transport to use; `None` builds one with a 15 second timeout
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        http: Option<reqwest::blocking::Client>,
    ) -> Result<Self> {
        let http = match http {
            Some(http) => http,
            None => build_http_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS))?,
        };

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: SecretString::from(token.into()),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http: build_http_client(config.timeout())?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn add_auth(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let mut value = HeaderValue::from_str(self.token.expose_secret())
            .map_err(|_| TranscriptionError::InvalidApiKey)?;
        value.set_sensitive(true);
        Ok(request.header(AUTHORIZATION, value))
    }

    fn fetch_transcript(&self, url: &str) -> Result<TranscriptResponse> {
        let request = self.add_auth(self.http.get(url))?;
        let response = request.send()?;
        decode_response(response)
    }
}

fn build_http_client(timeout: Duration) -> Result<reqwest::blocking::Client> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    Ok(client)
}

impl TranscriptionClient for AssemblyAIClient {
    fn upload_local_file(&self, content: &[u8]) -> Result<String> {
        debug!("Uploading {} bytes", content.len());

        // A reader body has no known length, so reqwest streams it chunked
        let body = Body::new(Cursor::new(content.to_vec()));
        let request = self
            .http
            .post(self.url("upload"))
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        let response = self.add_auth(request)?.send()?;

        let data: UploadResponse = decode_response(response)?;
        info!("Upload successful: {}", data.upload_url);
        Ok(data.upload_url)
    }

    fn transcript(&self, audio_url: &str) -> Result<String> {
        debug!("Submitting transcription job for {}", audio_url);

        let request = self
            .http
            .post(self.url("transcript"))
            .json(&TranscriptRequest { audio_url });
        let response = self.add_auth(request)?.send()?;

        let data: TranscriptResponse = decode_response(response)?;
        if data.id.is_empty() {
            warn!("Transcript response did not include an id");
            return Err(TranscriptionError::MissingId);
        }
        if data.status == TranscriptStatus::Error {
            let message = data.error.unwrap_or_default();
            warn!("Transcription job rejected: {}", message);
            return Err(TranscriptionError::Service(message));
        }

        info!("Transcription job {} created ({})", data.id, data.status);
        Ok(data.id)
    }

    fn poll_transcript(&self, id: &str, poll_settings: Option<&PollSettings>) -> Result<String> {
        let settings = poll_settings.copied().unwrap_or_default();
        let url = self.url(&format!("transcript/{}", id));
        let deadline = Instant::now() + settings.timeout;

        while Instant::now() < deadline {
            let data = self.fetch_transcript(&url)?;
            match data.status {
                TranscriptStatus::Error => {
                    let message = data.error.unwrap_or_default();
                    warn!("Transcription job {} failed: {}", id, message);
                    return Err(TranscriptionError::Service(message));
                }
                TranscriptStatus::Completed => {
                    let text = data.text.unwrap_or_default();
                    info!(
                        "Transcription job {} completed: {} characters",
                        id,
                        text.len()
                    );
                    return Ok(text);
                }
                status => {
                    debug!(
                        "Transcription job {} is {}, next poll in {:?}",
                        id, status, settings.frequency
                    );
                    std::thread::sleep(settings.frequency);
                }
            }
        }

        warn!(
            "Transcription job {} not finished within {:?}",
            id, settings.timeout
        );
        Err(TranscriptionError::Timeout(settings.timeout))
    }
}
