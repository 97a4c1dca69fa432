use std::path::Path;

use log::{error, info};

use super::assemblyai_client::AssemblyAIClient;
use super::client::TranscriptionClient;
use super::config::ClientConfig;
use super::error::{Result, TranscriptionError};
use super::types::PollSettings;

/// Transcription service that orchestrates upload, submit and poll
///
/// Works against any `TranscriptionClient`, so a `MockClient` can stand in
/// for the real API.
pub struct Transcriber {
    client: Box<dyn TranscriptionClient>,
    poll_settings: PollSettings,
}

impl Transcriber {
    pub fn new(client: Box<dyn TranscriptionClient>) -> Self {
        Self {
            client,
            poll_settings: PollSettings::default(),
        }
    }

    /// Create a Transcriber backed by the AssemblyAI API
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = AssemblyAIClient::from_config(config)?;
        Ok(Self::new(Box::new(client)))
    }

    pub fn with_poll_settings(mut self, poll_settings: PollSettings) -> Self {
        self.poll_settings = poll_settings;
        self
    }

    /// Transcribe audio the service can already reach
    ///
    /// # Returns
    /// * `Ok(String)` - Transcribed text
    /// * `Err(TranscriptionError)` - The first failing step's error
    pub fn transcribe_url(&self, audio_url: &str) -> Result<String> {
        let id = self.client.transcript(audio_url)?;
        let text = self
            .client
            .poll_transcript(&id, Some(&self.poll_settings))?;

        info!("Transcription {} successful: {} characters", id, text.len());
        Ok(text)
    }

    /// Upload in-memory audio and transcribe it
    pub fn transcribe_bytes(&self, content: &[u8]) -> Result<String> {
        if content.is_empty() {
            error!("Refusing to upload empty audio");
            return Err(TranscriptionError::EmptyAudio);
        }

        let upload_url = self.client.upload_local_file(content)?;
        self.transcribe_url(&upload_url)
    }

    /// Read an audio file from disk and transcribe it
    pub fn transcribe_file(&self, file_path: &Path) -> Result<String> {
        if !file_path.exists() {
            error!("File not found: {:?}", file_path);
            return Err(TranscriptionError::FileNotFound(
                file_path.to_string_lossy().to_string(),
            ));
        }

        let content = std::fs::read(file_path)?;
        self.transcribe_bytes(&content)
    }
}
