use super::error::Result;
use super::types::PollSettings;

/// Trait for transcription API clients (the real AssemblyAI client, mocks)
///
/// Each implementation knows how to:
/// - Upload local audio so the service can reach it
/// - Submit a transcription job for an audio URL
/// - Wait for a job to finish and hand back its text
pub trait TranscriptionClient: Send + Sync {
    /// Upload raw audio bytes, returning the `upload_url` the service stored them under
    fn upload_local_file(&self, content: &[u8]) -> Result<String>;

    /// Create a transcription job for `audio_url`, returning the job id
    fn transcript(&self, audio_url: &str) -> Result<String>;

    /// Poll job `id` until it completes, fails or `poll_settings.timeout` elapses.
    ///
    /// `None` uses [`PollSettings::default`] (every 5s, for at most 60s).
    fn poll_transcript(&self, id: &str, poll_settings: Option<&PollSettings>) -> Result<String>;
}
