//! In-memory [`TranscriptionClient`] for consumers that want to avoid the network.
//!
//! Every operation is backed by its own closure, so a test can stub exactly
//! the call it cares about:
//!
//! ```
//! use assemblyai::{MockClient, TranscriptionClient, TranscriptionError};
//!
//! let client = MockClient::returning("https://cdn/upload/1", "job-1", "hello")
//!     .on_poll(|_, _| Err(TranscriptionError::Service("audio too short".into())));
//!
//! assert_eq!(client.transcript("https://cdn/upload/1").unwrap(), "job-1");
//! assert!(client.poll_transcript("job-1", None).is_err());
//! ```

use std::fmt;

use super::client::TranscriptionClient;
use super::error::{Result, TranscriptionError};
use super::types::PollSettings;

type UploadFn = Box<dyn Fn(&[u8]) -> Result<String> + Send + Sync>;
type TranscriptFn = Box<dyn Fn(&str) -> Result<String> + Send + Sync>;
type PollFn = Box<dyn Fn(&str, Option<&PollSettings>) -> Result<String> + Send + Sync>;

/// Stubbable client. Operations without a stub fail with [`TranscriptionError::NotStubbed`].
pub struct MockClient {
    upload: UploadFn,
    transcript: TranscriptFn,
    poll: PollFn,
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            upload: Box::new(|_: &[u8]| {
                Err(TranscriptionError::NotStubbed("upload_local_file"))
            }),
            transcript: Box::new(|_: &str| Err(TranscriptionError::NotStubbed("transcript"))),
            poll: Box::new(|_: &str, _: Option<&PollSettings>| {
                Err(TranscriptionError::NotStubbed("poll_transcript"))
            }),
        }
    }

    /// Stub all three operations with fixed successful values
    pub fn returning(
        upload_url: impl Into<String>,
        job_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let upload_url = upload_url.into();
        let job_id = job_id.into();
        let text = text.into();
        Self::new()
            .on_upload(move |_| Ok(upload_url.clone()))
            .on_transcript(move |_| Ok(job_id.clone()))
            .on_poll(move |_, _| Ok(text.clone()))
    }

    pub fn on_upload<F>(mut self, f: F) -> Self
    where
        F: Fn(&[u8]) -> Result<String> + Send + Sync + 'static,
    {
        self.upload = Box::new(f);
        self
    }

    pub fn on_transcript<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<String> + Send + Sync + 'static,
    {
        self.transcript = Box::new(f);
        self
    }

    pub fn on_poll<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, Option<&PollSettings>) -> Result<String> + Send + Sync + 'static,
    {
        self.poll = Box::new(f);
        self
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MockClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockClient").finish_non_exhaustive()
    }
}

impl TranscriptionClient for MockClient {
    fn upload_local_file(&self, content: &[u8]) -> Result<String> {
        (self.upload)(content)
    }

    fn transcript(&self, audio_url: &str) -> Result<String> {
        (self.transcript)(audio_url)
    }

    fn poll_transcript(&self, id: &str, poll_settings: Option<&PollSettings>) -> Result<String> {
        (self.poll)(id, poll_settings)
    }
}
