//! Blocking client for the AssemblyAI transcription API.
//!
//! The client uploads audio bytes, submits a transcription job and polls the
//! job until it completes. Every call blocks the current thread; polling
//! sleeps between requests on that same thread.
//!
//! # Example
//!
//! ```no_run
//! use assemblyai::{AssemblyAIClient, PollSettings, TranscriptionClient};
//! use std::time::Duration;
//!
//! fn main() -> Result<(), assemblyai::TranscriptionError> {
//!     let client = AssemblyAIClient::new("https://api.assemblyai.com/v2", "my-token", None)?;
//!
//!     let audio = std::fs::read("meeting.wav")?;
//!     let upload_url = client.upload_local_file(&audio)?;
//!     let id = client.transcript(&upload_url)?;
//!
//!     let settings = PollSettings::new(Duration::from_secs(3), Duration::from_secs(300));
//!     let text = client.poll_transcript(&id, Some(&settings))?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```
//!
//! Code that only needs the three operations should take a
//! `&dyn TranscriptionClient`, so tests can pass a [`MockClient`] instead.

mod assemblyai_client;
mod client;
mod config;
mod decode;
mod error;
pub mod mock;
mod transcriber;
mod types;

// Re-export public types
pub use assemblyai_client::AssemblyAIClient;
pub use client::TranscriptionClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{Result, TranscriptionError};
pub use mock::MockClient;
pub use transcriber::Transcriber;
pub use types::{PollSettings, TranscriptResponse, TranscriptStatus, UploadResponse};
