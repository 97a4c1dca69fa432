use std::fmt;
use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;

use super::error::{Result, TranscriptionError};

pub const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com/v2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_TIMEOUT_MS: u64 = DEFAULT_TIMEOUT_SECS * 1000;

const API_KEY_ENV: &str = "ASSEMBLYAI_API_KEY";
const BASE_URL_ENV: &str = "ASSEMBLYAI_BASE_URL";

/// Configuration for making AssemblyAI API calls
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// API root, e.g. "https://api.assemblyai.com/v2"
    #[serde(default = "default_base_url", alias = "base_url")]
    pub base_url: String,
    #[serde(alias = "api_key")]
    pub api_key: SecretString,
    /// Per-request timeout of the HTTP transport, in milliseconds
    #[serde(default = "default_timeout_ms", alias = "timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: SecretString::from(api_key.into()),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Load from `ASSEMBLYAI_API_KEY` and optionally `ASSEMBLYAI_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .ok_or(TranscriptionError::ApiKeyMissing)?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sub-millisecond remainders round up, so a non-zero timeout never becomes zero
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.timeout_ms = u64::try_from(millis).unwrap_or(u64::MAX);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_new_uses_defaults() {
        let config = ClientConfig::new("some-token");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert_eq!(config.api_key.expose_secret(), "some-token");
    }

    #[test]
    fn test_from_env_lookup() {
        let test_cases = vec![
            (
                "key only",
                vec![(API_KEY_ENV, "some-token")],
                Some(DEFAULT_BASE_URL),
            ),
            (
                "key and base url",
                vec![(API_KEY_ENV, "some-token"), (BASE_URL_ENV, "http://localhost:8080")],
                Some("http://localhost:8080"),
            ),
            (
                "blank base url falls back",
                vec![(API_KEY_ENV, "some-token"), (BASE_URL_ENV, " ")],
                Some(DEFAULT_BASE_URL),
            ),
            ("no key", vec![(BASE_URL_ENV, "http://localhost:8080")], None),
            ("blank key", vec![(API_KEY_ENV, "  ")], None),
        ];

        for (description, vars, expected_base_url) in test_cases {
            let result = ClientConfig::from_lookup(lookup_from(&vars));
            match expected_base_url {
                Some(base_url) => {
                    let config = result.unwrap_or_else(|e| panic!("{}: {}", description, e));
                    assert_eq!(config.base_url, base_url, "{}", description);
                }
                None => assert!(
                    matches!(result, Err(TranscriptionError::ApiKeyMissing)),
                    "{}: expected ApiKeyMissing",
                    description
                ),
            }
        }
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"apiKey": "some-token"}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, 15_000);

        let config: ClientConfig = serde_json::from_str(
            r#"{"apiKey": "some-token", "baseUrl": "http://localhost:1234", "timeoutMs": 3000}"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:1234");
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert_eq!(config.api_key.expose_secret(), "some-token");

        assert!(serde_json::from_str::<ClientConfig>(r#"{"baseUrl": "x"}"#).is_err());
    }

    #[test]
    fn test_with_timeout_keeps_sub_second_values() {
        let test_cases = vec![
            (Duration::from_millis(500), Duration::from_millis(500)),
            (Duration::from_millis(1500), Duration::from_millis(1500)),
            (Duration::from_secs(30), Duration::from_secs(30)),
            (Duration::from_micros(1), Duration::from_millis(1)),
            (Duration::from_micros(2500), Duration::from_millis(3)),
            (Duration::ZERO, Duration::ZERO),
        ];

        for (timeout, expected) in test_cases {
            let config = ClientConfig::new("some-token").with_timeout(timeout);
            assert_eq!(config.timeout(), expected, "with_timeout({:?})", timeout);
        }
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new("super-secret-token");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }
}
