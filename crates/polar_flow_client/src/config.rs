use crate::FlowError;
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://flow.polar.com";

/// Environment-derived settings.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, FlowError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, FlowError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let base_url = get("POLAR_FLOW_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let base_url = base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(FlowError::Config(format!(
                "POLAR_FLOW_BASE_URL must be an http(s) url, got {base_url:?}"
            )));
        }
        Ok(Self { base_url })
    }
}

/// Account credentials and the sports to report on, read from the JSON
/// settings file.
#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub login: String,
    #[serde(deserialize_with = "deserialize_secret")]
    pub password: SecretString,
    pub sports: Vec<String>,
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(SecretString::new(s.into()))
}

impl Settings {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FlowError> {
        let path = path.as_ref();
        let buf = std::fs::read_to_string(path)
            .map_err(|e| FlowError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json(&buf)
            .map_err(|e| FlowError::Config(format!("malformed {}: {e}", path.display())))
    }

    pub fn from_json(buf: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(buf)
    }
}
