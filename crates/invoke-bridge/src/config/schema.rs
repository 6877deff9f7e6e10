use serde::Deserialize;
use url::Url;

use invoke_core::error::{InvokeError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    pub version: u32,

    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub inbound: InboundConfig,
}

impl BridgeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(InvokeError::UnsupportedVersion);
        }

        self.app.validate()?;
        self.inbound.validate()?;

        Ok(())
    }
}

/// Where outbound invocations are delivered.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.parsed_base_url().map(|_| ())
    }

    /// Base URL parsed and checked for an http(s) scheme.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| InvokeError::BadRequest(format!("app.base_url is invalid: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(InvokeError::BadRequest(
                "app.base_url must use http or https".into(),
            ));
        }
        if url.query().is_some() {
            return Err(InvokeError::BadRequest(
                "app.base_url must not carry a query string".into(),
            ));
        }
        Ok(url)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InboundConfig {
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Header names (case-insensitive) never copied into metadata.
    #[serde(default = "default_skip_headers")]
    pub skip_headers: Vec<String>,
}

impl Default for InboundConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
            skip_headers: default_skip_headers(),
        }
    }
}

impl InboundConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=64 * 1024 * 1024).contains(&self.max_body_bytes) {
            return Err(InvokeError::BadRequest(
                "inbound.max_body_bytes must be between 1 and 67108864".into(),
            ));
        }
        if self.skip_headers.iter().any(|h| h.trim().is_empty()) {
            return Err(InvokeError::BadRequest(
                "inbound.skip_headers must not contain empty names".into(),
            ));
        }
        Ok(())
    }

    pub fn skips(&self, name: &str) -> bool {
        self.skip_headers.iter().any(|h| h.eq_ignore_ascii_case(name))
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".into()
}
fn default_max_body_bytes() -> usize {
    4 * 1024 * 1024
}
fn default_skip_headers() -> Vec<String> {
    vec!["host".into(), "connection".into(), "content-length".into()]
}
