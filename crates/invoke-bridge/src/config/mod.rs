//! Bridge config loader (strict parsing).

pub mod schema;

use std::fs;

use invoke_core::error::{InvokeError, Result};

pub use schema::{AppConfig, BridgeConfig, InboundConfig};

pub fn load_from_file(path: &str) -> Result<BridgeConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| InvokeError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<BridgeConfig> {
    let cfg: BridgeConfig = serde_yaml::from_str(s)
        .map_err(|e| InvokeError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    tracing::debug!(base_url = %cfg.app.base_url, "bridge config loaded");
    Ok(cfg)
}
