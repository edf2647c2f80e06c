//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io;

use randwell_core::{RandwellError, Result};

pub use schema::{ServerConfig, ServerSection};

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| RandwellError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Load from `path`, falling back to defaults when the file does not exist.
/// A file that exists but fails to parse or validate is still an error.
pub fn load_or_default(path: &str) -> Result<ServerConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ServerConfig::default()),
        Err(e) => Err(RandwellError::Internal(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| RandwellError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
