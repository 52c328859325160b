use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{MigrateError, Result};

#[must_use]
pub fn now_utc_iso() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Hex SHA-256 of a text blob, recorded in the report so a run's reference
/// inputs stay identifiable under the presence-implies-freshness cache.
#[must_use]
pub fn content_digest(text: &str) -> String {
    let hash = Sha256::digest(text.as_bytes());
    hash.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputIntegration {
    pub output_mode: String,
}

impl OutputIntegration {
    #[must_use]
    pub fn detect() -> Self {
        let output_mode = std::env::var("NF_MIGRATE_OUTPUT")
            .map(|value| value.trim().to_ascii_lowercase())
            .unwrap_or_else(|_| "human".to_string());
        Self { output_mode }
    }

    #[must_use]
    pub fn should_emit_json(&self) -> bool {
        self.output_mode == "json"
    }
}

/// Human-facing progress output, suppressed entirely in machine-JSON mode.
#[derive(Debug, Clone)]
pub struct CliOutput {
    enabled: bool,
}

impl CliOutput {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn info(&self, message: &str) {
        if self.enabled {
            println!("  {message}");
        }
    }

    pub fn success(&self, message: &str) {
        if self.enabled {
            println!("✔ {message}");
        }
    }

    pub fn warning(&self, message: &str) {
        if self.enabled {
            eprintln!("⚠ {message}");
        }
    }

    pub fn error(&self, message: &str) {
        if self.enabled {
            eprintln!("✘ {message}");
        }
    }
}

#[must_use]
pub fn output_for(integration: &OutputIntegration) -> CliOutput {
    CliOutput::new(!integration.should_emit_json())
}

/// Machine-readable failure envelope emitted on stderr in JSON mode, so a
/// wrapper script can tell which subcommand failed without parsing argv.
#[must_use]
pub fn error_envelope(
    command: &str,
    error: &MigrateError,
    integration: &OutputIntegration,
) -> serde_json::Value {
    serde_json::json!({
        "status": "error",
        "command": command,
        "error": error.to_string(),
        "exit_code": error.exit_code(),
        "integration": integration,
    })
}

pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(MigrateError::MissingPath {
            path: path.to_path_buf(),
        })
    }
}

pub fn write_string(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Copy `path` to `path.bak`, returning the backup path.
pub fn backup_file(path: &Path) -> Result<PathBuf> {
    ensure_exists(path)?;
    let backup = PathBuf::from(format!("{}.bak", path.display()));
    fs::copy(path, &backup)?;
    Ok(backup)
}
