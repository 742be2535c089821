use serde_json::Value;
use std::path::Path;
use crate::error::Result;

/// Overwrites `path` with the pretty-printed payload.
pub fn write_debug_payload(path: &Path, payload: &Value) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(payload)?;
    std::fs::write(path, json)?;
    Ok(())
}
