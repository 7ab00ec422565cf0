use std::path::Path;

use tracing::debug;

use super::ConfigMap;

/// Parses `KEY=value` lines.
///
/// Blank lines, `#` comments and lines without `=` are skipped. The value is
/// everything after the first `=`, so `A=b=c` yields `A` → `b=c`.
pub fn parse(content: &str) -> ConfigMap {
    let mut map = ConfigMap::new();
    for line in content.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        map.insert(key, value);
    }
    map
}

/// Reads and parses an env file. Returns `None` if it cannot be read.
pub fn load(path: &Path) -> Option<ConfigMap> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let map = parse(&content);
            debug!("Loaded {} keys from {}", map.len(), path.display());
            Some(map)
        }
        Err(e) => {
            debug!("Skipping {}: {e}", path.display());
            None
        }
    }
}
