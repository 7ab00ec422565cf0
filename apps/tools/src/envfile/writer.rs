use std::path::{Path, PathBuf};

use regex::{NoExpand, Regex};
use tracing::{debug, info};

use super::EnvValues;
use crate::errors::EnvFileError;

/// Replaces the first `KEY=...` line in `content`, or appends `KEY=value`
/// as one new line.
///
/// The key is matched literally at the start of a line and the value is
/// inserted verbatim (`$` sequences are not expanded).
pub fn upsert_line(content: &str, key: &str, value: &str) -> Result<String, EnvFileError> {
    let pattern = format!(r"(?mR)^{}=.*$", regex::escape(key));
    let re = Regex::new(&pattern).map_err(|source| EnvFileError::Pattern {
        key: key.to_string(),
        source,
    })?;
    let line = format!("{key}={value}");

    if re.is_match(content) {
        Ok(re.replacen(content, 1, NoExpand(&line)).into_owned())
    } else {
        let separator = if content.is_empty() || content.ends_with('\n') {
            ""
        } else {
            "\n"
        };
        Ok(format!("{content}{separator}{line}"))
    }
}

/// Path of the template that seeds `path` (`<path>.example`).
pub fn template_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".example");
    PathBuf::from(name)
}

/// Writes `values` into `path`, starting from `<path>.example` when it exists.
pub fn write_from_template(path: &Path, values: &EnvValues) -> Result<(), EnvFileError> {
    let example = template_path(path);
    let mut content = if example.exists() {
        std::fs::read_to_string(&example).map_err(|source| EnvFileError::ReadTemplate {
            path: example.clone(),
            source,
        })?
    } else {
        debug!("No template at {}, starting empty", example.display());
        String::new()
    };

    for (key, value) in values.iter() {
        content = upsert_line(&content, key, value)?;
    }

    std::fs::write(path, content).map_err(|source| EnvFileError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} keys to {}", values.len(), path.display());
    Ok(())
}
