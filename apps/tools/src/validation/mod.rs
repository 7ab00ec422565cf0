pub mod report;
pub mod rules;
pub mod schema;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::envfile::{self, ConfigMap};

pub use rules::{
    validate_caching, validate_database, validate_llm_providers, validate_monitoring,
    validate_security, validate_web_scraping,
};
pub use schema::{SectionReport, StatusLevel, StatusLine};

/// Aggregate of every section, errors and warnings in section order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub sections: Vec<SectionReport>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn from_sections(sections: Vec<SectionReport>) -> Self {
        let errors = sections.iter().flat_map(|s| s.errors.clone()).collect();
        let warnings = sections.iter().flat_map(|s| s.warnings.clone()).collect();
        Self {
            sections,
            errors,
            warnings,
        }
    }

    /// Warnings never make a configuration invalid.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_valid() {
            0
        } else {
            1
        }
    }
}

/// Merges the web file, the API file and `process`, later sources winning.
/// Returns `None` when neither file exists; an unreadable file counts as empty.
pub fn load_sources(config: &Config, process: ConfigMap) -> Option<ConfigMap> {
    let [web_path, api_path] = config.env_paths();
    if !web_path.exists() && !api_path.exists() {
        debug!("Neither {} nor {} exists", web_path.display(), api_path.display());
        return None;
    }
    let combined = envfile::load(&web_path)
        .unwrap_or_default()
        .merged(envfile::load(&api_path).unwrap_or_default())
        .merged(process);
    Some(combined)
}

/// Runs the six checks in their fixed order.
pub fn run_all(env: &ConfigMap) -> ValidationReport {
    ValidationReport::from_sections(rules::sections().iter().map(|s| s.evaluate(env)).collect())
}
