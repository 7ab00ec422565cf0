//! Setup and validation tooling for the InterviewSpark apps, plus the
//! state container behind the resume builder.

pub mod config;
pub mod envfile;
pub mod errors;
pub mod logging;
pub mod resume;
pub mod setup;
pub mod validation;

pub use config::Config;
pub use envfile::{ConfigMap, EnvValues};
pub use validation::{
    run_all, validate_caching, validate_database, validate_llm_providers, validate_monitoring,
    validate_security, validate_web_scraping, ValidationReport,
};
