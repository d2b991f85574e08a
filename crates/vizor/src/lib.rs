//! Command-line front end for the Vizor projection engine
//!
//! Loads scenario documents from disk, fills in values older documents
//! leave out, runs them through [`vizor_core`], and writes the results as
//! JSON or YAML.

pub mod commands;
pub mod config;
pub mod loader;
pub mod logging;

pub use config::PlanningDefaults;
pub use logging::init_logging;
