//! Configuration for the Productivity Analysis Engine.
//!
//! The engine's constants (standard hours, leave deduction, threshold and
//! row limit) live in one immutable [`AnalysisConfig`] value that callers
//! pass into each analysis. It can be built in code or loaded from YAML.
//!
//! # Example
//!
//! ```no_run
//! use productivity_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/analysis.yaml").unwrap();
//! println!("Full-time standard: {}h", loader.config().fulltime_standard_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AnalysisConfig, DEFAULT_FULLTIME_STANDARD_HOURS, DEFAULT_HOURS_PER_LEAVE_DAY,
    DEFAULT_MAX_ROWS, DEFAULT_PARTTIME_STANDARD_HOURS, DEFAULT_PRODUCTIVITY_THRESHOLD_PCT,
};
