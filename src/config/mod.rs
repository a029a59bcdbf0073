//! Configuration loading for registration sessions.
//!
//! The configuration only affects presentation and input handling; the
//! employee kinds and their multipliers are fixed.
//!
//! # Example
//!
//! ```no_run
//! use salary_roster::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/roster.yaml").unwrap().into_config();
//! println!("Clear screen: {}", config.clear_screen);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{InvalidNumberPolicy, ReportFormat, SessionConfig};
