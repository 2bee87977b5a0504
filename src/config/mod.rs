//! Configuration loading for the roster engine.
//!
//! This module loads grid layout defaults, shift templates and overtime
//! multipliers from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Weeks start on {}", config.grid_options().week_start);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, OvertimeMultipliers, ScheduleConfig, ShiftTemplate, TimesheetConfig};
