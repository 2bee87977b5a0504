//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftType;
use crate::schedule::GridOptions;
use crate::timesheet::OvertimeKind;

use super::types::{EngineConfig, ScheduleConfig, ShiftTemplate, TimesheetConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── schedule.yaml   # Week start, overflow cap, shift templates
/// └── timesheet.yaml  # Overtime multipliers
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
/// use roster_engine::models::ShiftType;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
///
/// let template = loader.shift_template(ShiftType::Night).unwrap();
/// println!("Night shift starts at {}", template.start_time);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - `overflow_cap` is zero
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roster_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), roster_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule_path = path.join("schedule.yaml");
        let schedule = Self::load_yaml::<ScheduleConfig>(&schedule_path)?;
        if schedule.overflow_cap == 0 {
            return Err(EngineError::ConfigParseError {
                path: schedule_path.display().to_string(),
                message: "overflow_cap must be at least 1".to_string(),
            });
        }

        let timesheet_path = path.join("timesheet.yaml");
        let timesheet = Self::load_yaml::<TimesheetConfig>(&timesheet_path)?;

        Ok(Self {
            config: EngineConfig::new(schedule, timesheet),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the configured grid layout options.
    pub fn grid_options(&self) -> GridOptions {
        self.config.schedule().grid_options()
    }

    /// Gets the default clock times for a shift type.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::config::ConfigLoader;
    /// use roster_engine::models::ShiftType;
    ///
    /// let loader = ConfigLoader::default();
    /// let template = loader.shift_template(ShiftType::Morning)?;
    /// assert_eq!(template.label, "Morning");
    /// # Ok::<(), roster_engine::error::EngineError>(())
    /// ```
    pub fn shift_template(&self, shift_type: ShiftType) -> EngineResult<&ShiftTemplate> {
        self.config
            .schedule()
            .shift_templates
            .get(&shift_type)
            .ok_or_else(|| EngineError::NotFound {
                entity: "shift template".to_string(),
                id: shift_type.to_string(),
            })
    }

    /// Gets the rate multiplier for an overtime kind.
    pub fn overtime_multiplier(&self, kind: OvertimeKind) -> Decimal {
        self.config.timesheet().overtime_multipliers.get(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, Weekday};
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn write_config(dir: &Path, schedule: &str, timesheet: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("schedule.yaml"), schedule).unwrap();
        fs::write(dir.join("timesheet.yaml"), timesheet).unwrap();
    }

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("roster_engine_{}_{}", name, uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.grid_options(), GridOptions::default());
    }

    #[test]
    fn test_shipped_files_match_defaults() {
        let loaded = ConfigLoader::load(config_path()).unwrap();
        let defaults = ConfigLoader::default();

        for shift_type in [
            ShiftType::Morning,
            ShiftType::Afternoon,
            ShiftType::Night,
            ShiftType::Split,
            ShiftType::Flexible,
        ] {
            assert_eq!(
                loaded.shift_template(shift_type).unwrap(),
                defaults.shift_template(shift_type).unwrap()
            );
        }
        for kind in [
            OvertimeKind::Weekday,
            OvertimeKind::Weekend,
            OvertimeKind::PublicHoliday,
        ] {
            assert_eq!(
                loaded.overtime_multiplier(kind),
                defaults.overtime_multiplier(kind)
            );
        }
    }

    #[test]
    fn test_night_template_wraps_midnight() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let night = loader.shift_template(ShiftType::Night).unwrap();

        assert_eq!(night.start_time, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
        assert_eq!(night.end_time, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
    }

    #[test]
    fn test_overtime_multipliers() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.overtime_multiplier(OvertimeKind::Weekday), dec("1.5"));
        assert_eq!(loader.overtime_multiplier(OvertimeKind::Weekend), dec("2.0"));
        assert_eq!(
            loader.overtime_multiplier(OvertimeKind::PublicHoliday),
            dec("2.5")
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("schedule.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_zero_overflow_cap_is_rejected() {
        let dir = scratch_dir("zero_cap");
        write_config(
            &dir,
            "week_start: Mon\noverflow_cap: 0\n",
            "overtime_multipliers:\n  weekday: 1.5\n  weekend: 2.0\n  public_holiday: 2.5\n",
        );

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("schedule.yaml"));
                assert!(message.contains("overflow_cap"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("bad_yaml");
        write_config(&dir, "week_start: [unclosed\n", "");

        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigParseError { .. })
        ));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_custom_week_start_without_templates() {
        let dir = scratch_dir("monday");
        write_config(
            &dir,
            "week_start: Mon\noverflow_cap: 5\n",
            "overtime_multipliers:\n  weekday: 1.5\n  weekend: 2.0\n  public_holiday: 2.5\n",
        );

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.grid_options().week_start, Weekday::Mon);
        assert_eq!(loader.grid_options().overflow_cap, 5);
        assert!(matches!(
            loader.shift_template(ShiftType::Split),
            Err(EngineError::NotFound { .. })
        ));
        fs::remove_dir_all(&dir).ok();
    }
}
