//! Roster and shift filters for the grid views.

use serde::{Deserialize, Serialize};

use crate::models::{Employee, ShiftAssignment, ShiftType};

/// Optional predicates applied before projection.
///
/// Department, employee id and search restrict the roster (rows).
/// Shift type and location restrict which shifts land in cells. Blank
/// strings are treated as "no filter".
///
/// # Example
///
/// ```
/// use roster_engine::schedule::RosterFilter;
/// use roster_engine::models::Employee;
///
/// let filter = RosterFilter {
///     department: Some("nursing".to_string()),
///     ..Default::default()
/// };
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Maria Lopez".to_string(),
///     department: "Nursing".to_string(),
///     position: None,
/// };
/// assert!(filter.admits_employee(&employee));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterFilter {
    /// Keep only employees in this department (case-insensitive).
    pub department: Option<String>,
    /// Keep only the employee with this id.
    pub employee_id: Option<String>,
    /// Keep only shifts of this type.
    pub shift_type: Option<ShiftType>,
    /// Keep only shifts at this location (case-insensitive).
    pub location: Option<String>,
    /// Case-insensitive substring over employee name and position.
    pub search: Option<String>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl RosterFilter {
    /// Returns true if the employee gets a row.
    pub fn admits_employee(&self, employee: &Employee) -> bool {
        active(&self.department).is_none_or(|d| employee.department.eq_ignore_ascii_case(d))
            && active(&self.employee_id).is_none_or(|id| employee.id == id)
            && active(&self.search).is_none_or(|needle| employee.matches_search(needle))
    }

    /// Returns true if the shift may appear in a cell.
    pub fn admits_shift(&self, shift: &ShiftAssignment) -> bool {
        self.shift_type.is_none_or(|t| shift.shift_type == t)
            && active(&self.location).is_none_or(|l| shift.location.eq_ignore_ascii_case(l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn create_employee(id: &str, name: &str, department: &str, position: Option<&str>) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            department: department.to_string(),
            position: position.map(str::to_string),
        }
    }

    fn create_shift(shift_type: ShiftType, location: &str) -> ShiftAssignment {
        ShiftAssignment::new(
            "shift_001",
            "emp_001",
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            shift_type,
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            location,
        )
    }

    #[test]
    fn test_default_filter_admits_everything() {
        let filter = RosterFilter::default();
        assert!(filter.admits_employee(&create_employee("emp_001", "Ana", "Nursing", None)));
        assert!(filter.admits_shift(&create_shift(ShiftType::Night, "Ward A")));
    }

    #[test]
    fn test_department_filter() {
        let filter = RosterFilter {
            department: Some("Kitchen".to_string()),
            ..Default::default()
        };
        assert!(filter.admits_employee(&create_employee("emp_001", "Ana", "kitchen", None)));
        assert!(!filter.admits_employee(&create_employee("emp_002", "Ben", "Nursing", None)));
    }

    #[test]
    fn test_employee_id_filter() {
        let filter = RosterFilter {
            employee_id: Some("emp_002".to_string()),
            ..Default::default()
        };
        assert!(!filter.admits_employee(&create_employee("emp_001", "Ana", "Nursing", None)));
        assert!(filter.admits_employee(&create_employee("emp_002", "Ben", "Nursing", None)));
    }

    #[test]
    fn test_search_covers_name_and_position() {
        let filter = RosterFilter {
            search: Some("nurse".to_string()),
            ..Default::default()
        };
        assert!(filter.admits_employee(&create_employee(
            "emp_001",
            "Ana",
            "Care",
            Some("Enrolled Nurse")
        )));
        assert!(!filter.admits_employee(&create_employee("emp_002", "Ben", "Care", None)));
    }

    #[test]
    fn test_blank_strings_are_ignored() {
        let filter = RosterFilter {
            department: Some("  ".to_string()),
            search: Some(String::new()),
            location: Some(String::new()),
            ..Default::default()
        };
        assert!(filter.admits_employee(&create_employee("emp_001", "Ana", "Nursing", None)));
        assert!(filter.admits_shift(&create_shift(ShiftType::Morning, "Ward A")));
    }

    #[test]
    fn test_shift_type_and_location_filters() {
        let filter = RosterFilter {
            shift_type: Some(ShiftType::Night),
            location: Some("ward b".to_string()),
            ..Default::default()
        };
        assert!(filter.admits_shift(&create_shift(ShiftType::Night, "Ward B")));
        assert!(!filter.admits_shift(&create_shift(ShiftType::Morning, "Ward B")));
        assert!(!filter.admits_shift(&create_shift(ShiftType::Night, "Ward A")));
    }

    #[test]
    fn test_deserialize_partial_filter() {
        let filter: RosterFilter = serde_json::from_str(r#"{"shift_type": "night"}"#).unwrap();
        assert_eq!(filter.shift_type, Some(ShiftType::Night));
        assert_eq!(filter.department, None);
    }
}
