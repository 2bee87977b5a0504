//! Employee model.
//!
//! Employees are owned by an external directory; the engine only reads
//! them to group and label schedule rows.

use serde::{Deserialize, Serialize};

/// Represents an employee eligible to appear in a schedule grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Department the employee belongs to (e.g., "Nursing").
    pub department: String,
    /// Optional job title, searched alongside the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Employee {
    /// Returns true if the name or position contains `needle`, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::Employee;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Maria Lopez".to_string(),
    ///     department: "Nursing".to_string(),
    ///     position: Some("Registered Nurse".to_string()),
    /// };
    /// assert!(employee.matches_search("lopez"));
    /// assert!(employee.matches_search("NURSE"));
    /// assert!(!employee.matches_search("kitchen"));
    /// ```
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .position
                .as_deref()
                .is_some_and(|p| p.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(position: Option<&str>) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Sam Carter".to_string(),
            department: "Kitchen".to_string(),
            position: position.map(str::to_string),
        }
    }

    #[test]
    fn test_deserialize_employee_without_position() {
        let json = r#"{
            "id": "emp_001",
            "name": "Sam Carter",
            "department": "Kitchen"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee, create_test_employee(None));
    }

    #[test]
    fn test_serialize_skips_missing_position() {
        let json = serde_json::to_string(&create_test_employee(None)).unwrap();
        assert!(!json.contains("position"));

        let json = serde_json::to_string(&create_test_employee(Some("Cook"))).unwrap();
        assert!(json.contains("\"position\":\"Cook\""));
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let employee = create_test_employee(None);
        assert!(employee.matches_search("carter"));
        assert!(employee.matches_search("SAM"));
        assert!(!employee.matches_search("cook"));
    }

    #[test]
    fn test_search_matches_position() {
        let employee = create_test_employee(Some("Head Cook"));
        assert!(employee.matches_search("cook"));
    }

    #[test]
    fn test_empty_search_matches_everyone() {
        assert!(create_test_employee(None).matches_search(""));
    }
}
