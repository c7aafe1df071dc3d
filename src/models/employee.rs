//! Employee model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Backend identifier.
    pub id: u64,
    /// Given name.
    pub name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// The date the employee was hired.
    pub hire_date: Option<NaiveDate>,
    /// Job title reference.
    pub job_title_id: Option<u64>,
    /// Path of the employee photo on the backend.
    pub photo_path: Option<String>,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Employee {
    /// Returns the display name: given and family name joined by a space,
    /// skipping whichever part is missing or empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_payroll::models::Employee;
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     name: Some("Anna".to_string()),
    ///     last_name: None,
    ///     hire_date: None,
    ///     job_title_id: None,
    ///     photo_path: None,
    ///     is_deleted: false,
    /// };
    /// assert_eq!(employee.full_name(), "Anna");
    /// ```
    pub fn full_name(&self) -> String {
        [self.name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_employee(name: Option<&str>, last_name: Option<&str>) -> Employee {
        Employee {
            id: 1,
            name: name.map(str::to_string),
            last_name: last_name.map(str::to_string),
            hire_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            job_title_id: Some(2),
            photo_path: None,
            is_deleted: false,
        }
    }

    #[test]
    fn test_full_name_joins_both_parts() {
        let employee = make_employee(Some("Anna"), Some("Petrova"));
        assert_eq!(employee.full_name(), "Anna Petrova");
    }

    #[test]
    fn test_full_name_skips_empty_parts() {
        let employee = make_employee(Some(""), Some("Petrova"));
        assert_eq!(employee.full_name(), "Petrova");
    }

    #[test]
    fn test_full_name_without_any_parts_is_empty() {
        let employee = make_employee(None, None);
        assert_eq!(employee.full_name(), "");
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": 3,
            "name": "Ivan",
            "last_name": "Sidorov",
            "hire_date": "2023-06-01"
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 3);
        assert_eq!(employee.full_name(), "Ivan Sidorov");
        assert!(!employee.is_deleted);
    }
}
