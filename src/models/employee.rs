//! Employee and company snapshot models.
//!
//! These records are supplied pre-fetched by the caller and embedded into
//! generated payslips verbatim. The engine never looks employees up itself.

use serde::{Deserialize, Serialize};

/// A point-in-time snapshot of an employee, as supplied by the HR data
/// source.
///
/// # Example
///
/// ```
/// use payslip_engine::models::EmployeeSnapshot;
///
/// let employee = EmployeeSnapshot {
///     id: "emp_001".to_string(),
///     name: "Asha Verma".to_string(),
///     employee_code: "ACME-0042".to_string(),
///     department: "Engineering".to_string(),
///     designation: "Senior Developer".to_string(),
///     bank_account: "XXXX-9241".to_string(),
///     pan: "ABCDE1234F".to_string(),
/// };
/// assert_eq!(employee.employee_code, "ACME-0042");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSnapshot {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The employer-assigned employee code.
    pub employee_code: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The employee's designation or job title.
    pub designation: String,
    /// Bank account reference for salary payment.
    pub bank_account: String,
    /// Permanent Account Number for tax reporting.
    pub pan: String,
}

/// A snapshot of the issuing company's details, printed on the payslip
/// header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySnapshot {
    /// The registered company name.
    pub name: String,
    /// The company's postal address.
    pub address: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Company website URL.
    pub website: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee_snapshot() {
        let json = r#"{
            "id": "emp_001",
            "name": "Asha Verma",
            "employee_code": "ACME-0042",
            "department": "Engineering",
            "designation": "Senior Developer",
            "bank_account": "XXXX-9241",
            "pan": "ABCDE1234F"
        }"#;

        let employee: EmployeeSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.name, "Asha Verma");
        assert_eq!(employee.department, "Engineering");
        assert_eq!(employee.pan, "ABCDE1234F");
    }

    #[test]
    fn test_employee_snapshot_round_trip() {
        let employee = EmployeeSnapshot {
            id: "emp_002".to_string(),
            name: "Ravi Iyer".to_string(),
            employee_code: "ACME-0043".to_string(),
            department: "Finance".to_string(),
            designation: "Accountant".to_string(),
            bank_account: "XXXX-1177".to_string(),
            pan: "FGHIJ5678K".to_string(),
        };

        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: EmployeeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_deserialize_company_snapshot() {
        let json = r#"{
            "name": "Acme Software Pvt Ltd",
            "address": "12 MG Road, Bengaluru",
            "email": "hr@acme.example",
            "phone": "+91-80-5550-1234",
            "website": "https://acme.example"
        }"#;

        let company: CompanySnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(company.name, "Acme Software Pvt Ltd");
        assert_eq!(company.email, "hr@acme.example");
    }
}
