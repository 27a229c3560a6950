//! Payslip template schema types.
//!
//! A [`TemplateSchema`] is a named, versioned definition of a payslip's
//! layout: four ordered field lists (header, earnings, deductions, footer)
//! plus presentation metadata. Field values are a strongly-typed tagged
//! union keyed by stable field ids and validated against the owning schema
//! at assembly time, never trusted blindly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The declared type of a template field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Free-form text (names, codes, addresses).
    Text,
    /// A plain number (days, hours).
    Number,
    /// A monetary amount.
    Currency,
    /// A calendar date.
    Date,
}

/// A typed field value, matched against the owning field's [`FieldType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// A text value.
    Text(String),
    /// A numeric value.
    Number(Decimal),
    /// A monetary value.
    Currency(Decimal),
    /// A date value.
    Date(NaiveDate),
}

impl FieldValue {
    /// Returns true if this value is of the given declared type.
    ///
    /// # Example
    ///
    /// ```
    /// use payslip_engine::template::{FieldType, FieldValue};
    /// use rust_decimal::Decimal;
    ///
    /// let value = FieldValue::Currency(Decimal::from(1800));
    /// assert!(value.matches(FieldType::Currency));
    /// assert!(!value.matches(FieldType::Text));
    /// ```
    pub fn matches(&self, field_type: FieldType) -> bool {
        matches!(
            (self, field_type),
            (FieldValue::Text(_), FieldType::Text)
                | (FieldValue::Number(_), FieldType::Number)
                | (FieldValue::Currency(_), FieldType::Currency)
                | (FieldValue::Date(_), FieldType::Date)
        )
    }
}

/// A single field declaration within a template section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateField {
    /// Stable field id (e.g., "hra", "provident_fund", "net_salary").
    pub id: String,
    /// Human-readable label rendered on the payslip.
    pub label: String,
    /// The declared value type.
    pub field_type: FieldType,
    /// Calculated fields (gross salary, total deductions, net salary,
    /// net-in-words) are never supplied by the caller; the assembler
    /// computes them and overwrites any input value.
    #[serde(default)]
    pub calculated: bool,
}

/// Presentation metadata attached to a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateStyling {
    /// Accent color as a hex string (e.g., "#1a5276").
    pub accent_color: String,
    /// Font family for rendering.
    pub font_family: String,
    /// Whether the company logo is shown in the header.
    pub show_company_logo: bool,
}

impl Default for TemplateStyling {
    fn default() -> Self {
        Self {
            accent_color: "#1a5276".to_string(),
            font_family: "Helvetica".to_string(),
            show_company_logo: true,
        }
    }
}

/// A named, versioned payslip template definition.
///
/// Templates are immutable once referenced by a payslip: the assembler
/// freezes an owned copy of the schema into each generated payslip, so
/// editing a template afterwards never alters historical payslips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSchema {
    /// Unique template id.
    pub id: String,
    /// Human-readable template name.
    pub name: String,
    /// Template version, bumped on every edit.
    pub version: u32,
    /// Whether this template is the registry default. Exactly one template
    /// may be marked default at a time.
    #[serde(default)]
    pub is_default: bool,
    /// Ordered header fields (employee and company identity).
    pub header: Vec<TemplateField>,
    /// Ordered earnings fields.
    pub earnings: Vec<TemplateField>,
    /// Ordered deductions fields.
    pub deductions: Vec<TemplateField>,
    /// Ordered footer fields (totals, net-in-words).
    pub footer: Vec<TemplateField>,
    /// Presentation metadata.
    #[serde(default)]
    pub styling: TemplateStyling,
}

impl TemplateSchema {
    /// Iterates over all fields in section order: header, earnings,
    /// deductions, footer.
    pub fn all_fields(&self) -> impl Iterator<Item = &TemplateField> {
        self.header
            .iter()
            .chain(self.earnings.iter())
            .chain(self.deductions.iter())
            .chain(self.footer.iter())
    }

    /// Looks up a field declaration by id across all sections.
    pub fn field(&self, id: &str) -> Option<&TemplateField> {
        self.all_fields().find(|f| f.id == id)
    }

    /// Builds the standard HRM payslip template: basic salary, HRA,
    /// conveyance and medical allowances, statutory deductions, and a
    /// net-in-words footer.
    ///
    /// Used as seed data for fresh registries and as the fixture in tests.
    pub fn reference() -> Self {
        fn text(id: &str, label: &str) -> TemplateField {
            TemplateField {
                id: id.to_string(),
                label: label.to_string(),
                field_type: FieldType::Text,
                calculated: false,
            }
        }

        fn currency(id: &str, label: &str) -> TemplateField {
            TemplateField {
                id: id.to_string(),
                label: label.to_string(),
                field_type: FieldType::Currency,
                calculated: false,
            }
        }

        fn calculated_currency(id: &str, label: &str) -> TemplateField {
            TemplateField {
                id: id.to_string(),
                label: label.to_string(),
                field_type: FieldType::Currency,
                calculated: true,
            }
        }

        Self {
            id: "tpl_standard".to_string(),
            name: "Standard Payslip".to_string(),
            version: 1,
            is_default: true,
            header: vec![
                text("company_name", "Company"),
                text("company_address", "Address"),
                text("employee_name", "Employee Name"),
                text("employee_code", "Employee Code"),
                text("department", "Department"),
                text("designation", "Designation"),
                text("bank_account", "Bank Account"),
                text("pan", "PAN"),
                text("pay_period", "Pay Period"),
                text("payslip_number", "Payslip No."),
            ],
            earnings: vec![
                currency("basic_salary", "Basic Salary"),
                currency("hra", "House Rent Allowance"),
                currency("conveyance", "Conveyance Allowance"),
                currency("medical", "Medical Allowance"),
            ],
            deductions: vec![
                currency("provident_fund", "Provident Fund"),
                currency("professional_tax", "Professional Tax"),
                currency("tds", "Tax Deducted at Source"),
            ],
            footer: vec![
                calculated_currency("gross_salary", "Gross Salary"),
                calculated_currency("total_deductions", "Total Deductions"),
                calculated_currency("net_salary", "Net Salary"),
                TemplateField {
                    id: "net_salary_in_words".to_string(),
                    label: "Net Salary (in words)".to_string(),
                    field_type: FieldType::Text,
                    calculated: true,
                },
            ],
            styling: TemplateStyling::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_matches_declared_type() {
        assert!(FieldValue::Text("x".to_string()).matches(FieldType::Text));
        assert!(FieldValue::Number(Decimal::ONE).matches(FieldType::Number));
        assert!(FieldValue::Currency(Decimal::ONE).matches(FieldType::Currency));
        assert!(
            FieldValue::Date(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap())
                .matches(FieldType::Date)
        );

        assert!(!FieldValue::Number(Decimal::ONE).matches(FieldType::Currency));
        assert!(!FieldValue::Text("x".to_string()).matches(FieldType::Date));
    }

    #[test]
    fn test_field_value_serialization_is_tagged() {
        let value = FieldValue::Currency(Decimal::new(157550, 2));
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"type":"currency","value":"1575.50"}"#);

        let round_trip: FieldValue = serde_json::from_str(&json).unwrap();
        assert_eq!(round_trip, value);
    }

    #[test]
    fn test_field_type_serialization() {
        assert_eq!(serde_json::to_string(&FieldType::Text).unwrap(), "\"text\"");
        assert_eq!(
            serde_json::to_string(&FieldType::Currency).unwrap(),
            "\"currency\""
        );
    }

    #[test]
    fn test_reference_template_sections() {
        let template = TemplateSchema::reference();
        assert!(template.is_default);
        assert_eq!(template.earnings.len(), 4);
        assert_eq!(template.deductions.len(), 3);
        assert_eq!(template.footer.len(), 4);
        assert!(template.footer.iter().all(|f| f.calculated));
        assert!(template.header.iter().all(|f| !f.calculated));
    }

    #[test]
    fn test_all_fields_preserves_section_order() {
        let template = TemplateSchema::reference();
        let ids: Vec<&str> = template.all_fields().map(|f| f.id.as_str()).collect();

        let company = ids.iter().position(|&id| id == "company_name").unwrap();
        let basic = ids.iter().position(|&id| id == "basic_salary").unwrap();
        let pf = ids.iter().position(|&id| id == "provident_fund").unwrap();
        let net = ids.iter().position(|&id| id == "net_salary").unwrap();
        assert!(company < basic && basic < pf && pf < net);
    }

    #[test]
    fn test_field_lookup() {
        let template = TemplateSchema::reference();
        let hra = template.field("hra").unwrap();
        assert_eq!(hra.label, "House Rent Allowance");
        assert_eq!(hra.field_type, FieldType::Currency);
        assert!(template.field("nonexistent").is_none());
    }

    #[test]
    fn test_template_round_trip() {
        let template = TemplateSchema::reference();
        let json = serde_json::to_string(&template).unwrap();
        let deserialized: TemplateSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(template, deserialized);
    }

    #[test]
    fn test_deserialize_field_defaults_calculated_to_false() {
        let json = r#"{
            "id": "bonus",
            "label": "Bonus",
            "field_type": "currency"
        }"#;
        let field: TemplateField = serde_json::from_str(json).unwrap();
        assert!(!field.calculated);
    }
}
