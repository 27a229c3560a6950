//! Comprehensive integration tests for the payslip engine.
//!
//! This test suite covers the end-to-end assembly flow:
//! - The reference compensation scenario (full attendance)
//! - Loss-of-pay proration (half period)
//! - Overtime earnings
//! - Idempotent regeneration and the finalized-payslip guard
//! - Template immutability after issuance
//! - Batch runs with partial failures
//! - Property-based checks for the reconciliation and monotonicity
//!   guarantees

use std::str::FromStr;

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use payslip_engine::assembler::{AssembleRequest, PayslipAssembler, assemble_request};
use payslip_engine::batch::run_payroll_batch;
use payslip_engine::calculation::calculate_payroll;
use payslip_engine::config::{ConfigLoader, StatutoryOverrides, StatutoryRates};
use payslip_engine::error::EngineError;
use payslip_engine::models::{
    AllowanceComponent, AllowanceRule, AttendanceRecord, CompanySnapshot, CompensationProfile,
    DeductionComponent, EmployeeSnapshot, PayPeriod, PayslipStatus,
};
use payslip_engine::store::{InMemoryStore, PayslipStore};
use payslip_engine::template::{FieldValue, InMemoryRegistry, TemplateSchema};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn create_employee(id: &str) -> EmployeeSnapshot {
    EmployeeSnapshot {
        id: id.to_string(),
        name: "Asha Verma".to_string(),
        employee_code: "ACME-0042".to_string(),
        department: "Engineering".to_string(),
        designation: "Senior Developer".to_string(),
        bank_account: "XXXX-9241".to_string(),
        pan: "ABCDE1234F".to_string(),
    }
}

fn create_company() -> CompanySnapshot {
    CompanySnapshot {
        name: "Acme Software Pvt Ltd".to_string(),
        address: "12 MG Road, Bengaluru".to_string(),
        email: "hr@acme.example".to_string(),
        phone: "+91-80-5550-1234".to_string(),
        website: "https://acme.example".to_string(),
    }
}

/// The reference compensation structure: basic 50000, HRA 40% of basic,
/// conveyance 1600, medical 1250.
fn create_reference_profile(employee_id: &str) -> CompensationProfile {
    CompensationProfile {
        employee_id: employee_id.to_string(),
        version: 1,
        effective_from: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        basic_salary: dec("50000"),
        allowances: vec![
            AllowanceComponent {
                field_id: "hra".to_string(),
                label: "House Rent Allowance".to_string(),
                rule: AllowanceRule::PercentOfBasic {
                    percent: dec("0.40"),
                },
                prorated: true,
            },
            AllowanceComponent {
                field_id: "conveyance".to_string(),
                label: "Conveyance Allowance".to_string(),
                rule: AllowanceRule::Flat {
                    amount: dec("1600"),
                },
                prorated: false,
            },
            AllowanceComponent {
                field_id: "medical".to_string(),
                label: "Medical Allowance".to_string(),
                rule: AllowanceRule::Flat {
                    amount: dec("1250"),
                },
                prorated: false,
            },
        ],
        flat_deductions: vec![],
        overrides: StatutoryOverrides::default(),
    }
}

fn create_attendance(total: u32, present: u32, overtime_hours: &str) -> AttendanceRecord {
    AttendanceRecord {
        total_working_days: total,
        present_days: present,
        lop_days: total - present,
        overtime_hours: dec(overtime_hours),
    }
}

fn create_request(employee_id: &str, present_days: u32) -> AssembleRequest {
    assemble_request(
        create_employee(employee_id),
        create_company(),
        create_reference_profile(employee_id),
        create_attendance(22, present_days, "0"),
        PayPeriod::for_month(2026, 1).unwrap(),
    )
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn test_reference_scenario_with_loaded_config() {
    let rates = ConfigLoader::load("./config/statutory.yaml")
        .expect("Failed to load config")
        .rates()
        .clone();
    assert_eq!(rates, StatutoryRates::default());

    let registry = InMemoryRegistry::with_reference_template();
    let store = InMemoryStore::new();
    let assembler = PayslipAssembler::new(&registry, &store, rates);

    let payslip = assembler.assemble(&create_request("emp_001", 22)).unwrap();

    assert_eq!(payslip.payslip_number, "PS-2026-01-emp_001");
    assert_eq!(payslip.result.earning("basic_salary"), Some(dec("50000")));
    assert_eq!(payslip.result.earning("hra"), Some(dec("20000.00")));
    assert_eq!(payslip.result.gross_salary, dec("72850"));
    assert_eq!(payslip.result.deduction("provident_fund"), Some(dec("1800")));
    assert_eq!(payslip.result.deduction("professional_tax"), Some(dec("200")));
    assert_eq!(payslip.result.deduction("tds"), Some(dec("7285.00")));
    assert_eq!(payslip.result.net_salary, dec("63565.00"));
    assert_eq!(
        payslip.net_salary_in_words,
        "Sixty-Three Thousand Five Hundred Sixty-Five and 00/100"
    );
    assert_eq!(payslip.status, PayslipStatus::Generated);
}

#[test]
fn test_half_period_proration_scenario() {
    let registry = InMemoryRegistry::with_reference_template();
    let store = InMemoryStore::new();
    let assembler = PayslipAssembler::new(&registry, &store, StatutoryRates::default());

    let payslip = assembler.assemble(&create_request("emp_001", 11)).unwrap();

    // Prorated basic and HRA; flat allowances unprorated
    assert_eq!(payslip.result.earning("basic_salary"), Some(dec("25000.00")));
    assert_eq!(payslip.result.earning("hra"), Some(dec("10000.00")));
    assert_eq!(payslip.result.earning("conveyance"), Some(dec("1600")));
    assert_eq!(payslip.result.earning("medical"), Some(dec("1250")));
    assert_eq!(payslip.result.gross_salary, dec("37850.00"));

    // PF still at the cap: computed from the contracted basic salary,
    // not the prorated one. TDS no longer applies (gross <= 40000).
    assert_eq!(payslip.result.deduction("provident_fund"), Some(dec("1800")));
    assert_eq!(payslip.result.deduction("tds"), None);
    assert_eq!(
        payslip.fields.get("tds"),
        Some(&FieldValue::Currency(Decimal::ZERO))
    );
    assert_eq!(payslip.result.net_salary, dec("35850.00"));
}

#[test]
fn test_overtime_scenario() {
    let registry = InMemoryRegistry::with_reference_template();
    let store = InMemoryStore::new();
    let assembler = PayslipAssembler::new(&registry, &store, StatutoryRates::default());

    let mut request = create_request("emp_001", 22);
    request.attendance = create_attendance(22, 22, "10");

    let payslip = assembler.assemble(&request).unwrap();

    // 50000 / (22 * 8) per hour, 10 hours
    assert_eq!(payslip.result.earning("overtime"), Some(dec("2840.91")));
    assert_eq!(payslip.result.gross_salary, dec("75690.91"));
    assert_eq!(
        payslip.result.net_salary,
        payslip.result.gross_salary - payslip.result.total_deductions
    );
}

#[test]
fn test_full_attendance_proration_is_noop() {
    let profile = create_reference_profile("emp_001");
    let full = calculate_payroll(
        &profile,
        &create_attendance(22, 22, "0"),
        &StatutoryRates::default(),
    )
    .unwrap();
    let also_full = calculate_payroll(
        &profile,
        &create_attendance(20, 20, "0"),
        &StatutoryRates::default(),
    )
    .unwrap();

    // Different period lengths, same full attendance: identical earnings
    assert_eq!(full.earnings, also_full.earnings);
    assert_eq!(full.gross_salary, also_full.gross_salary);
}

// =============================================================================
// Regeneration lifecycle
// =============================================================================

#[test]
fn test_regeneration_is_idempotent_except_timestamp() {
    let registry = InMemoryRegistry::with_reference_template();
    let store = InMemoryStore::new();
    let assembler = PayslipAssembler::new(&registry, &store, StatutoryRates::default());

    let first = assembler.assemble(&create_request("emp_001", 22)).unwrap();
    let mut second = assembler.assemble(&create_request("emp_001", 22)).unwrap();

    assert!(second.generated_at >= first.generated_at);
    second.generated_at = first.generated_at;
    assert_eq!(first, second);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_regeneration_overwrites_then_finalization_blocks() {
    let registry = InMemoryRegistry::with_reference_template();
    let store = InMemoryStore::new();
    let assembler = PayslipAssembler::new(&registry, &store, StatutoryRates::default());

    // First and second assembly overwrite the same draft
    assembler.assemble(&create_request("emp_001", 22)).unwrap();
    let second = assembler.assemble(&create_request("emp_001", 21)).unwrap();
    assert_eq!(second.result.earning("basic_salary"), Some(dec("47727.27")));

    // External workflow approves the draft
    let mut approved = store
        .find_by_employee_and_period("emp_001", 1, 2026)
        .unwrap();
    assert!(approved.approve());
    store.upsert(approved);

    // Third assembly must be rejected
    match assembler
        .assemble(&create_request("emp_001", 22))
        .unwrap_err()
    {
        EngineError::PayslipAlreadyFinalized {
            payslip_number,
            status,
        } => {
            assert_eq!(payslip_number, "PS-2026-01-emp_001");
            assert_eq!(status, "approved");
        }
        other => panic!("Expected PayslipAlreadyFinalized, got {:?}", other),
    }

    // The approved payslip's numbers are untouched by the failed attempt
    let stored = store
        .find_by_employee_and_period("emp_001", 1, 2026)
        .unwrap();
    assert_eq!(stored.status, PayslipStatus::Approved);
    assert_eq!(stored.result.earning("basic_salary"), Some(dec("47727.27")));
}

#[test]
fn test_distinct_periods_do_not_collide() {
    let registry = InMemoryRegistry::with_reference_template();
    let store = InMemoryStore::new();
    let assembler = PayslipAssembler::new(&registry, &store, StatutoryRates::default());

    let january = assembler.assemble(&create_request("emp_001", 22)).unwrap();

    let mut request = create_request("emp_001", 22);
    request.period = PayPeriod::for_month(2026, 2).unwrap();
    let february = assembler.assemble(&request).unwrap();

    assert_ne!(january.payslip_number, february.payslip_number);
    assert_ne!(january.id, february.id);
    assert_eq!(store.len(), 2);
}

// =============================================================================
// Template immutability
// =============================================================================

#[test]
fn test_template_edits_do_not_alter_issued_payslips() {
    let registry = InMemoryRegistry::with_reference_template();
    let store = InMemoryStore::new();
    let assembler = PayslipAssembler::new(&registry, &store, StatutoryRates::default());

    let issued = assembler.assemble(&create_request("emp_001", 22)).unwrap();
    let issued_layout = issued.template.clone();
    let issued_fields = issued.fields.clone();

    // Rework the registry template after issuance
    let mut edited = TemplateSchema::reference();
    edited.version = 2;
    edited.earnings.retain(|f| f.id == "basic_salary");
    edited.styling.accent_color = "#c0392b".to_string();
    registry.insert(edited);

    let stored = store
        .find_by_employee_and_period("emp_001", 1, 2026)
        .unwrap();
    assert_eq!(stored.template, issued_layout);
    assert_eq!(stored.fields, issued_fields);
    assert_eq!(stored.template.version, 1);
    assert_eq!(stored.template.styling.accent_color, "#1a5276");

    // New payslips pick up the edited template
    let mut request = create_request("emp_002", 22);
    request.profile = create_reference_profile("emp_002");
    request.profile.allowances.clear();
    let fresh = assembler.assemble(&request).unwrap();
    assert_eq!(fresh.template.version, 2);
}

// =============================================================================
// Failure handling
// =============================================================================

#[test]
fn test_negative_net_rejected_and_not_persisted() {
    let registry = InMemoryRegistry::with_reference_template();
    let store = InMemoryStore::new();
    let assembler = PayslipAssembler::new(&registry, &store, StatutoryRates::default());

    let mut request = create_request("emp_001", 22);
    request.profile.allowances.clear();
    request.profile.basic_salary = dec("3000");
    request.profile.flat_deductions = vec![DeductionComponent {
        field_id: "loan".to_string(),
        label: "Loan Repayment".to_string(),
        amount: dec("9000"),
    }];

    assert!(matches!(
        assembler.assemble(&request).unwrap_err(),
        EngineError::DeductionsExceedEarnings { .. }
    ));
    assert!(store.is_empty());
}

#[test]
fn test_batch_reports_individual_outcomes() {
    let registry = InMemoryRegistry::with_reference_template();
    let store = InMemoryStore::new();
    let assembler = PayslipAssembler::new(&registry, &store, StatutoryRates::default());

    let mut broken = create_request("emp_002", 22);
    broken.attendance.lop_days = 5; // days no longer add up

    let requests = vec![
        create_request("emp_001", 22),
        broken,
        create_request("emp_003", 18),
    ];

    let outcomes = run_payroll_batch(&assembler, &requests);

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].is_success());
    assert!(!outcomes[1].is_success());
    assert!(outcomes[2].is_success());
    assert!(matches!(
        outcomes[1].outcome,
        Err(EngineError::InvalidAttendance { .. })
    ));
    assert_eq!(store.len(), 2);
}

// =============================================================================
// Properties
// =============================================================================

fn arbitrary_attendance() -> impl Strategy<Value = (u32, u32)> {
    (1u32..=26).prop_flat_map(|total| (Just(total), 0..=total))
}

fn profile_with_basic(basic: Decimal) -> CompensationProfile {
    let mut profile = create_reference_profile("emp_prop");
    profile.basic_salary = basic;
    profile
}

proptest! {
    /// Net salary reconciles exactly with gross and total deductions at
    /// 2-decimal precision, for every input the calculator accepts.
    #[test]
    fn prop_net_reconciles(basic in 1u32..200_000, (total, present) in arbitrary_attendance(), overtime in 0u32..60) {
        let profile = profile_with_basic(Decimal::from(basic));
        let attendance = AttendanceRecord {
            total_working_days: total,
            present_days: present,
            lop_days: total - present,
            overtime_hours: Decimal::from(overtime),
        };

        match calculate_payroll(&profile, &attendance, &StatutoryRates::default()) {
            Ok(result) => {
                let earnings_sum: Decimal = result.earnings.values().copied().sum();
                let deductions_sum: Decimal = result.deductions.values().copied().sum();
                prop_assert_eq!(result.gross_salary, earnings_sum);
                prop_assert_eq!(result.total_deductions, deductions_sum);
                prop_assert_eq!(result.net_salary, result.gross_salary - result.total_deductions);
                prop_assert!(result.net_salary >= Decimal::ZERO);
            }
            // Months where fixed deductions outweigh prorated earnings are
            // rejected, never clamped
            Err(EngineError::DeductionsExceedEarnings { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Full attendance makes proration a no-op: the result matches a
    /// same-profile calculation over any other fully-attended period length.
    #[test]
    fn prop_full_attendance_is_noop(basic in 1u32..200_000, total_a in 1u32..=26, total_b in 1u32..=26) {
        let profile = profile_with_basic(Decimal::from(basic));
        let full = |total: u32| AttendanceRecord {
            total_working_days: total,
            present_days: total,
            lop_days: 0,
            overtime_hours: Decimal::ZERO,
        };

        let a = calculate_payroll(&profile, &full(total_a), &StatutoryRates::default()).unwrap();
        let b = calculate_payroll(&profile, &full(total_b), &StatutoryRates::default()).unwrap();
        prop_assert_eq!(a.earnings, b.earnings);
        prop_assert_eq!(a.net_salary, b.net_salary);
    }

    /// Increasing LOP days never increases gross salary.
    #[test]
    fn prop_more_lop_never_increases_gross(basic in 1u32..200_000, (total, present) in arbitrary_attendance()) {
        prop_assume!(present > 0);
        let profile = profile_with_basic(Decimal::from(basic));
        let attendance = |p: u32| AttendanceRecord {
            total_working_days: total,
            present_days: p,
            lop_days: total - p,
            overtime_hours: Decimal::ZERO,
        };

        let higher = calculate_payroll(&profile, &attendance(present), &StatutoryRates::default());
        let lower = calculate_payroll(&profile, &attendance(present - 1), &StatutoryRates::default());
        if let (Ok(higher), Ok(lower)) = (higher, lower) {
            prop_assert!(lower.gross_salary <= higher.gross_salary);
        }
    }

    /// Within a fixed tax regime (thresholds pinned so TDS and professional
    /// tax always apply), increasing LOP days never increases net salary.
    #[test]
    fn prop_more_lop_never_increases_net(basic in 1u32..200_000, (total, present) in arbitrary_attendance()) {
        prop_assume!(present > 0);
        let mut profile = profile_with_basic(Decimal::from(basic));
        profile.overrides = StatutoryOverrides {
            professional_tax_threshold: Some(Decimal::ZERO),
            tds_threshold: Some(Decimal::ZERO),
            ..StatutoryOverrides::default()
        };
        let attendance = |p: u32| AttendanceRecord {
            total_working_days: total,
            present_days: p,
            lop_days: total - p,
            overtime_hours: Decimal::ZERO,
        };

        let higher = calculate_payroll(&profile, &attendance(present), &StatutoryRates::default());
        let lower = calculate_payroll(&profile, &attendance(present - 1), &StatutoryRates::default());
        if let (Ok(higher), Ok(lower)) = (higher, lower) {
            prop_assert!(lower.net_salary <= higher.net_salary);
        }
    }
}
