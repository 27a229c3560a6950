//! Bulk payroll runs.
//!
//! A batch run processes many employees for one period. Each entry is
//! independent: a failure for one employee (bad attendance, deductions
//! exceeding earnings) is captured in that employee's outcome and never
//! aborts the batch. The assembler is stateless, so callers that want
//! wall-clock parallelism can fan entries out across threads and run one
//! partial batch per thread; the store's per-key serialization keeps
//! concurrent upserts safe.

use tracing::{info, warn};

use crate::assembler::{AssembleRequest, PayslipAssembler};
use crate::error::EngineError;
use crate::models::Payslip;

/// The per-employee result of a batch run.
#[derive(Debug)]
pub struct BatchOutcome {
    /// The employee this outcome belongs to.
    pub employee_id: String,
    /// The generated payslip, or the failure that prevented it.
    pub outcome: Result<Payslip, EngineError>,
}

impl BatchOutcome {
    /// Returns true if this employee's payslip was generated.
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Runs payroll for every entry, reporting each employee's outcome
/// individually.
///
/// # Example
///
/// ```no_run
/// use payslip_engine::assembler::PayslipAssembler;
/// use payslip_engine::batch::run_payroll_batch;
/// use payslip_engine::config::StatutoryRates;
/// use payslip_engine::store::InMemoryStore;
/// use payslip_engine::template::InMemoryRegistry;
/// # fn requests() -> Vec<payslip_engine::assembler::AssembleRequest> { vec![] }
///
/// let registry = InMemoryRegistry::with_reference_template();
/// let store = InMemoryStore::new();
/// let assembler = PayslipAssembler::new(&registry, &store, StatutoryRates::default());
///
/// let outcomes = run_payroll_batch(&assembler, &requests());
/// let generated = outcomes.iter().filter(|o| o.is_success()).count();
/// println!("{}/{} payslips generated", generated, outcomes.len());
/// ```
pub fn run_payroll_batch(
    assembler: &PayslipAssembler<'_>,
    requests: &[AssembleRequest],
) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = requests
        .iter()
        .map(|request| {
            let outcome = assembler.assemble(request);
            if let Err(error) = &outcome {
                warn!(
                    employee_id = %request.employee.id,
                    error = %error,
                    "payroll failed for employee"
                );
            }
            BatchOutcome {
                employee_id: request.employee.id.clone(),
                outcome,
            }
        })
        .collect();

    let failures = outcomes.iter().filter(|o| !o.is_success()).count();
    info!(
        total = outcomes.len(),
        failures, "completed payroll batch run"
    );
    outcomes
}
