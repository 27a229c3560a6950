//! Payslip store collaborator contract.
//!
//! The engine persists and retrieves payslips through the [`PayslipStore`]
//! trait; schema and indexing are the surrounding application's concern.
//! The bundled [`InMemoryStore`] serializes concurrent upserts behind a
//! lock so two assembly requests for the same employee/period cannot race
//! each other into two `generated` payslips.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::Payslip;

/// Read/write contract of the payslip persistence collaborator.
pub trait PayslipStore: Send + Sync {
    /// Finds a payslip for the given employee and period, if one exists.
    fn find_by_employee_and_period(
        &self,
        employee_id: &str,
        month: u32,
        year: i32,
    ) -> Option<Payslip>;

    /// Inserts or replaces a payslip, keyed by its payslip number, and
    /// returns the stored record.
    fn upsert(&self, payslip: Payslip) -> Payslip;
}

/// In-memory [`PayslipStore`] implementation keyed by payslip number.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    payslips: Mutex<HashMap<String, Payslip>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored payslips.
    pub fn len(&self) -> usize {
        self.payslips.lock().expect("store lock poisoned").len()
    }

    /// Returns true if no payslip is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PayslipStore for InMemoryStore {
    fn find_by_employee_and_period(
        &self,
        employee_id: &str,
        month: u32,
        year: i32,
    ) -> Option<Payslip> {
        let key = Payslip::number_for(year, month, employee_id);
        self.payslips
            .lock()
            .expect("store lock poisoned")
            .get(&key)
            .cloned()
    }

    fn upsert(&self, payslip: Payslip) -> Payslip {
        self.payslips
            .lock()
            .expect("store lock poisoned")
            .insert(payslip.payslip_number.clone(), payslip.clone());
        payslip
    }
}
