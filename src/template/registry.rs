//! Template registry lookup service.
//!
//! The registry is an injected, read-only dependency of the assembler: a
//! lookup service over [`TemplateSchema`] records that enforces the
//! exactly-one-default invariant on write. The assembler receives it as a
//! parameter and never reaches into ambient global state.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{EngineError, EngineResult};

use super::schema::TemplateSchema;

/// Read contract of the template persistence collaborator.
///
/// Implementations hand out owned copies, so a caller can never alias the
/// registry's internal state.
pub trait TemplateRegistry: Send + Sync {
    /// Finds a template by id.
    fn find(&self, id: &str) -> Option<TemplateSchema>;

    /// Finds the template marked as default.
    fn find_default(&self) -> Option<TemplateSchema>;
}

/// Looks up a template by id, failing with `TemplateNotFound` if absent.
pub fn get_schema<R: TemplateRegistry + ?Sized>(
    registry: &R,
    template_id: &str,
) -> EngineResult<TemplateSchema> {
    registry
        .find(template_id)
        .ok_or_else(|| EngineError::TemplateNotFound {
            id: template_id.to_string(),
        })
}

/// Looks up the default template, failing with `NoDefaultTemplate` if none
/// is marked default.
pub fn get_default<R: TemplateRegistry + ?Sized>(registry: &R) -> EngineResult<TemplateSchema> {
    registry.find_default().ok_or(EngineError::NoDefaultTemplate)
}

/// In-memory [`TemplateRegistry`] implementation.
///
/// # Example
///
/// ```
/// use payslip_engine::template::{InMemoryRegistry, TemplateRegistry, TemplateSchema};
///
/// let registry = InMemoryRegistry::new();
/// registry.insert(TemplateSchema::reference());
/// assert!(registry.find("tpl_standard").is_some());
/// assert!(registry.find_default().is_some());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    templates: RwLock<HashMap<String, TemplateSchema>>,
}

impl InMemoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the reference template.
    pub fn with_reference_template() -> Self {
        let registry = Self::new();
        registry.insert(TemplateSchema::reference());
        registry
    }

    /// Inserts or replaces a template.
    ///
    /// Enforces the exactly-one-default invariant: inserting a template with
    /// `is_default: true` clears the flag on whichever template previously
    /// held it.
    pub fn insert(&self, template: TemplateSchema) {
        let mut templates = self.templates.write().expect("registry lock poisoned");
        if template.is_default {
            for existing in templates.values_mut() {
                existing.is_default = false;
            }
        }
        templates.insert(template.id.clone(), template);
    }
}

impl TemplateRegistry for InMemoryRegistry {
    fn find(&self, id: &str) -> Option<TemplateSchema> {
        self.templates
            .read()
            .expect("registry lock poisoned")
            .get(id)
            .cloned()
    }

    fn find_default(&self) -> Option<TemplateSchema> {
        self.templates
            .read()
            .expect("registry lock poisoned")
            .values()
            .find(|t| t.is_default)
            .cloned()
    }
}
