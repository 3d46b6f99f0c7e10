//! Pure validation of a values snapshot against the rule registry

use crate::schema::{rules_for, FieldName};
use crate::state::FormValues;
use std::collections::HashMap;

/// Per-field validation outcome. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: HashMap<FieldName, &'static str>,
}

impl ValidationResult {
    /// The error message for a field, if it failed a rule
    pub fn error_for(&self, field: FieldName) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// True when no field has an error (the whole-form submit gate)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields currently failing
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Validate every field against its ordered rules, stopping at the first
/// failing rule per field so only one message surfaces at a time.
///
/// Pure function of the snapshot: no I/O, no mutation, deterministic.
pub fn validate(values: &FormValues) -> ValidationResult {
    let mut errors = HashMap::new();
    for field in FieldName::ALL {
        let value = values.get(field);
        if let Some(rule) = rules_for(field).iter().find(|rule| !(rule.check)(value)) {
            errors.insert(field, rule.message);
        }
    }
    ValidationResult { errors }
}
