//! Form state store: the single owner of `FormState`, mutated only
//! through the closed intent set and observed through subscribers.

use super::values::FormValues;
use crate::schema::FieldName;
use crate::validation::{validate, ValidationResult};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;

/// External handler invoked with the values snapshot once the whole form
/// validates. May be a local side effect or a further network call; the
/// store only awaits it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    async fn on_submit(&self, values: &FormValues) -> Result<()>;
}

/// Complete observable form state.
///
/// Invariant: `errors` is always `validate(&values)` for the current
/// `values`, including the initial all-empty state. Nothing ever patches
/// `errors` directly; every values change re-runs validation.
#[derive(Debug, Clone)]
pub struct FormState {
    pub values: FormValues,
    pub errors: ValidationResult,
    pub touched: HashSet<FieldName>,
    pub is_submitting: bool,
    pub submit_count: u32,
}

impl FormState {
    fn new() -> Self {
        let values = FormValues::default();
        let errors = validate(&values);
        Self {
            values,
            errors,
            touched: HashSet::new(),
            is_submitting: false,
            submit_count: 0,
        }
    }

    /// Whether the user has interacted with the field (focused then left)
    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    /// True when no field has a validation error
    pub fn is_valid(&self) -> bool {
        self.errors.is_valid()
    }

    /// The error to actually display for a field: present only once the
    /// field was touched or a submit attempt has revealed all errors.
    pub fn visible_error(&self, field: FieldName) -> Option<&'static str> {
        if self.is_touched(field) || self.submit_count > 0 {
            self.errors.error_for(field)
        } else {
            None
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// The closed set of mutations the store accepts
#[derive(Debug, Clone)]
pub enum Intent {
    SetValue(FieldName, String),
    SetTouched(FieldName),
    SetValues(Vec<(FieldName, String)>),
    Submit,
}

/// Outcome of a submit intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Handler was invoked and settled successfully
    Submitted,
    /// Validation errors exist; all fields were revealed, handler skipped
    InvalidFields,
    /// A submit is already in flight; the intent was rejected
    AlreadySubmitting,
}

type Subscriber = Box<dyn Fn(&FormState) + Send>;

/// Exclusive owner of `FormState`. Collaborators read snapshots and
/// dispatch intents; subscribers are notified exactly once per applied
/// intent, after the transition completes.
pub struct FormStore {
    state: FormState,
    handler: Box<dyn SubmitHandler>,
    subscribers: Vec<Subscriber>,
}

impl FormStore {
    pub fn new(handler: Box<dyn SubmitHandler>) -> Self {
        Self {
            state: FormState::new(),
            handler,
            subscribers: Vec::new(),
        }
    }

    /// Read-only view of the current state
    pub fn snapshot(&self) -> &FormState {
        &self.state
    }

    /// Register a change observer, called after every applied intent
    pub fn subscribe(&mut self, subscriber: impl Fn(&FormState) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Dispatch one intent. The three synchronous intents return `None`;
    /// `Intent::Submit` resolves to its outcome.
    pub async fn apply(&mut self, intent: Intent) -> Result<Option<SubmitOutcome>> {
        match intent {
            Intent::SetValue(field, value) => {
                self.set_value(field, value);
                Ok(None)
            }
            Intent::SetTouched(field) => {
                self.set_touched(field);
                Ok(None)
            }
            Intent::SetValues(updates) => {
                self.set_values(updates);
                Ok(None)
            }
            Intent::Submit => Ok(Some(self.submit().await?)),
        }
    }

    /// Update one field's value and re-validate the whole form. Does not
    /// change the field's touched flag.
    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        self.state.values.set(field, value.into());
        self.state.errors = validate(&self.state.values);
        tracing::debug!(field = field.as_str(), "value updated");
        self.notify();
    }

    /// Mark a field as touched (blur), leaving values untouched
    pub fn set_touched(&mut self, field: FieldName) {
        self.state.touched.insert(field);
        self.notify();
    }

    /// Bulk-merge several fields in one atomic transition: one
    /// re-validation, one subscriber notification, no intermediate state.
    pub fn set_values(&mut self, updates: Vec<(FieldName, String)>) {
        self.state.values.merge(updates);
        self.state.errors = validate(&self.state.values);
        self.notify();
    }

    /// Run the submit flow: reveal all errors, gate on validity, then
    /// await the external handler with `is_submitting` held true until it
    /// settles. Re-entrant submits are rejected while one is in flight.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        if self.state.is_submitting {
            tracing::warn!("submit rejected: another submit is in flight");
            return Ok(SubmitOutcome::AlreadySubmitting);
        }

        // Every error becomes visible, even for never-focused fields
        self.state.touched.extend(FieldName::ALL);

        if !self.state.is_valid() {
            tracing::debug!(
                error_count = self.state.errors.error_count(),
                "submit blocked by validation errors"
            );
            self.notify();
            return Ok(SubmitOutcome::InvalidFields);
        }

        self.state.is_submitting = true;
        self.notify();

        let values = self.state.values.clone();
        let result = self.handler.on_submit(&values).await;

        self.state.is_submitting = false;
        self.state.submit_count += 1;
        self.notify();

        result?;
        tracing::info!(submit_count = self.state.submit_count, "form submitted");
        Ok(SubmitOutcome::Submitted)
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }
}
