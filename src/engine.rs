//! Form engine: the surface the presentation binding talks to
//!
//! Owns the store, the lookup client, and the notice queue. The binding
//! reads snapshots, dispatches intents through the methods here, and
//! drains notices to render them however it likes.

use crate::lookup::{LookupResult, PostalLookup};
use crate::notice::Notice;
use crate::schema::FieldName;
use crate::state::{FormState, FormStore, SubmitHandler, SubmitOutcome};
use anyhow::Result;
use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;

/// Postal codes must be exactly this many characters before a lookup is
/// attempted; shorter or longer input short-circuits with a notice.
const POSTAL_CODE_LEN: usize = 8;

pub struct FormEngine {
    store: FormStore,
    lookup: Arc<dyn PostalLookup>,
    notices: VecDeque<Notice>,
}

impl FormEngine {
    pub fn new(lookup: Arc<dyn PostalLookup>, handler: Box<dyn SubmitHandler>) -> Self {
        Self {
            store: FormStore::new(handler),
            lookup,
            notices: VecDeque::new(),
        }
    }

    /// Read-only view of the current form state
    pub fn snapshot(&self) -> &FormState {
        self.store.snapshot()
    }

    /// Register a state-change observer
    pub fn subscribe(&mut self, subscriber: impl Fn(&FormState) + Send + 'static) {
        self.store.subscribe(subscriber);
    }

    /// Forward a keystroke-level value change
    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        self.store.set_value(field, value);
    }

    /// Blur handler: marks the field touched; leaving the postal-code
    /// field additionally runs the address enrichment flow to completion
    /// with the field's current value.
    pub async fn blur_field(&mut self, field: FieldName) {
        self.store.set_touched(field);
        if field == FieldName::PostalCode {
            let code = self.store.snapshot().values.postal_code.clone();
            self.lookup_postal_code(&code).await;
        }
    }

    /// Start a postal-code lookup, or queue the length-guard notice and
    /// return `None` without touching the directory. The returned future
    /// borrows nothing from the engine, so the binding can keep
    /// dispatching intents while it is pending and feed the settled
    /// outcome back through [`apply_lookup_result`](Self::apply_lookup_result).
    pub fn start_postal_lookup(
        &mut self,
        code: &str,
    ) -> Option<impl Future<Output = LookupResult> + Send> {
        if code.chars().count() != POSTAL_CODE_LEN {
            tracing::debug!(code, "postal code failed length guard, skipping lookup");
            self.notices.push_back(Notice::invalid_postal_code());
            return None;
        }

        tracing::debug!(code, "postal-code lookup started");
        let lookup = Arc::clone(&self.lookup);
        let code = code.to_string();
        Some(async move { lookup.lookup(&code).await })
    }

    /// Apply a settled lookup outcome: merge the four address fields in
    /// one atomic update on `Found`, or queue a notice. Existing address
    /// values are never partially overwritten on failure; a late result
    /// applies as-is when it arrives (last write wins).
    pub fn apply_lookup_result(&mut self, result: LookupResult) {
        match result {
            LookupResult::Found(address) => {
                tracing::info!(city = %address.city, "postal code resolved");
                self.store.set_values(vec![
                    (FieldName::Street, address.street),
                    (FieldName::District, address.district),
                    (FieldName::City, address.city),
                    (FieldName::State, address.state),
                ]);
            }
            LookupResult::NotFound => {
                tracing::info!("postal code not found");
                self.notices.push_back(Notice::postal_code_not_found());
            }
            LookupResult::TransportError(reason) => {
                tracing::warn!(%reason, "postal-code lookup failed");
                self.notices.push_back(Notice::lookup_failed());
            }
        }
    }

    /// Run the whole enrichment flow in one call, for bindings that have
    /// no input to process while the directory responds
    pub async fn lookup_postal_code(&mut self, code: &str) {
        if let Some(pending) = self.start_postal_lookup(code) {
            let result = pending.await;
            self.apply_lookup_result(result);
        }
    }

    /// Run the submit flow; a successful submit queues the success notice
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        let outcome = self.store.submit().await?;
        if outcome == SubmitOutcome::Submitted {
            self.notices.push_back(Notice::submit_succeeded());
        }
        Ok(outcome)
    }

    /// Drain the oldest pending notice, if any
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }
}
