//! Cadastro form engine
//!
//! Form-state and validation machinery for a registration form with a
//! CEP address-autofill side effect. The crate owns the state
//! transitions, the declarative validation schema, and the async ViaCEP
//! lookup; rendering is an external collaborator that reads snapshots
//! and dispatches intents.

mod config;
mod engine;
mod lookup;
mod notice;
mod schema;
mod state;
mod validation;

pub use config::LookupConfig;
pub use engine::FormEngine;
pub use lookup::{Address, LookupError, LookupResult, PostalLookup, ViaCepClient};
pub use notice::{Notice, NoticeKind};
pub use schema::{rules_for, FieldName, Rule};
pub use state::{
    FormState, FormStore, FormValues, Intent, SubmitHandler, SubmitOutcome,
};
pub use validation::{validate, ValidationResult};
