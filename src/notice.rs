//! One-shot user-facing notices
//!
//! The core emits a notice kind plus message; the presentation binding
//! decides how to render it (dialog, toast, terminal bell, ...).

/// Classification of a notice, for bindings that style by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The postal code failed the pre-lookup length guard
    InvalidPostalCode,
    /// The directory does not know the postal code
    PostalCodeNotFound,
    /// The lookup failed to reach or parse the directory
    LookupFailed,
    /// The form validated and the submit handler settled successfully
    SubmitSucceeded,
}

/// A one-shot message not tied to any field's inline error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn invalid_postal_code() -> Self {
        Self {
            kind: NoticeKind::InvalidPostalCode,
            message: "Por favor, insira um CEP válido.".to_string(),
        }
    }

    pub fn postal_code_not_found() -> Self {
        Self {
            kind: NoticeKind::PostalCodeNotFound,
            message: "CEP não encontrado.".to_string(),
        }
    }

    pub fn lookup_failed() -> Self {
        Self {
            kind: NoticeKind::LookupFailed,
            message: "Erro ao buscar o CEP. Verifique sua conexão.".to_string(),
        }
    }

    pub fn submit_succeeded() -> Self {
        Self {
            kind: NoticeKind::SubmitSucceeded,
            message: "Cadastro realizado com sucesso!".to_string(),
        }
    }
}
