//! Field definitions and the declarative validation rule registry

/// The closed set of form fields. No dynamic fields exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Name,
    Email,
    Password,
    PostalCode,
    Street,
    District,
    City,
    State,
    Number,
}

impl FieldName {
    /// Every field, in form order. Used wherever the whole form is walked.
    pub const ALL: [FieldName; 9] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Password,
        FieldName::PostalCode,
        FieldName::Street,
        FieldName::District,
        FieldName::City,
        FieldName::State,
        FieldName::Number,
    ];

    /// Stable identifier for logging and serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::PostalCode => "postalCode",
            Self::Street => "street",
            Self::District => "district",
            Self::City => "city",
            Self::State => "state",
            Self::Number => "number",
        }
    }

    /// Human-readable label for rendering next to the control
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Email => "E-mail",
            Self::Password => "Senha",
            Self::PostalCode => "CEP",
            Self::Street => "Rua",
            Self::District => "Bairro",
            Self::City => "Cidade",
            Self::State => "Estado",
            Self::Number => "Número",
        }
    }
}

/// A single validation rule: a pass/fail predicate plus the message shown
/// when it fails. Rules are plain data; the registry below is the only
/// place they are declared.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

fn non_empty(value: &str) -> bool {
    !value.is_empty()
}

fn name_min_len(value: &str) -> bool {
    value.chars().count() >= 3
}

fn password_min_len(value: &str) -> bool {
    value.chars().count() >= 6
}

/// Length-only check, deliberately not numeric: any 8 characters are
/// accepted, matching the lookup guard.
fn postal_code_len(value: &str) -> bool {
    value.chars().count() == 8
}

/// Minimal e-mail shape: one `@` separating a non-empty local part from a
/// domain that contains a dot, with no whitespace anywhere.
fn email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

const NAME_RULES: [Rule; 2] = [
    Rule {
        check: non_empty,
        message: "O nome é obrigatório",
    },
    Rule {
        check: name_min_len,
        message: "O nome deve ter pelo menos 3 caracteres",
    },
];

const EMAIL_RULES: [Rule; 2] = [
    Rule {
        check: non_empty,
        message: "O e-mail é obrigatório",
    },
    Rule {
        check: email_shape,
        message: "E-mail inválido",
    },
];

const PASSWORD_RULES: [Rule; 2] = [
    Rule {
        check: non_empty,
        message: "A senha é obrigatória",
    },
    Rule {
        check: password_min_len,
        message: "A senha deve ter pelo menos 6 caracteres",
    },
];

const POSTAL_CODE_RULES: [Rule; 2] = [
    Rule {
        check: non_empty,
        message: "O CEP é obrigatório",
    },
    Rule {
        check: postal_code_len,
        message: "O CEP deve ter 8 caracteres",
    },
];

const STREET_RULES: [Rule; 1] = [Rule {
    check: non_empty,
    message: "A rua é obrigatória",
}];

const DISTRICT_RULES: [Rule; 1] = [Rule {
    check: non_empty,
    message: "O bairro é obrigatório",
}];

const CITY_RULES: [Rule; 1] = [Rule {
    check: non_empty,
    message: "A cidade é obrigatória",
}];

const STATE_RULES: [Rule; 1] = [Rule {
    check: non_empty,
    message: "O estado é obrigatório",
}];

const NUMBER_RULES: [Rule; 1] = [Rule {
    check: non_empty,
    message: "O número é obrigatório",
}];

/// Ordered rules for a field. Evaluation stops at the first failure, so
/// declaration order decides which message surfaces.
pub fn rules_for(field: FieldName) -> &'static [Rule] {
    match field {
        FieldName::Name => &NAME_RULES,
        FieldName::Email => &EMAIL_RULES,
        FieldName::Password => &PASSWORD_RULES,
        FieldName::PostalCode => &POSTAL_CODE_RULES,
        FieldName::Street => &STREET_RULES,
        FieldName::District => &DISTRICT_RULES,
        FieldName::City => &CITY_RULES,
        FieldName::State => &STATE_RULES,
        FieldName::Number => &NUMBER_RULES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_name {
        use super::*;

        #[test]
        fn test_all_covers_nine_fields() {
            assert_eq!(FieldName::ALL.len(), 9);
        }

        #[test]
        fn test_as_str_is_unique() {
            let mut names: Vec<&str> = FieldName::ALL.iter().map(|f| f.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), 9);
        }

        #[test]
        fn test_postal_code_identifier() {
            assert_eq!(FieldName::PostalCode.as_str(), "postalCode");
            assert_eq!(FieldName::PostalCode.label(), "CEP");
        }
    }

    mod registry {
        use super::*;

        #[test]
        fn test_every_field_has_rules() {
            for field in FieldName::ALL {
                assert!(!rules_for(field).is_empty(), "{} has no rules", field.as_str());
            }
        }

        #[test]
        fn test_required_comes_first() {
            for field in FieldName::ALL {
                let first = &rules_for(field)[0];
                assert!(
                    !(first.check)(""),
                    "{} first rule should reject the empty string",
                    field.as_str()
                );
            }
        }

        #[test]
        fn test_name_rule_order() {
            let rules = rules_for(FieldName::Name);
            assert_eq!(rules[0].message, "O nome é obrigatório");
            assert_eq!(rules[1].message, "O nome deve ter pelo menos 3 caracteres");
        }

        #[test]
        fn test_address_fields_are_required_only() {
            for field in [
                FieldName::Street,
                FieldName::District,
                FieldName::City,
                FieldName::State,
                FieldName::Number,
            ] {
                assert_eq!(rules_for(field).len(), 1);
            }
        }
    }

    mod predicates {
        use super::*;

        #[test]
        fn test_postal_code_length_only() {
            assert!(postal_code_len("01310930"));
            // Non-numeric 8-character codes pass; the check is literal length
            assert!(postal_code_len("abcdefgh"));
            assert!(!postal_code_len("0131093"));
            assert!(!postal_code_len("013109300"));
            assert!(!postal_code_len(""));
        }

        #[test]
        fn test_email_shape_accepts_plain_addresses() {
            assert!(email_shape("ana@example.com"));
            assert!(email_shape("a.b+c@sub.example.com.br"));
        }

        #[test]
        fn test_email_shape_rejects_malformed() {
            assert!(!email_shape("ana"));
            assert!(!email_shape("ana@"));
            assert!(!email_shape("@example.com"));
            assert!(!email_shape("ana@example"));
            assert!(!email_shape("ana@.com"));
            assert!(!email_shape("ana@example.com."));
            assert!(!email_shape("ana maria@example.com"));
            assert!(!email_shape("ana@ex@ample.com"));
        }

        #[test]
        fn test_min_lengths_count_chars_not_bytes() {
            assert!(name_min_len("Zoé"));
            assert!(!name_min_len("Zo"));
            assert!(password_min_len("paçoca"));
            assert!(!password_min_len("paçoc"));
        }
    }
}
