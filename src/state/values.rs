//! Form value snapshot

use crate::schema::FieldName;

/// Current value of every form field. All fields always exist and are
/// plain strings; an untouched field holds the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub password: String,
    pub postal_code: String,
    pub street: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub number: String,
}

impl FormValues {
    /// Read a field's current value
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::PostalCode => &self.postal_code,
            FieldName::Street => &self.street,
            FieldName::District => &self.district,
            FieldName::City => &self.city,
            FieldName::State => &self.state,
            FieldName::Number => &self.number,
        }
    }

    /// Overwrite a single field's value
    pub fn set(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::Name => self.name = value,
            FieldName::Email => self.email = value,
            FieldName::Password => self.password = value,
            FieldName::PostalCode => self.postal_code = value,
            FieldName::Street => self.street = value,
            FieldName::District => self.district = value,
            FieldName::City => self.city = value,
            FieldName::State => self.state = value,
            FieldName::Number => self.number = value,
        }
    }

    /// Merge several fields at once. Fields not named keep their value.
    pub fn merge(&mut self, updates: impl IntoIterator<Item = (FieldName, String)>) {
        for (field, value) in updates {
            self.set(field, value);
        }
    }
}
