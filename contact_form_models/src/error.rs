use std::collections::BTreeMap;

use serde::{ser::SerializeMap, Serialize};
use thiserror::Error;

use crate::field::FormField;

/// A violated [`FieldRule`](crate::field::FieldRule). The display string is the
/// message shown next to the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is a required field")]
    RequiredFieldMissing(FormField),
    #[error("{field} must have at least {min_len} characters")]
    TooShort { field: FormField, min_len: usize },
    #[error("email must be a valid email address")]
    InvalidEmailFormat,
}

impl FieldError {
    pub fn field(&self) -> FormField {
        match *self {
            Self::RequiredFieldMissing(field) | Self::TooShort { field, .. } => field,
            Self::InvalidEmailFormat => FormField::Email,
        }
    }
}

/// The current validation failures, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet(BTreeMap<FormField, FieldError>);

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the outcome of validating `field`: an error replaces the previous
    /// one, a success removes it.
    pub fn record(&mut self, field: FormField, result: Result<(), FieldError>) {
        match result {
            Ok(()) => {
                self.0.remove(&field);
            }
            Err(err) => {
                self.0.insert(field, err);
            }
        }
    }

    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.values()
    }
}

impl FromIterator<FieldError> for ErrorSet {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        Self(iter.into_iter().map(|err| (err.field(), err)).collect())
    }
}

impl Serialize for ErrorSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, err) in &self.0 {
            map.serialize_entry(field, &err.to_string())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn messages() {
        for (err, expected) in [
            (
                FieldError::RequiredFieldMissing(FormField::LastName),
                "lastName is a required field",
            ),
            (
                FieldError::TooShort {
                    field: FormField::FirstName,
                    min_len: 5,
                },
                "firstName must have at least 5 characters",
            ),
            (
                FieldError::InvalidEmailFormat,
                "email must be a valid email address",
            ),
        ] {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn record_replaces_and_removes() {
        let mut errors = ErrorSet::new();

        errors.record(
            FormField::Email,
            Err(FieldError::RequiredFieldMissing(FormField::Email)),
        );
        errors.record(FormField::Email, Err(FieldError::InvalidEmailFormat));
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FormField::Email),
            Some(&FieldError::InvalidEmailFormat)
        );

        errors.record(FormField::Email, Ok(()));
        assert!(errors.is_empty());
    }

    #[test]
    fn serialize_as_message_map() {
        let errors = [
            FieldError::InvalidEmailFormat,
            FieldError::RequiredFieldMissing(FormField::FirstName),
        ]
        .into_iter()
        .collect::<ErrorSet>();

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({
                "firstName": "firstName is a required field",
                "email": "email must be a valid email address",
            })
        );
    }
}
