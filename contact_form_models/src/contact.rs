use nutype::nutype;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{email_address::EmailAddress, field::FormField};

/// The raw input values of the contact form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FieldValues {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        FormField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}

#[nutype(
    validate(len_char_min = 5),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct FirstName(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct LastName(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Display, Serialize, Deserialize)
)]
pub struct Message(String);

/// The values of the last successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedSnapshot {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: EmailAddress,
    /// `None` if the message was left empty.
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("The value of {0} does not satisfy its rule")]
pub struct InvalidSnapshotError(pub FormField);

impl TryFrom<FieldValues> for SubmittedSnapshot {
    type Error = InvalidSnapshotError;

    fn try_from(value: FieldValues) -> Result<Self, Self::Error> {
        let FieldValues {
            first_name,
            last_name,
            email,
            message,
        } = value;

        Ok(Self {
            first_name: first_name
                .try_into()
                .map_err(|_| InvalidSnapshotError(FormField::FirstName))?,
            last_name: last_name
                .try_into()
                .map_err(|_| InvalidSnapshotError(FormField::LastName))?,
            email: email
                .try_into()
                .map_err(|_| InvalidSnapshotError(FormField::Email))?,
            message: Message::try_new(message).ok(),
        })
    }
}
