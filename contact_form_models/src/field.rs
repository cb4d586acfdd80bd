use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Message,
}

/// The constraint a field value has to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Any value is accepted, including the empty string.
    Optional,
    /// The value must not be empty.
    Required,
    /// The value must not be empty and must have at least this many characters.
    MinLength(usize),
    /// The value must not be empty and must look like an email address.
    Email,
}

impl FormField {
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];

    /// The key used on the wire and in error messages, e.g. `firstName`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// The human readable label of the input.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub const fn rule(self) -> FieldRule {
        match self {
            Self::FirstName => FieldRule::MinLength(5),
            Self::LastName => FieldRule::Required,
            Self::Email => FieldRule::Email,
            Self::Message => FieldRule::Optional,
        }
    }

    pub const fn is_required(self) -> bool {
        !matches!(self.rule(), FieldRule::Optional)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown form field: {0}")]
pub struct UnknownFormFieldError(pub String);

impl FromStr for FormField {
    type Err = UnknownFormFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownFormFieldError(s.into()))
    }
}
