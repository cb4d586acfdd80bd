use serde::Serialize;

use crate::{
    contact::{FieldValues, SubmittedSnapshot},
    error::ErrorSet,
};

/// Everything the contact form page displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub values: FieldValues,
    pub errors: ErrorSet,
    /// The last successful submission, kept until the next one replaces it.
    pub submitted: Option<SubmittedSnapshot>,
}
