use contact_form_models::{
    contact::{FieldValues, SubmittedSnapshot},
    error::{ErrorSet, FieldError},
    field::FormField,
    state::FormState,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FieldValidationService: Send + Sync + 'static {
    /// Checks a single field value against the rule of `field`.
    fn validate(&self, field: FormField, value: &str) -> Result<(), FieldError>;
}

#[cfg(feature = "mock")]
impl MockFieldValidationService {
    pub fn with_validate(
        mut self,
        field: FormField,
        value: String,
        result: Result<(), FieldError>,
    ) -> Self {
        self.expect_validate()
            .once()
            .with(mockall::predicate::eq(field), mockall::predicate::eq(value))
            .return_once(|_, _| result);
        self
    }
}

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormService: Send + Sync + 'static {
    /// Sets the value of `field` and revalidates it.
    fn update_field(&self, state: &mut FormState, field: FormField, value: String);

    /// Validates every field of `values`.
    fn validate_all(&self, values: &FieldValues) -> ErrorSet;

    /// Revalidates all fields and, if none is invalid, replaces the submitted
    /// snapshot and resets the form.
    fn submit(&self, state: &mut FormState) -> Result<SubmittedSnapshot, ContactFormSubmitError>;
}

#[derive(Debug, Error)]
pub enum ContactFormSubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(ErrorSet),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
