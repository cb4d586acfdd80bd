use anyhow::Context;
use contact_form_core_contracts::{
    ContactFormService, ContactFormSubmitError, FieldValidationService,
};
use contact_form_models::{
    contact::{FieldValues, SubmittedSnapshot},
    error::ErrorSet,
    field::FormField,
    state::FormState,
};
use tracing::{debug, info, trace};

pub mod validation;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default)]
pub struct ContactFormServiceImpl<Validation> {
    validation: Validation,
}

impl<Validation> ContactFormServiceImpl<Validation> {
    pub fn new(validation: Validation) -> Self {
        Self { validation }
    }
}

impl<Validation> ContactFormService for ContactFormServiceImpl<Validation>
where
    Validation: FieldValidationService,
{
    fn update_field(&self, state: &mut FormState, field: FormField, value: String) {
        let result = self.validation.validate(field, &value);
        trace!(%field, valid = result.is_ok(), "field updated");

        state.values.set(field, value);
        state.errors.record(field, result);
    }

    fn validate_all(&self, values: &FieldValues) -> ErrorSet {
        values
            .iter()
            .filter_map(|(field, value)| self.validation.validate(field, value).err())
            .collect()
    }

    fn submit(&self, state: &mut FormState) -> Result<SubmittedSnapshot, ContactFormSubmitError> {
        state.errors = self.validate_all(&state.values);
        if !state.errors.is_empty() {
            debug!(errors = state.errors.len(), "submission refused");
            return Err(ContactFormSubmitError::Invalid(state.errors.clone()));
        }

        let snapshot = SubmittedSnapshot::try_from(state.values.clone())
            .context("Failed to take snapshot of validated values")?;
        info!(message = snapshot.message.is_some(), "contact form submitted");

        state.values = FieldValues::default();
        state.submitted = Some(snapshot.clone());
        Ok(snapshot)
    }
}
