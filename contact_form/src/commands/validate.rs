use clap::Args;
use contact_form_core_contracts::{ContactFormService, ContactFormSubmitError};
use contact_form_models::{contact::SubmittedSnapshot, field::FormField, state::FormState};

use crate::environment;

#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Value of the first name field
    #[arg(long, default_value_t)]
    first_name: String,
    /// Value of the last name field
    #[arg(long, default_value_t)]
    last_name: String,
    /// Value of the email field
    #[arg(long, default_value_t)]
    email: String,
    /// Value of the optional message field
    #[arg(long, default_value_t)]
    message: String,
}

impl ValidateCommand {
    /// Fills in and submits the form, printing either the submitted values or
    /// one line per validation error.
    pub fn invoke(self) -> anyhow::Result<()> {
        match self.submit(&environment::contact_form()) {
            Ok(snapshot) => {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
                Ok(())
            }
            Err(ContactFormSubmitError::Invalid(errors)) => {
                for err in errors.iter() {
                    eprintln!("{err}");
                }
                anyhow::bail!("{} field(s) failed validation", errors.len())
            }
            Err(ContactFormSubmitError::Other(err)) => Err(err),
        }
    }

    fn submit(
        self,
        service: &impl ContactFormService,
    ) -> Result<SubmittedSnapshot, ContactFormSubmitError> {
        let mut state = FormState::default();
        for (field, value) in [
            (FormField::FirstName, self.first_name),
            (FormField::LastName, self.last_name),
            (FormField::Email, self.email),
            (FormField::Message, self.message),
        ] {
            service.update_field(&mut state, field, value);
        }
        service.submit(&mut state)
    }
}

#[cfg(test)]
mod tests {
    use contact_form_demo::{MINIMAL_SNAPSHOT, MINIMAL_WITH_MESSAGE_SNAPSHOT};
    use contact_form_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    fn command(first_name: &str, last_name: &str, email: &str, message: &str) -> ValidateCommand {
        ValidateCommand {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn ok() {
        let result = command("12345", "1", "john123@hotmail.com", "")
            .submit(&environment::contact_form());

        assert_eq!(result.unwrap(), *MINIMAL_SNAPSHOT);
    }

    #[test]
    fn ok_with_message() {
        let result = command("12345", "1", "john123@hotmail.com", "hello this is a message")
            .submit(&environment::contact_form());

        assert_eq!(result.unwrap(), *MINIMAL_WITH_MESSAGE_SNAPSHOT);
    }

    #[test]
    fn invalid_email() {
        let result =
            command("12345", "1", "john123@hotmail", "").submit(&environment::contact_form());

        assert_matches!(
            result,
            Err(ContactFormSubmitError::Invalid(errors))
                if errors.iter().map(ToString::to_string).eq(["email must be a valid email address"])
        );
    }
}
