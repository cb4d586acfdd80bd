use contact_form_core_contracts::FieldValidationService;
use contact_form_models::{
    email_address::EMAIL_ADDRESS_REGEX,
    error::FieldError,
    field::{FieldRule, FormField},
};

/// Applies the [`FieldRule`] of each field. Lengths are counted in characters
/// of the raw value, surrounding whitespace included.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidationServiceImpl;

impl FieldValidationService for FieldValidationServiceImpl {
    fn validate(&self, field: FormField, value: &str) -> Result<(), FieldError> {
        let rule = field.rule();

        if value.is_empty() {
            return match rule {
                FieldRule::Optional => Ok(()),
                _ => Err(FieldError::RequiredFieldMissing(field)),
            };
        }

        match rule {
            FieldRule::Optional | FieldRule::Required => Ok(()),
            FieldRule::MinLength(min_len) if value.chars().count() < min_len => {
                Err(FieldError::TooShort { field, min_len })
            }
            FieldRule::MinLength(_) => Ok(()),
            FieldRule::Email if !EMAIL_ADDRESS_REGEX.is_match(value) => {
                Err(FieldError::InvalidEmailFormat)
            }
            FieldRule::Email => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_name() {
        let sut = FieldValidationServiceImpl;

        for (value, expected) in [
            ("", Err(FieldError::RequiredFieldMissing(FormField::FirstName))),
            (
                "123",
                Err(FieldError::TooShort {
                    field: FormField::FirstName,
                    min_len: 5,
                }),
            ),
            (
                "1234",
                Err(FieldError::TooShort {
                    field: FormField::FirstName,
                    min_len: 5,
                }),
            ),
            ("12345", Ok(())),
            ("     ", Ok(())),
            ("Maximilian", Ok(())),
        ] {
            assert_eq!(sut.validate(FormField::FirstName, value), expected, "{value:?}");
        }
    }

    #[test]
    fn first_name_too_short_message() {
        let result = FieldValidationServiceImpl.validate(FormField::FirstName, "123");
        assert_eq!(
            result.unwrap_err().to_string(),
            "firstName must have at least 5 characters"
        );
    }

    #[test]
    fn last_name() {
        let sut = FieldValidationServiceImpl;

        assert_eq!(
            sut.validate(FormField::LastName, "").unwrap_err().to_string(),
            "lastName is a required field"
        );
        assert_eq!(sut.validate(FormField::LastName, "1"), Ok(()));
        assert_eq!(sut.validate(FormField::LastName, " "), Ok(()));
    }

    #[test]
    fn email() {
        let sut = FieldValidationServiceImpl;

        assert_eq!(
            sut.validate(FormField::Email, ""),
            Err(FieldError::RequiredFieldMissing(FormField::Email))
        );
        assert_eq!(
            sut.validate(FormField::Email, "john123@hotmail")
                .unwrap_err()
                .to_string(),
            "email must be a valid email address"
        );
        assert_eq!(sut.validate(FormField::Email, "john123@hotmail.com"), Ok(()));
    }

    #[test]
    fn message_is_optional() {
        let sut = FieldValidationServiceImpl;

        assert_eq!(sut.validate(FormField::Message, ""), Ok(()));
        assert_eq!(
            sut.validate(FormField::Message, "hello this is a message"),
            Ok(())
        );
    }
}
