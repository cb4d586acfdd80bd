use contact_form_core_contracts::{ContactFormService, MockFieldValidationService};
use contact_form_models::{error::FieldError, field::FormField, state::FormState};
use pretty_assertions::assert_eq;

use crate::tests::{MockSut, Sut};

#[test]
fn records_error_of_updated_field() {
    // Arrange
    let validation = MockFieldValidationService::new().with_validate(
        FormField::FirstName,
        "123".into(),
        Err(FieldError::TooShort {
            field: FormField::FirstName,
            min_len: 5,
        }),
    );

    let sut = MockSut { validation };
    let mut state = FormState::default();

    // Act
    sut.update_field(&mut state, FormField::FirstName, "123".into());

    // Assert
    assert_eq!(state.values.first_name, "123");
    assert_eq!(state.errors.len(), 1);
    assert_eq!(
        state.errors.get(FormField::FirstName).unwrap().to_string(),
        "firstName must have at least 5 characters"
    );
}

#[test]
fn only_touches_updated_field() {
    // Arrange
    let sut = Sut::default();
    let mut state = FormState::default();

    // Act
    sut.update_field(&mut state, FormField::FirstName, "123".into());

    // Assert
    assert_eq!(
        state.errors.iter().map(FieldError::field).collect::<Vec<_>>(),
        [FormField::FirstName]
    );
}

#[test]
fn valid_value_clears_previous_error() {
    // Arrange
    let sut = Sut::default();
    let mut state = FormState::default();
    sut.update_field(&mut state, FormField::Email, "john123@hotmail".into());
    assert_eq!(
        state.errors.get(FormField::Email),
        Some(&FieldError::InvalidEmailFormat)
    );

    // Act
    sut.update_field(&mut state, FormField::Email, "john123@hotmail.com".into());

    // Assert
    assert!(state.errors.is_empty());
    assert_eq!(state.values.email, "john123@hotmail.com");
}

#[test]
fn error_follows_latest_value() {
    // Arrange
    let sut = Sut::default();
    let mut state = FormState::default();

    // Act
    for value in ["j", "john123", "john123@", "john123@hotmail"] {
        sut.update_field(&mut state, FormField::Email, value.into());
    }
    sut.update_field(&mut state, FormField::LastName, String::new());

    // Assert
    assert_eq!(
        state.errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
        [
            "lastName is a required field",
            "email must be a valid email address"
        ]
    );
}

#[test]
fn keeps_submitted_snapshot() {
    // Arrange
    let sut = Sut::default();
    let mut state = FormState {
        submitted: Some(contact_form_demo::MAX_SNAPSHOT.clone()),
        ..Default::default()
    };

    // Act
    sut.update_field(&mut state, FormField::Message, "another one".into());

    // Assert
    assert_eq!(state.submitted.as_ref(), Some(&*contact_form_demo::MAX_SNAPSHOT));
}
