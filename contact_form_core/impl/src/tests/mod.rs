use contact_form_core_contracts::MockFieldValidationService;

use crate::{validation::FieldValidationServiceImpl, ContactFormServiceImpl};

mod update_field;

type Sut = ContactFormServiceImpl<FieldValidationServiceImpl>;
type MockSut = ContactFormServiceImpl<MockFieldValidationService>;
