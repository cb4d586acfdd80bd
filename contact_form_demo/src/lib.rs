use std::sync::LazyLock;

use contact_form_models::contact::{FieldValues, SubmittedSnapshot};
use contact_form_utils::Apply;

pub static EMPTY: LazyLock<FieldValues> = LazyLock::new(FieldValues::default);

/// The shortest values that pass validation, without a message.
pub static MINIMAL: LazyLock<FieldValues> = LazyLock::new(|| FieldValues {
    first_name: "12345".into(),
    last_name: "1".into(),
    email: "john123@hotmail.com".into(),
    message: String::new(),
});

pub static MINIMAL_WITH_MESSAGE: LazyLock<FieldValues> = LazyLock::new(|| {
    MINIMAL
        .clone()
        .with(|values| values.message = "hello this is a message".into())
});

pub static MAX: LazyLock<FieldValues> = LazyLock::new(|| FieldValues {
    first_name: "Maximilian".into(),
    last_name: "Mustermann".into(),
    email: "max.mustermann@example.de".into(),
    message: "Hello World!".into(),
});

pub static MINIMAL_SNAPSHOT: LazyLock<SubmittedSnapshot> =
    LazyLock::new(|| snapshot(&MINIMAL));
pub static MINIMAL_WITH_MESSAGE_SNAPSHOT: LazyLock<SubmittedSnapshot> =
    LazyLock::new(|| snapshot(&MINIMAL_WITH_MESSAGE));
pub static MAX_SNAPSHOT: LazyLock<SubmittedSnapshot> = LazyLock::new(|| snapshot(&MAX));

fn snapshot(values: &FieldValues) -> SubmittedSnapshot {
    values.clone().try_into().unwrap()
}
