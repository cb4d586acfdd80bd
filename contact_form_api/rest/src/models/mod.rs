use serde::Serialize;

pub mod contact_form;

#[derive(Serialize)]
pub struct ApiError {
    pub detail: &'static str,
}
