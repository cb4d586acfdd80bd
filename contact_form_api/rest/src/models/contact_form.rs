use contact_form_models::error::ErrorSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ApiFieldUpdate {
    /// New value of the field
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiFieldErrors {
    /// Current error message of every invalid field, keyed by field name
    pub errors: ErrorSet,
}
