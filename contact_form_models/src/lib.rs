pub mod contact;
pub mod email_address;
pub mod error;
pub mod field;
pub mod state;
