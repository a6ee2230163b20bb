pub mod error;
pub mod validators;
