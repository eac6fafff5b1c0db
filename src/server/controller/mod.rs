pub mod admin;
pub mod prompt;
