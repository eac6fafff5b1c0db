//! Server-side domain models and operation outcomes.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary.

pub mod prompt_config;
pub mod prompt_message;
