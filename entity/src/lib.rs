//! SeaORM entities for the link prompt plugin tables.

pub mod prelude;

pub mod plugin_option;
pub mod prompt_message;
