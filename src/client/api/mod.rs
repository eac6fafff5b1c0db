pub mod helper;
pub mod prompt;

pub use prompt::get_prompt_config;
