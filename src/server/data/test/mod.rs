mod plugin_option;
mod prompt_message;
