pub use super::plugin_option::Entity as PluginOption;
pub use super::prompt_message::Entity as PromptMessage;
