use crate::server::data::plugin_option::PluginOptionRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get;
mod set;
