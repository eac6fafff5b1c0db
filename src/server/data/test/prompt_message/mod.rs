use crate::server::data::prompt_message::PromptMessageRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_id;
mod get_all;
mod get_latest;
