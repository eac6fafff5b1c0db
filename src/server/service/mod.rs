//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Bounding the message history, duplicate detection, reactivation
//! - **Orchestration**: Coordinating repository calls inside a single transaction
//! - **Payload Assembly**: Rendering the prompt configuration handed to the client

pub mod prompt_config;
pub mod prompt_message;
