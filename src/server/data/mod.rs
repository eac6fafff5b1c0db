//! Database repository layer.
//!
//! Repositories handle the database operations (CRUD) for each table. They use SeaORM
//! entity models internally and return domain models to keep entities out of the service
//! and controller layers. Repositories are generic over `ConnectionTrait` so the same
//! queries run on the connection pool or inside a transaction.

pub mod plugin_option;
pub mod prompt_message;

#[cfg(test)]
mod test;
