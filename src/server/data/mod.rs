//! Database repository layer.
//!
//! Repositories handle database operations (CRUD) for each domain. They use SeaORM
//! entity models internally and accept already validated input, leaving business
//! rules to the service layer.

pub mod game;
