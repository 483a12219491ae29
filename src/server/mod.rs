//! Server-side API backend.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, id checks, and DTO conversion
//! - **Service Layer** (`service/`) - Validation and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations on SeaORM entities
//! - **Model Layer** (`model/`) - Domain models, operation inputs, and validation
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request logging and the terminal error handler
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, configuration)
//! - **Startup** (`startup`) - Logging, database connection, migrations, shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Middleware** logs the request
//! 2. **Router** routes to the appropriate controller
//! 3. **Controller** checks the id shape, converts the DTO to service input
//! 4. **Service** validates, calls the repository, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO inside the response envelope
//! 6. On failure, `AppError` builds the error response and the terminal
//!    middleware adds diagnostics in development mode

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
