//! Business logic layer between controllers and repositories.
//!
//! Services validate input, translate repository results into domain models, and
//! report failures as domain errors that the controller layer propagates to the
//! terminal error handler.

pub mod game;
