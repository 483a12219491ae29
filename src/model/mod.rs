//! Data transfer objects shared by the HTTP boundary and API documentation.

pub mod api;
pub mod game;
