//! Request and response processing layers.

pub mod error_handler;
pub mod request_log;
