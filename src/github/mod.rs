//! GitHub REST API client module

pub mod client;
pub mod errors;
pub mod model;
