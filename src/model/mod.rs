//! Program-level models
//!
//! - `arg`: command line arguments
//! - `config`: optional JSON configuration file

pub mod arg;
pub mod config;
