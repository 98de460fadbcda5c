//! Shared types for the text simplifier: request/result shapes,
//! application configuration and errors.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ServerConfig, SimplifierConfig};
pub use error::{Result, TsError};
pub use types::{SimplifyParams, SimplifyRequest, SimplifyResult};

#[cfg(test)]
mod tests;
