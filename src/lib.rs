pub mod config;
pub mod error;
pub mod gateway;
pub mod knowledge;
pub mod llm;
pub mod prompt;
pub mod server;
pub mod serverless;

pub use error::{Error, Result};
