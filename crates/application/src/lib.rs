//! Application layer - Use cases and orchestration
//!
//! Contains the city lookup and weather proxy services plus the port
//! definitions their infrastructure adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
