//! Cross-cutting HTTP plumbing shared by Rentman services.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
