//! Port traits defining external boundaries.
//!
//! The only boundary is the remote task store. Implementations live in
//! `src/adapters/`.

pub mod gateway;

pub use gateway::{GatewayFuture, TaskGateway};
