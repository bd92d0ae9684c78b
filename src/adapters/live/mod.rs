//! Live adapters for real external interactions.

pub mod gateway;

pub use gateway::HttpTaskGateway;
