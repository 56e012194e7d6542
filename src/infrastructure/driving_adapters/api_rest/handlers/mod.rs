//! HTTP Handlers

pub mod networks;
pub mod node;
