//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (HTTP handlers) and
//! driven adapters (registry-backed catalog, configuration).

pub mod driven_adapters;
pub mod driving_adapters;
