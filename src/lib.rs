//! Network Identity Registry
//!
//! Canonical network IDs, names and bech32 address prefixes, the permissive
//! network name parser, sentinel identifiers and value denominations, plus a
//! read-only REST service over them, following Clean/Hexagonal Architecture
//! principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
