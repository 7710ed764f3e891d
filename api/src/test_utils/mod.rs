//! Test utilities
//!
//! Hand-written mocks of the port traits and fixtures for unit and HTTP
//! tests. The mocks record upstream calls so tests can assert on order.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
