//! Common test utilities for integration tests.
//!
//! # Module Structure
//!
//! - `fixtures`: deterministic data generators
//! - `oracles`: brute-force reference answers for small inputs

pub mod fixtures;
pub mod oracles;
