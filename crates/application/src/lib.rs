//! Hearth DNS Application Layer
//!
//! Ports the DNS engine and the admin surface depend on, and the use cases
//! that sit between them.
pub mod ports;
pub mod use_cases;
