//! Deterministic, pure operations behind every toolkit endpoint.
//!
//! Core modules must be free of I/O side effects. Each one validates its
//! input, computes a result, and returns it or a [`crate::error::ToolkitError`].

pub mod arithmetic;
pub mod factorial;
pub mod interest;
pub mod number;
pub mod palindrome;
pub mod temperature;
