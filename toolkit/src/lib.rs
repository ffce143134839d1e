//! Stateless arithmetic and conversion utilities.
//!
//! The crate keeps a strict separation between computation and transport:
//!
//! - **[`core`]**: Pure, deterministic operations (calculator, temperature
//!   conversion, factorial, simple interest, palindrome check). No I/O.
//! - **[`handlers`]**: Parse a request, run the operation, build the response.
//! - **[`types`]**: Request/response shapes shared by the HTTP server and the
//!   `toolkit` CLI so both surfaces emit identical JSON.
//!
//! Failures are reported through [`error::ToolkitError`], which classifies each
//! error into an [`error::ErrorKind`] used by callers to pick a status code.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod handlers;
pub mod logging;
pub mod types;
