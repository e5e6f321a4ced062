//! JSON output for the console.
//!
//! Payloads are pretty-printed with 2-space indentation. Credentials are
//! masked and null fields dropped before printing.

mod json;

pub use json::*;
