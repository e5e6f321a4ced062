//! Authentication header resolution

mod header;

pub use header::{AUTHORIZATION, authorization_header};
