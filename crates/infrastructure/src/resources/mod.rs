//! Resource discovery from command-line arguments.

mod collector;

pub use collector::{ResourceCollectionError, collect_resources, is_glob};
