//! Settings sources, added to the builder in merge-policy order.

pub mod environment;
pub mod explicit_file;
pub mod global_file;
