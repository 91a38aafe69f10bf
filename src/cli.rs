//! CLI domain: parse, operation, route, output, and presentation only.

mod operation;
mod output;
mod parse;
mod presentation;
mod route;

pub use operation::Operation;
pub use output::map_error;
pub use parse::{Cli, OutputFormat};
pub use presentation::{
    format_entries_json, format_entries_text, format_scopes_json, format_scopes_text,
};
pub use route::{resolve_location, PrintOptions, RunContext};
