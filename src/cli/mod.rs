//! # CLI Module
//!
//! Command-line front end for the declaration loader.
//!
//! ## Commands
//!
//! ### `check`
//!
//! Validate every declaration in a file:
//!
//! ```bash
//! brrtrouter-schemes check --file openapi.yaml
//! ```
//!
//! Options:
//! - `--file <FILE>` - Declaration file or OpenAPI document (required)
//! - `--allow-errors` - Report issues but exit 0
//!
//! ### `render`
//!
//! Print the `components.securitySchemes` entries:
//!
//! ```bash
//! brrtrouter-schemes render --file schemes.toml --format yaml
//! ```
//!
//! Both commands accept `--strict-urls`. Logs go to stderr and are
//! configured through `BRRTR_LOG_*` / `RUST_LOG`.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{render_fragments, run_cli, Cli, Commands, OutputFormat};
