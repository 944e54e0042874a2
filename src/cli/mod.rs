//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `generate` | Write a synthetic project, its `blueprint.json` and `dependencies.png` |
//! | `render` | Re-render the dependency matrix of a stored blueprint |
//! | `validate` | Report java modules that depend on android modules, and cycles |
//! | `chain` | Print one generated class and its entry point |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug logs on stderr; `RUST_LOG` takes
//! precedence when set:
//! ```bash
//! poet --verbose generate --android 2 --java 4
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod generate;
mod render_cmd;
mod validate;
mod chain_cmd;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
