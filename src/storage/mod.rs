//! # Storage Layer
//!
//! Everything Poet reads from or writes to disk.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Config | TOML | `poet.toml`, `~/.config/poet/config.toml` |
//! | Blueprint | JSON | `{project}/blueprint.json` |
//! | Matrix image | PNG (RGB, no alpha) | `{project}/dependencies.png` |
//! | Sources | Kotlin or Java | `{project}/{module}/src/(main|test)/java/...` |
//!
//! ## Write Safety
//!
//! - Blueprint and image writes are atomic (locked temp file + rename)
//! - Loading a blueprint decodes every dependency key up front and fails
//!   on the first malformed one
//!
//! ## Generated Project Structure
//!
//! ```text
//! {project}/
//! ├── blueprint.json          # Module list and dependency keys
//! ├── dependencies.png        # Dependency matrix
//! ├── androidAppModule0/      # Launch module
//! │   └── src/main/java/com/poet/androidappmodule0/Foo0.kt
//! └── module0/
//!     ├── src/main/java/com/poet/module0/Foo0.kt
//!     └── src/test/java/com/poet/module0/Foo0Test.kt
//! ```

mod config;
mod blueprint;
mod matrix_image;
mod sources;

pub use config::{Config, ConfigError, OutputSection, ProjectSection, CONFIG_FILE};
pub use blueprint::{blueprint_json, parse_blueprint, BlueprintError, BlueprintStore, BLUEPRINT_FILE};
pub use matrix_image::write_png;
pub use sources::{SourceWriter, WriteSummary};
