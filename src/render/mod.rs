//! # Dependency Matrix Rendering
//!
//! Paints a [`DependencyMatrix`](crate::domain::DependencyMatrix) into a square
//! RGB raster.
//!
//! ## Layout
//!
//! ```text
//!  H  H  H          H = header swatch (module category)
//!  H  ┌──┬──┐       ┌ = 1px grid line
//!  H  │  │▓▓│       ▓ = declared dependency (row depends on column)
//!     ├──┼──┤
//!     │▓▓│  │
//!     └──┴──┘
//! ```
//!
//! Modules are laid out in global order (android modules, then java
//! modules) along both axes. Header swatches sit in the first pixel row and
//! column, each aligned with its module's lattice slot.

mod geometry;
mod palette;
mod painter;

pub use geometry::{image_size, CELL_SIZE, GRID_SIZE, HEADER_SIZE, LINE_WIDTH, MAX_IMAGE_BYTES};
pub use palette::Palette;
pub use painter::{paint, paint_project, RenderError};
