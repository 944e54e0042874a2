//! Pixel geometry of the matrix image

/// Side of a cell or header swatch
pub const CELL_SIZE: u32 = 3;

/// Width of a grid line
pub const LINE_WIDTH: u32 = 1;

/// Offset of the lattice from the image edge
pub const HEADER_SIZE: u32 = CELL_SIZE + 2 * LINE_WIDTH;

/// Distance between two lattice slots
pub const GRID_SIZE: u32 = CELL_SIZE + LINE_WIDTH;

/// Largest RGB buffer the painter will allocate (1 GiB)
pub const MAX_IMAGE_BYTES: u64 = 1 << 30;

/// Side length of the image for `modules` modules
///
/// Returns None if the side overflows or the RGB buffer would exceed
/// [`MAX_IMAGE_BYTES`].
pub fn image_size(modules: usize) -> Option<u32> {
    let modules = u32::try_from(modules).ok()?;
    let side = modules
        .checked_mul(GRID_SIZE)?
        .checked_add(HEADER_SIZE + LINE_WIDTH)?;

    let bytes = u64::from(side) * u64::from(side) * 3;
    (bytes <= MAX_IMAGE_BYTES).then_some(side)
}

/// Offset of slot `index` along either axis
pub fn header_offset(index: u32) -> u32 {
    HEADER_SIZE + LINE_WIDTH + GRID_SIZE * index
}

/// Top-left pixel `(x, y)` of the cell at `row`, `column`
pub fn cell_origin(row: u32, column: u32) -> (u32, u32) {
    (header_offset(column), header_offset(row))
}
