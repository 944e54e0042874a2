//! Painting the matrix into a raster

use image::{Rgb, RgbImage};
use thiserror::Error;

use super::geometry::{
    cell_origin, header_offset, image_size, CELL_SIZE, GRID_SIZE, HEADER_SIZE, LINE_WIDTH,
};
use super::palette::Palette;
use crate::domain::{DependencyMatrix, MatrixError, ProjectBlueprint};

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("Cannot render {0} modules: image would exceed the 1 GiB pixel buffer limit")]
    TooLarge(usize),
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    for py in y..y.saturating_add(height).min(img.height()) {
        for px in x..x.saturating_add(width).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}

/// Paints a classified matrix
pub fn paint(matrix: &DependencyMatrix) -> Result<RgbImage, RenderError> {
    let modules = matrix.size();
    let size = image_size(modules).ok_or(RenderError::TooLarge(modules))?;
    let mut img = RgbImage::from_pixel(size, size, Palette::BACKGROUND);

    // Grid lines, horizontal and vertical
    for i in 0..=modules as u32 {
        let offset = HEADER_SIZE + i * GRID_SIZE;
        fill_rect(&mut img, HEADER_SIZE, offset, size - HEADER_SIZE, LINE_WIDTH, Palette::GRID);
        fill_rect(&mut img, offset, HEADER_SIZE, LINE_WIDTH, size - HEADER_SIZE, Palette::GRID);
    }

    for (index, category) in matrix.headers.iter().enumerate() {
        let offset = header_offset(index as u32);
        let color = Palette::header(*category);
        fill_rect(&mut img, LINE_WIDTH, offset, CELL_SIZE, CELL_SIZE, color);
        fill_rect(&mut img, offset, LINE_WIDTH, CELL_SIZE, CELL_SIZE, color);
    }

    for cell in &matrix.cells {
        let (x, y) = cell_origin(cell.row as u32, cell.column as u32);
        fill_rect(&mut img, x, y, CELL_SIZE, CELL_SIZE, Palette::edge(cell.class));
    }

    tracing::debug!(
        modules,
        size,
        cells = matrix.cells.len(),
        errors = matrix.error_count(),
        "painted dependency matrix"
    );

    Ok(img)
}

/// Classifies and paints a project's dependency matrix
pub fn paint_project(project: &ProjectBlueprint) -> Result<RgbImage, RenderError> {
    let matrix = DependencyMatrix::from_project(project)?;
    paint(&matrix)
}
