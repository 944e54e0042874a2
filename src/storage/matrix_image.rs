//! PNG output for the dependency matrix
//!
//! The image is encoded into a locked temp file and renamed into place, so
//! a failed write never leaves a partial image at the destination.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use fs2::FileExt;
use image::{ImageFormat, RgbImage};

/// Encodes the image into `temp_path` under an exclusive lock
fn write_locked(img: &RgbImage, temp_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    file.lock_exclusive()
        .context("Failed to acquire write lock on image")?;

    let mut writer = BufWriter::new(&file);
    img.write_to(&mut writer, ImageFormat::Png)
        .context("Failed to encode PNG")?;
    writer.flush().context("Failed to flush image")?;
    Ok(())
}

/// Writes the image as PNG at `path`
pub fn write_png(img: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = path.with_extension("png.tmp");

    let written = write_locked(img, &temp_path).and_then(|()| {
        fs::rename(&temp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                path.display()
            )
        })
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    tracing::info!(path = %path.display(), "Dependency matrix image saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::TempDir;

    #[test]
    fn writes_readable_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("dependencies.png");
        let img = RgbImage::from_pixel(6, 6, Rgb([1, 2, 3]));

        write_png(&img, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (6, 6));
        assert_eq!(*decoded.get_pixel(5, 5), Rgb([1, 2, 3]));
        assert!(!path.with_extension("png.tmp").exists());
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dependencies.png");
        fs::create_dir_all(path.join("occupied")).unwrap();

        assert!(write_png(&RgbImage::new(6, 6), &path).is_err());
        assert!(!path.with_extension("png.tmp").exists());
        assert!(path.is_dir());
    }

    #[test]
    fn overwrites_existing_image() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dependencies.png");

        write_png(&RgbImage::new(6, 6), &path).unwrap();
        write_png(&RgbImage::new(10, 10), &path).unwrap();

        assert_eq!(image::open(&path).unwrap().width(), 10);
    }
}
