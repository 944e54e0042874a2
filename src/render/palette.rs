//! Matrix colors

use image::Rgb;

use crate::domain::{EdgeClass, ModuleCategory};

/// Colors used by the matrix image
pub struct Palette;

impl Palette {
    pub const BACKGROUND: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
    pub const GRID: Rgb<u8> = Rgb([0xAF, 0xAF, 0xAF]);
    pub const APP: Rgb<u8> = Rgb([0x50, 0x50, 0xFF]);
    pub const ANDROID_LIBRARY: Rgb<u8> = Rgb([0xA4, 0xC6, 0x39]);
    pub const JAVA_LIBRARY: Rgb<u8> = Rgb([0xF7, 0xDB, 0x64]);
    pub const DEPENDENCY: Rgb<u8> = Rgb([0x00, 0xAF, 0x00]);
    pub const ERROR: Rgb<u8> = Rgb([0xAF, 0x00, 0x00]);

    pub fn header(category: ModuleCategory) -> Rgb<u8> {
        match category {
            ModuleCategory::App => Self::APP,
            ModuleCategory::AndroidLibrary => Self::ANDROID_LIBRARY,
            ModuleCategory::JavaLibrary => Self::JAVA_LIBRARY,
        }
    }

    pub fn edge(class: EdgeClass) -> Rgb<u8> {
        match class {
            EdgeClass::Valid => Self::DEPENDENCY,
            EdgeClass::Error => Self::ERROR,
        }
    }
}
