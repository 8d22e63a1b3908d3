//! Label text rendering with a font fallback chain.
//!
//! Fonts are tried in order: an explicitly configured file, then a short list
//! of common sans-serif faces found in the platform font directories, then the
//! 8x8 bitmap font compiled into the binary. The last step cannot fail, so a
//! machine without any fonts still produces labeled images.

use ab_glyph::{FontVec, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use glob::Pattern;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

const SYSTEM_FONTS: &[&str] = &["arial.ttf", "LiberationSans-Regular.ttf", "DejaVuSans.ttf"];
const FONT_PX: f32 = 20.0;
const BITMAP_GLYPH: u32 = 8;
const INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Font used to draw the identifier label above each code.
pub enum LabelFont {
    Vector(FontVec),
    /// Built-in `font8x8` glyphs, scaled up to roughly match the vector size.
    Bitmap,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelFont::Vector(_) => f.write_str("LabelFont::Vector"),
            LabelFont::Bitmap => f.write_str("LabelFont::Bitmap"),
        }
    }
}

impl LabelFont {
    /// Loads the first usable font, trying `preferred` before the system fonts.
    pub fn load(preferred: Option<&Path>) -> Self {
        let candidates = preferred
            .map(Path::to_path_buf)
            .into_iter()
            .chain(SYSTEM_FONTS.iter().flat_map(|name| locate(name)));
        Self::first_usable(candidates)
    }

    fn first_usable(candidates: impl IntoIterator<Item = PathBuf>) -> Self {
        for path in candidates {
            match fs::read(&path).map(FontVec::try_from_vec) {
                Ok(Ok(font)) => {
                    debug!("Using label font {}", path.display());
                    return LabelFont::Vector(font);
                }
                Ok(Err(err)) => warn!("Skipping font {}: {}", path.display(), err),
                Err(err) => debug!("Font {} unavailable: {}", path.display(), err),
            }
        }

        debug!("No TrueType font found, using built-in bitmap font");
        LabelFont::Bitmap
    }

    /// Draws `text` horizontally centered on `canvas`, with its top edge at `top`.
    pub fn draw_centered(&self, canvas: &mut RgbImage, text: &str, top: i32) {
        match self {
            LabelFont::Vector(font) => {
                let (width, _) = text_size(PxScale::from(FONT_PX), font, text);
                let x = centered(canvas.width(), width);
                draw_text_mut(canvas, INK, x, top, PxScale::from(FONT_PX), font, text);
            }
            LabelFont::Bitmap => draw_bitmap(canvas, text, top),
        }
    }
}

/// Candidate paths for `name`: the working directory first, then font directories.
fn locate(name: &str) -> Vec<PathBuf> {
    let mut found = vec![PathBuf::from(name)];
    for dir in font_dirs() {
        let pattern = format!("{}/**/{}", Pattern::escape(&dir.to_string_lossy()), name);
        if let Ok(paths) = glob::glob(&pattern) {
            found.extend(paths.flatten());
        }
    }
    found
}

fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if cfg!(windows) {
        dirs.push(PathBuf::from(r"C:\Windows\Fonts"));
    } else if cfg!(target_os = "macos") {
        dirs.push(PathBuf::from("/Library/Fonts"));
        dirs.push(PathBuf::from("/System/Library/Fonts"));
    } else {
        dirs.push(PathBuf::from("/usr/share/fonts"));
        dirs.push(PathBuf::from("/usr/local/share/fonts"));
    }
    if let Some(dir) = dirs::font_dir() {
        dirs.push(dir);
    }
    dirs
}

fn centered(canvas_width: u32, text_width: u32) -> i32 {
    (canvas_width.saturating_sub(text_width) / 2) as i32
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or_default()
}

fn draw_bitmap(canvas: &mut RgbImage, text: &str, top: i32) {
    let chars = text.chars().count() as u32;
    // Largest scale that still fits; long labels fall back to 1x and clip.
    let scale = (1..=2)
        .rev()
        .find(|s| chars * BITMAP_GLYPH * s <= canvas.width())
        .unwrap_or(1);
    let advance = BITMAP_GLYPH * scale;
    let left = centered(canvas.width(), chars * advance);

    for (i, c) in text.chars().enumerate() {
        let origin_x = left + (i as u32 * advance) as i32;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..BITMAP_GLYPH {
                if bits & (1 << col) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        let x = origin_x + (col * scale + dx) as i32;
                        let y = top + (row as u32 * scale + dy) as i32;
                        if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
                            canvas.put_pixel(x as u32, y as u32, INK);
                        }
                    }
                }
            }
        }
    }
}
