use crate::error::GenerateError;
use crate::label::LabelFont;
use image::{imageops, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use qrcode::types::{Color, EcLevel};
use qrcode::QrCode;

/// Edge length of one QR module in pixels.
pub const MODULE_PX: u32 = 10;
/// Quiet zone around the code, in modules.
pub const BORDER_MODULES: u32 = 4;
/// Height of the white band holding the label.
pub const LABEL_HEIGHT: u32 = 50;
const LABEL_TOP: i32 = 10;

const DARK: Rgb<u8> = Rgb([0, 0, 0]);
const LIGHT: Rgb<u8> = Rgb([255, 255, 255]);

/// Encodes `payload` at error-correction level L, picking the smallest version that fits.
pub fn render_code(payload: &str) -> Result<RgbImage, GenerateError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)?;
    let modules = code.width() as u32;
    let side = (modules + 2 * BORDER_MODULES) * MODULE_PX;

    let mut img = RgbImage::from_pixel(side, side, LIGHT);
    for (i, color) in code.to_colors().into_iter().enumerate() {
        if color != Color::Dark {
            continue;
        }
        let x = (i as u32 % modules + BORDER_MODULES) * MODULE_PX;
        let y = (i as u32 / modules + BORDER_MODULES) * MODULE_PX;
        draw_filled_rect_mut(
            &mut img,
            Rect::at(x as i32, y as i32).of_size(MODULE_PX, MODULE_PX),
            DARK,
        );
    }
    Ok(img)
}

/// Stacks a label band on top of `code`.
pub fn with_label(code: &RgbImage, label: &str, font: &LabelFont) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(code.width(), code.height() + LABEL_HEIGHT, LIGHT);
    font.draw_centered(&mut canvas, label, LABEL_TOP);
    imageops::replace(&mut canvas, code, 0, LABEL_HEIGHT as i64);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_has_fixed_module_size_and_border() {
        let img = render_code("http://192.168.1.20:9500/scan?qr_code=Checkpoint_1").unwrap();

        assert_eq!(img.width(), img.height());
        assert_eq!(img.width() % MODULE_PX, 0);
        // Quiet zone is blank, the top-left finder pattern starts right after it.
        let border = BORDER_MODULES * MODULE_PX;
        assert!((0..border).all(|x| *img.get_pixel(x, x) == LIGHT));
        assert_eq!(*img.get_pixel(border, border), DARK);
    }

    #[test]
    fn label_band_sits_above_code() {
        let code = render_code("VISITOR_123").unwrap();
        let labeled = with_label(&code, "Sunset Mkuu: VISITOR_123", &LabelFont::Bitmap);

        assert_eq!(labeled.width(), code.width());
        assert_eq!(labeled.height(), code.height() + LABEL_HEIGHT);
        assert!((0..LABEL_HEIGHT).any(|y| (0..labeled.width()).any(|x| *labeled.get_pixel(x, y) == DARK)));
        let border = BORDER_MODULES * MODULE_PX;
        assert_eq!(*labeled.get_pixel(border, LABEL_HEIGHT + border), DARK);
    }
}
