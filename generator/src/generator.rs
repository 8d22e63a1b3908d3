use crate::error::GenerateError;
use crate::label::LabelFont;
use crate::qr::{render_code, with_label};
use checkpoint_common::network::{local_ipv4, scan_url};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Produces labeled QR images pointing at the checkpoint server.
#[derive(Debug)]
pub struct QrGenerator {
    port: u16,
    output_dir: PathBuf,
    label_prefix: String,
    font: LabelFont,
}

impl QrGenerator {
    pub fn new(port: u16, output_dir: impl Into<PathBuf>, label_prefix: impl Into<String>, font: LabelFont) -> Self {
        Self {
            port,
            output_dir: output_dir.into(),
            label_prefix: label_prefix.into(),
            font,
        }
    }

    /// Writes the image for `identifier` to `<output dir>/<filename>`,
    /// replacing any existing file, and returns its path.
    ///
    /// The server address is resolved for every image.
    pub fn generate(&self, identifier: &str, filename: &str) -> Result<PathBuf, GenerateError> {
        let url = scan_url(local_ipv4(), self.port, identifier);
        let code = render_code(&url)?;
        let label = format!("{}: {}", self.label_prefix, identifier);
        let image = with_label(&code, &label, &self.font);

        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(filename);
        image.save(&path)?;

        info!("Generated QR code for '{}' saved as {}", identifier, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn decode(path: &std::path::Path) -> String {
        let img = image::open(path).unwrap().to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            img.width() as usize,
            img.height() as usize,
            |x, y| img.get_pixel(x as u32, y as u32).0[0],
        );
        prepared
            .detect_grids()
            .into_iter()
            .find_map(|grid| grid.decode().ok())
            .map(|(_, content)| content)
            .expect("no decodable QR code in image")
    }

    #[test]
    fn encodes_scan_url_for_checkpoint() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("qr_codes");
        let generator = QrGenerator::new(9500, &output, "Sunset Mkuu", LabelFont::Bitmap);

        let path = generator.generate("Checkpoint_3", "checkpoint_3.png").unwrap();

        assert_eq!(path, output.join("checkpoint_3.png"));
        let url = decode(&path);
        let host = url
            .strip_prefix("http://")
            .and_then(|rest| rest.strip_suffix(":9500/scan?qr_code=Checkpoint_3"))
            .unwrap_or_else(|| panic!("unexpected payload {url}"));
        assert!(host.parse::<Ipv4Addr>().is_ok(), "host {host} is not an IPv4 address");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let generator = QrGenerator::new(9500, dir.path(), "Sunset Mkuu", LabelFont::Bitmap);
        let target = dir.path().join("visitor_123.png");
        fs::write(&target, b"stale").unwrap();

        generator.generate("VISITOR_123", "visitor_123.png").unwrap();

        assert!(image::open(&target).is_ok());
    }
}
