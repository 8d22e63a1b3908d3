use qrcode::types::QrError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("could not encode QR payload: {0}")]
    Encode(#[from] QrError),

    #[error("I/O error writing QR image: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not save QR image: {0}")]
    Image(#[from] image::ImageError),
}
