use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use crate::shared::constants::JPEG_DATA_URL_PREFIX;
use crate::shared::frame::Frame;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("frame dimensions do not match buffer size")]
    InvalidFrame,
    #[error("failed to encode JPEG: {0}")]
    Jpeg(#[from] image::ImageError),
}

/// Serializes an RGB frame to a JPEG byte stream at the encoder's
/// default quality.
pub fn encode_jpeg(frame: &Frame) -> Result<Vec<u8>, EncodeError> {
    let img = image::RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
        .ok_or(EncodeError::InvalidFrame)?;
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Jpeg)?;
    Ok(buf)
}

/// Serializes an RGB frame to a `data:image/jpeg;base64,...` string
/// suitable for embedding in a JSON payload or an image tag.
pub fn encode_data_url(frame: &Frame) -> Result<String, EncodeError> {
    let jpeg = encode_jpeg(frame)?;
    Ok(format!("{JPEG_DATA_URL_PREFIX}{}", STANDARD.encode(jpeg)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode::decode_base64_image;

    fn make_frame(width: u32, height: u32) -> Frame {
        let data: Vec<u8> = (0..width * height)
            .flat_map(|i| [(i % 251) as u8, 100, 200])
            .collect();
        Frame::new(data, width, height, 3)
    }

    #[test]
    fn test_encode_jpeg_produces_jpeg_magic() {
        let jpeg = encode_jpeg(&make_frame(20, 10)).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_data_url_has_jpeg_prefix() {
        let url = encode_data_url(&make_frame(8, 8)).unwrap();
        assert!(url.starts_with(JPEG_DATA_URL_PREFIX));
        assert!(url.len() > JPEG_DATA_URL_PREFIX.len());
    }

    #[test]
    fn test_roundtrip_preserves_dimensions() {
        // Pixel values may shift under lossy compression; dimensions must not.
        let url = encode_data_url(&make_frame(33, 17)).unwrap();
        let decoded = decode_base64_image(&url).unwrap();
        assert_eq!(decoded.width(), 33);
        assert_eq!(decoded.height(), 17);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let frame = make_frame(24, 24);
        assert_eq!(encode_data_url(&frame).unwrap(), encode_data_url(&frame).unwrap());
    }
}
