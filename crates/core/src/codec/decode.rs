use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use crate::shared::frame::Frame;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("empty image payload")]
    Empty,
    #[error("malformed base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("unrecognized image data: {0}")]
    Image(#[from] image::ImageError),
}

/// Decodes a compressed image container (PNG, JPEG, ...) into an RGB frame.
pub fn decode_image(bytes: &[u8]) -> Result<Frame, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }
    let img = image::load_from_memory(bytes)?.to_rgb8();
    let (width, height) = img.dimensions();
    Ok(Frame::new(img.into_raw(), width, height, 3))
}

/// Decodes a textual image payload: either a raw base64 string or a
/// data-URL (`data:<mime>;base64,<payload>`).
///
/// A `data:` header is stripped through the first comma; everything
/// else is handed to the base64 decoder as-is.
pub fn decode_base64_image(text: &str) -> Result<Frame, DecodeError> {
    let payload = strip_data_url_header(text);
    if payload.is_empty() {
        return Err(DecodeError::Empty);
    }
    let bytes = STANDARD.decode(payload)?;
    decode_image(&bytes)
}

fn strip_data_url_header(text: &str) -> &str {
    if !text.starts_with("data:") {
        return text;
    }
    match text.split_once(',') {
        Some((_header, payload)) => payload,
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([50, 100, 200]));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_decode_image_dimensions_and_pixels() {
        let frame = decode_image(&png_bytes(40, 30)).unwrap();
        assert_eq!(frame.width(), 40);
        assert_eq!(frame.height(), 30);
        assert_eq!(frame.channels(), 3);
        assert_eq!(&frame.data()[..3], &[50, 100, 200]);
    }

    #[test]
    fn test_decode_image_empty_payload() {
        assert!(matches!(decode_image(&[]), Err(DecodeError::Empty)));
    }

    #[test]
    fn test_decode_image_garbage_bytes() {
        let result = decode_image(b"definitely not an image container");
        assert!(matches!(result, Err(DecodeError::Image(_))));
    }

    #[test]
    fn test_decode_base64_raw_string() {
        let b64 = STANDARD.encode(png_bytes(16, 16));
        let frame = decode_base64_image(&b64).unwrap();
        assert_eq!(frame.width(), 16);
        assert_eq!(frame.height(), 16);
    }

    #[test]
    fn test_decode_base64_data_url() {
        let b64 = STANDARD.encode(png_bytes(16, 8));
        let url = format!("data:image/png;base64,{b64}");
        let frame = decode_base64_image(&url).unwrap();
        assert_eq!(frame.width(), 16);
        assert_eq!(frame.height(), 8);
    }

    #[rstest]
    #[case::bad_chars("not-base64!!")]
    #[case::header_without_comma("data:image/png;base64")]
    fn test_decode_base64_malformed(#[case] payload: &str) {
        assert!(matches!(
            decode_base64_image(payload),
            Err(DecodeError::Base64(_))
        ));
    }

    #[test]
    fn test_decode_base64_empty_payload_after_header() {
        assert!(matches!(
            decode_base64_image("data:image/png;base64,"),
            Err(DecodeError::Empty)
        ));
    }

    #[test]
    fn test_decode_base64_valid_base64_but_not_an_image() {
        let b64 = STANDARD.encode(b"plain text, not pixels");
        assert!(matches!(
            decode_base64_image(&b64),
            Err(DecodeError::Image(_))
        ));
    }
}
