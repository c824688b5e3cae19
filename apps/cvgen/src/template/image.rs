//! Data URI decoding for the applicant photo.

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};

use crate::document::ImageFormat;
use crate::template::TemplateError;

/// Standard alphabet that accepts payloads with or without `=` padding.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Detects the image format from the data URI prefix.
///
/// Anything that is not declared as PNG is treated as JPEG.
pub fn image_format(data_uri: &str) -> ImageFormat {
    if data_uri.starts_with("data:image/png") {
        ImageFormat::Png
    } else {
        ImageFormat::Jpeg
    }
}

/// Decodes the base64 payload that follows the first comma of a data URI.
pub fn base64_to_bytes(data_uri: &str) -> Result<Vec<u8>, TemplateError> {
    let payload = data_uri
        .split_once(',')
        .map(|(_, payload)| payload.trim())
        .filter(|payload| !payload.is_empty())
        .ok_or(TemplateError::InvalidDataUri)?;

    // Line-wrapped base64 is common in pasted data URIs.
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(LENIENT.decode(compact)?)
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD;

    use super::*;

    const PNG_1X1: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

    #[test]
    fn test_png_prefix_detected() {
        assert_eq!(image_format("data:image/png;base64,AAAA"), ImageFormat::Png);
    }

    #[test]
    fn test_jpeg_and_jpg_prefixes_detected() {
        assert_eq!(image_format("data:image/jpeg;base64,AAAA"), ImageFormat::Jpeg);
        assert_eq!(image_format("data:image/jpg;base64,AAAA"), ImageFormat::Jpeg);
    }

    #[test]
    fn test_unknown_format_falls_back_to_jpeg() {
        assert_eq!(image_format("data:image/webp;base64,AAAA"), ImageFormat::Jpeg);
        assert_eq!(image_format("not a uri"), ImageFormat::Jpeg);
    }

    #[test]
    fn test_decoded_payload_reencodes_to_input() {
        let uri = format!("data:image/png;base64,{PNG_1X1}");
        let bytes = base64_to_bytes(&uri).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        assert_eq!(STANDARD.encode(&bytes), PNG_1X1);
    }

    #[test]
    fn test_missing_comma_is_invalid_data_uri() {
        let err = base64_to_bytes("data:image/png;base64").unwrap_err();
        assert!(matches!(err, TemplateError::InvalidDataUri));
        assert_eq!(err.to_string(), "Invalid data URI: missing base64 part");
    }

    #[test]
    fn test_empty_payload_is_invalid_data_uri() {
        let err = base64_to_bytes("data:image/png;base64,").unwrap_err();
        assert!(matches!(err, TemplateError::InvalidDataUri));
    }

    #[test]
    fn test_corrupt_payload_is_decode_error() {
        let err = base64_to_bytes("data:image/png;base64,@@@not-base64@@@").unwrap_err();
        assert!(matches!(err, TemplateError::Base64(_)));
    }

    #[test]
    fn test_unpadded_payload_is_accepted() {
        let bytes = base64_to_bytes("data:image/png;base64,iVBORw0KGgo").unwrap();
        assert_eq!(bytes, [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);

        let unpadded = PNG_1X1.trim_end_matches('=');
        let bytes = base64_to_bytes(&format!("data:image/png;base64,{unpadded}")).unwrap();
        assert_eq!(STANDARD.encode(bytes), PNG_1X1);
    }

    #[test]
    fn test_wrapped_payload_is_accepted() {
        let (head, tail) = PNG_1X1.split_at(20);
        let uri = format!("data:image/png;base64,{head}\n{tail}");
        let bytes = base64_to_bytes(&uri).unwrap();
        assert_eq!(STANDARD.encode(bytes), PNG_1X1);
    }
}
