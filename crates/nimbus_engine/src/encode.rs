use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tiny_skia::Pixmap;

use crate::types::GenerationError;

/// Fixed download filename, constant regardless of input.
pub const DOWNLOAD_FILENAME: &str = "my_word_cloud.png";
/// Mime type of the download artifact.
pub const DOWNLOAD_MIME: &str = "image/png";

/// The encoded image offered to the user. Filename and mime type are fixed
/// and not part of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub bytes: Vec<u8>,
}

impl DownloadArtifact {
    pub fn filename(&self) -> &'static str {
        DOWNLOAD_FILENAME
    }

    pub fn mime(&self) -> &'static str {
        DOWNLOAD_MIME
    }
}

/// Encodes a pixmap as PNG. The premultiplied canvas is converted back to
/// straight alpha first, since PNG stores unassociated alpha.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, GenerationError> {
    let mut rgba = Vec::with_capacity((pixmap.width() * pixmap.height() * 4) as usize);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(&rgba, pixmap.width(), pixmap.height(), ExtendedColorType::Rgba8)
        .map_err(|e| GenerationError::Encode(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::{encode_png, DownloadArtifact, DOWNLOAD_FILENAME, DOWNLOAD_MIME};
    use tiny_skia::Pixmap;

    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn encoded_buffer_carries_png_signature() {
        let mut pixmap = Pixmap::new(4, 3).unwrap();
        pixmap.fill(tiny_skia::Color::from_rgba8(10, 20, 30, 255));
        let bytes = encode_png(&pixmap).unwrap();
        assert!(bytes.len() > PNG_SIGNATURE.len());
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn artifact_metadata_is_constant() {
        let artifact = DownloadArtifact { bytes: Vec::new() };
        assert_eq!(artifact.filename(), DOWNLOAD_FILENAME);
        assert_eq!(artifact.mime(), DOWNLOAD_MIME);
        assert_eq!(DOWNLOAD_FILENAME, "my_word_cloud.png");
        assert_eq!(DOWNLOAD_MIME, "image/png");
    }
}
