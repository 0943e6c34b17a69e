use std::path::Path;

use crate::types::{GenerationError, Rgba};

/// Outline drawn around the mask silhouette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourStyle {
    /// Stroke width in canvas pixels.
    pub width: f32,
    pub color: Rgba,
}

/// Shape constraint for word placement. Near-white pixels of the source
/// image are excluded regions where no word may land; everything else is
/// placeable. The mask's dimensions become the canvas dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskImage {
    width: u32,
    height: u32,
    excluded: Vec<bool>,
}

/// Luma at or above this is treated as background, matching the common
/// convention that white mask areas reject words.
const EXCLUDED_LUMA: u8 = 250;

impl MaskImage {
    /// Builds a mask from an 8-bit grayscale pixel grid.
    pub fn from_luma(width: u32, height: u32, pixels: &[u8]) -> Result<Self, GenerationError> {
        if width == 0 || height == 0 || pixels.len() != (width * height) as usize {
            return Err(GenerationError::Mask(format!(
                "bad mask dimensions {width}x{height} for {} pixels",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            excluded: pixels.iter().map(|&l| l >= EXCLUDED_LUMA).collect(),
        })
    }

    /// Decodes an encoded image (PNG) into a mask.
    pub fn from_bytes(data: &[u8]) -> Result<Self, GenerationError> {
        let decoded = image::load_from_memory(data)
            .map_err(|e| GenerationError::Mask(format!("decode failed: {e}")))?;
        let luma = decoded.to_luma8();
        Self::from_luma(luma.width(), luma.height(), luma.as_raw())
    }

    pub fn from_file(path: &Path) -> Result<Self, GenerationError> {
        let data = std::fs::read(path)
            .map_err(|e| GenerationError::Mask(format!("cannot read {}: {e}", path.display())))?;
        Self::from_bytes(&data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_excluded(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return true;
        }
        self.excluded[(y * self.width + x) as usize]
    }

    /// Placeable pixels that touch an excluded pixel; the contour is drawn
    /// along these. Canvas edges alone do not count as boundary.
    pub fn boundary_cells(&self) -> Vec<(u32, u32)> {
        let mut cells = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_excluded(x, y) {
                    continue;
                }
                let excluded_neighbor = (x > 0 && self.is_excluded(x - 1, y))
                    || (y > 0 && self.is_excluded(x, y - 1))
                    || (x + 1 < self.width && self.is_excluded(x + 1, y))
                    || (y + 1 < self.height && self.is_excluded(x, y + 1));
                if excluded_neighbor {
                    cells.push((x, y));
                }
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::MaskImage;

    // A 4x4 mask with a white (excluded) border and a dark 2x2 core.
    fn ring_mask() -> MaskImage {
        let mut pixels = vec![255u8; 16];
        pixels[5] = 0;
        pixels[6] = 0;
        pixels[9] = 0;
        pixels[10] = 0;
        MaskImage::from_luma(4, 4, &pixels).unwrap()
    }

    #[test]
    fn white_pixels_are_excluded() {
        let mask = ring_mask();
        assert!(mask.is_excluded(0, 0));
        assert!(!mask.is_excluded(1, 1));
        assert!(!mask.is_excluded(2, 2));
    }

    #[test]
    fn out_of_bounds_counts_as_excluded() {
        let mask = ring_mask();
        assert!(mask.is_excluded(4, 0));
        assert!(mask.is_excluded(0, 4));
    }

    #[test]
    fn boundary_covers_the_dark_core_edge() {
        let mask = ring_mask();
        let cells = mask.boundary_cells();
        // Every placeable pixel of the 2x2 core touches the white ring.
        for cell in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            assert!(cells.contains(&cell), "missing {cell:?}");
        }
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        assert!(MaskImage::from_luma(3, 3, &[0u8; 8]).is_err());
        assert!(MaskImage::from_luma(0, 3, &[]).is_err());
    }
}
