use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontVec, Glyph, GlyphId, PxScale, ScaleFont};

use crate::types::GenerationError;

/// Alpha-coverage bitmap for one rasterized word. `coverage` holds one byte
/// per pixel, row-major, `width * height` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSprite {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

impl WordSprite {
    /// Rotates the sprite a quarter turn for vertically placed words.
    pub fn rotated(&self) -> WordSprite {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut coverage = vec![0u8; w * h];
        for y in 0..h {
            for x in 0..w {
                // (x, y) in the source lands at (h - 1 - y, x) in the target.
                coverage[x * h + (h - 1 - y)] = self.coverage[y * w + x];
            }
        }
        WordSprite {
            width: self.height,
            height: self.width,
            coverage,
        }
    }
}

/// Seam between layout/rendering and the font stack. Tests substitute a
/// fixed-box implementation so the pipeline needs no font file.
pub trait GlyphRasterizer: Send + Sync {
    /// Bounding box of `word` at `px` without rasterizing.
    fn measure(&self, word: &str, px: f32) -> (u32, u32);
    /// Rasterizes `word` at `px` into an alpha coverage map.
    fn rasterize(&self, word: &str, px: f32) -> WordSprite;
}

/// TrueType/OpenType rasterizer over a single loaded font.
pub struct FontRasterizer {
    font: FontVec,
}

impl FontRasterizer {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, GenerationError> {
        let font = FontVec::try_from_vec(data)
            .map_err(|e| GenerationError::Font(format!("invalid font data: {e}")))?;
        Ok(Self { font })
    }

    pub fn from_file(path: &Path) -> Result<Self, GenerationError> {
        let data = std::fs::read(path)
            .map_err(|e| GenerationError::Font(format!("cannot read {}: {e}", path.display())))?;
        Self::from_bytes(data)
    }

    /// Loads a sans-serif font from `NIMBUS_FONT` or a list of well-known
    /// system locations.
    pub fn discover() -> Result<Self, GenerationError> {
        if let Ok(path) = std::env::var("NIMBUS_FONT") {
            return Self::from_file(Path::new(&path));
        }
        let candidates = [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
            "/Library/Fonts/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "C:\\Windows\\Fonts\\arialbd.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ];
        for candidate in candidates {
            let path = PathBuf::from(candidate);
            if path.is_file() {
                return Self::from_file(&path);
            }
        }
        Err(GenerationError::Font(
            "no system font found; set NIMBUS_FONT to a .ttf/.otf path".to_string(),
        ))
    }

    /// Positions the word's glyphs along a caret with kerning applied.
    /// Returns the glyphs and the sprite dimensions.
    fn shape(&self, word: &str, px: f32) -> (Vec<Glyph>, u32, u32) {
        let scale = PxScale::from(px);
        let scaled = self.font.as_scaled(scale);
        let ascent = scaled.ascent();
        let height = (ascent - scaled.descent()).ceil().max(1.0);

        let mut glyphs = Vec::with_capacity(word.chars().count());
        let mut caret = 0.0f32;
        let mut last: Option<GlyphId> = None;
        for c in word.chars() {
            let id = self.font.glyph_id(c);
            if let Some(prev) = last {
                caret += scaled.kern(prev, id);
            }
            glyphs.push(id.with_scale_and_position(scale, point(caret, ascent)));
            caret += scaled.h_advance(id);
            last = Some(id);
        }

        (glyphs, caret.ceil().max(1.0) as u32, height as u32)
    }
}

impl GlyphRasterizer for FontRasterizer {
    fn measure(&self, word: &str, px: f32) -> (u32, u32) {
        let (_, width, height) = self.shape(word, px);
        (width, height)
    }

    fn rasterize(&self, word: &str, px: f32) -> WordSprite {
        let (glyphs, width, height) = self.shape(word, px);
        let mut coverage = vec![0u8; (width * height) as usize];
        let scaled = self.font.as_scaled(PxScale::from(px));

        for glyph in glyphs {
            let Some(outlined) = scaled.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, c| {
                let dx = bounds.min.x as i32 + x as i32;
                let dy = bounds.min.y as i32 + y as i32;
                if dx < 0 || dy < 0 || dx >= width as i32 || dy >= height as i32 {
                    return;
                }
                let idx = (dy as u32 * width + dx as u32) as usize;
                let value = (c.clamp(0.0, 1.0) * 255.0) as u8;
                coverage[idx] = coverage[idx].max(value);
            });
        }

        WordSprite {
            width,
            height,
            coverage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FontRasterizer, GlyphRasterizer, WordSprite};

    #[test]
    fn rotation_swaps_dimensions_and_keeps_mass() {
        let sprite = WordSprite {
            width: 3,
            height: 2,
            coverage: vec![10, 0, 0, 0, 0, 20],
        };
        let rotated = sprite.rotated();
        assert_eq!(rotated.width, 2);
        assert_eq!(rotated.height, 3);
        let mass: u32 = sprite.coverage.iter().map(|&c| c as u32).sum();
        let rotated_mass: u32 = rotated.coverage.iter().map(|&c| c as u32).sum();
        assert_eq!(mass, rotated_mass);
    }

    // Exercises the real font stack only when a system font can be found;
    // CI images without fonts skip silently.
    #[test]
    fn system_font_renders_nonempty_coverage() {
        let Ok(rasterizer) = FontRasterizer::discover() else {
            return;
        };
        let (w, h) = rasterizer.measure("cloud", 32.0);
        assert!(w > h);
        let sprite = rasterizer.rasterize("cloud", 32.0);
        assert_eq!(sprite.coverage.len(), (sprite.width * sprite.height) as usize);
        assert!(sprite.coverage.iter().any(|&c| c > 0));
    }

    #[test]
    fn measure_grows_with_font_size() {
        let Ok(rasterizer) = FontRasterizer::discover() else {
            return;
        };
        let (w1, h1) = rasterizer.measure("dog", 12.0);
        let (w2, h2) = rasterizer.measure("dog", 48.0);
        assert!(w2 > w1);
        assert!(h2 > h1);
    }
}
