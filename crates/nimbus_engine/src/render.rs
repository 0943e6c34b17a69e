use tiny_skia::{Color, Paint, Pixmap, PremultipliedColorU8, Rect, Transform};

use crate::glyph::GlyphRasterizer;
use crate::layout::PlacedWord;
use crate::mask::{ContourStyle, MaskImage};
use crate::types::{GenerationError, Rgba};

/// The packed layout for one generation, ready to be rasterized at any
/// export scale. Owned by a single interaction and superseded by the next.
#[derive(Debug, Clone, PartialEq)]
pub struct WordCloudResult {
    pub width: u32,
    pub height: u32,
    pub background: Rgba,
    pub placed: Vec<PlacedWord>,
    /// Kept so the contour can be traced at render time.
    pub mask: Option<MaskImage>,
    pub contour: Option<ContourStyle>,
}

/// Composites the cloud onto a pixmap: background fill, then every word
/// sprite tinted with its color, then the mask contour when configured.
///
/// `scale` multiplies all canvas coordinates and font sizes, so export
/// resolution is raised by re-rasterizing glyphs rather than resampling.
pub fn render_cloud(
    result: &WordCloudResult,
    rasterizer: &dyn GlyphRasterizer,
    scale: f32,
) -> Result<Pixmap, GenerationError> {
    let out_w = (result.width as f32 * scale).round().max(1.0) as u32;
    let out_h = (result.height as f32 * scale).round().max(1.0) as u32;
    let mut pixmap = Pixmap::new(out_w, out_h).ok_or(GenerationError::Canvas {
        width: out_w,
        height: out_h,
    })?;

    let bg = result.background;
    pixmap.fill(Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));

    for word in &result.placed {
        let sprite = rasterizer.rasterize(&word.word, word.px * scale);
        let sprite = if word.vertical {
            sprite.rotated()
        } else {
            sprite
        };
        let origin_x = (word.x as f32 * scale).round() as i64;
        let origin_y = (word.y as f32 * scale).round() as i64;
        blit(&mut pixmap, &sprite.coverage, sprite.width, sprite.height, origin_x, origin_y, word.color);
    }

    if let (Some(mask), Some(contour)) = (&result.mask, &result.contour) {
        if contour.width > 0.0 {
            draw_contour(&mut pixmap, mask, contour, scale);
        }
    }

    Ok(pixmap)
}

fn blit(
    pixmap: &mut Pixmap,
    coverage: &[u8],
    width: u32,
    height: u32,
    origin_x: i64,
    origin_y: i64,
    color: Rgba,
) {
    let canvas_w = pixmap.width() as i64;
    let canvas_h = pixmap.height() as i64;
    let pixels = pixmap.pixels_mut();
    for sy in 0..height as i64 {
        let dy = origin_y + sy;
        if dy < 0 || dy >= canvas_h {
            continue;
        }
        for sx in 0..width as i64 {
            let dx = origin_x + sx;
            if dx < 0 || dx >= canvas_w {
                continue;
            }
            let cov = coverage[(sy * width as i64 + sx) as usize];
            if cov == 0 {
                continue;
            }
            let idx = (dy * canvas_w + dx) as usize;
            pixels[idx] = blend_over(pixels[idx], color, cov);
        }
    }
}

/// Source-over blend of a straight-alpha color (scaled by glyph coverage)
/// onto a premultiplied destination pixel.
fn blend_over(dst: PremultipliedColorU8, color: Rgba, coverage: u8) -> PremultipliedColorU8 {
    let alpha = (coverage as u16 * color.a as u16 / 255) as u16;
    let inv = 255 - alpha;
    let a = (alpha + dst.alpha() as u16 * inv / 255).min(255) as u8;
    let r = ((color.r as u16 * alpha / 255) + dst.red() as u16 * inv / 255).min(a as u16) as u8;
    let g = ((color.g as u16 * alpha / 255) + dst.green() as u16 * inv / 255).min(a as u16) as u8;
    let b = ((color.b as u16 * alpha / 255) + dst.blue() as u16 * inv / 255).min(a as u16) as u8;
    PremultipliedColorU8::from_rgba(r, g, b, a).unwrap_or(dst)
}

fn draw_contour(pixmap: &mut Pixmap, mask: &MaskImage, contour: &ContourStyle, scale: f32) {
    let mut paint = Paint::default();
    paint.set_color_rgba8(contour.color.r, contour.color.g, contour.color.b, contour.color.a);
    paint.anti_alias = false;

    let side = (contour.width * scale).max(1.0);
    for (x, y) in mask.boundary_cells() {
        let cx = x as f32 * scale;
        let cy = y as f32 * scale;
        if let Some(rect) = Rect::from_xywh(cx - side / 2.0, cy - side / 2.0, side, side) {
            pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        }
    }
}
