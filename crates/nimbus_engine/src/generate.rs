use cloud_logging::{cloud_debug, cloud_info, StageScope};

use crate::encode::{encode_png, DownloadArtifact};
use crate::frequency::rank_frequencies;
use crate::glyph::{FontRasterizer, GlyphRasterizer};
use crate::layout::{place_words, LayoutSettings};
use crate::render::{render_cloud, WordCloudResult};
use crate::tokenize::{Tokenizer, WordTokenizer};
use crate::types::{GenerationError, GenerationOptions};

/// Hard bounds for the max-words control; values outside are clamped.
const MAX_WORDS_FLOOR: u32 = 10;
const MAX_WORDS_CEILING: u32 = 500;

/// Blank pixels kept around the content when cropping a maskless cloud.
const CROP_PADDING: u32 = 8;

/// Distinguished generation outcome. "Nothing left to draw" is not an
/// error: the caller shows an actionable warning and stays retry-ready.
/// Hard failures travel separately as `Err(GenerationError)`.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Rendered(WordCloudResult),
    EmptyResult,
}

/// The full pipeline behind one generate click. Holds the tokenizer and the
/// glyph rasterizer; everything else arrives per call.
pub struct WordCloudEngine {
    tokenizer: Box<dyn Tokenizer>,
    rasterizer: Box<dyn GlyphRasterizer>,
}

impl WordCloudEngine {
    pub fn new(rasterizer: Box<dyn GlyphRasterizer>) -> Self {
        Self {
            tokenizer: Box::new(WordTokenizer),
            rasterizer,
        }
    }

    /// Engine backed by a discovered system font.
    pub fn with_system_font() -> Result<Self, GenerationError> {
        Ok(Self::new(Box::new(FontRasterizer::discover()?)))
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Computes a frequency-ranked, packed layout over the stopword-filtered
    /// text. Pure in-memory work; no I/O.
    pub fn generate(
        &self,
        text: &str,
        options: &GenerationOptions,
    ) -> Result<GenerationOutcome, GenerationError> {
        let _stage = StageScope::enter("generate");
        let max_words = options.max_words.clamp(MAX_WORDS_FLOOR, MAX_WORDS_CEILING);
        let tokens = self.tokenizer.tokenize(text);
        let ranked = rank_frequencies(&tokens, &options.stopwords, max_words);
        cloud_debug!(
            "{} tokens, {} ranked words (cap {})",
            tokens.len(),
            ranked.len(),
            max_words
        );
        if ranked.is_empty() {
            cloud_info!("no renderable words after filtering");
            return Ok(GenerationOutcome::EmptyResult);
        }

        let (canvas_w, canvas_h) = match &options.mask {
            Some(mask) => (mask.width(), mask.height()),
            None => (options.width, options.height),
        };
        let settings = LayoutSettings {
            width: canvas_w,
            height: canvas_h,
            min_font_size: options.min_font_size,
            max_font_size: options.max_font_size,
            prefer_horizontal: options.prefer_horizontal,
            margin: 2,
        };
        let placed = place_words(
            &ranked,
            self.rasterizer.as_ref(),
            &settings,
            options.mask.as_ref(),
            options.colormap,
            options.seed,
        );
        if placed.is_empty() {
            return Err(GenerationError::NoSpace {
                width: canvas_w,
                height: canvas_h,
            });
        }
        cloud_info!("placed {} of {} words", placed.len(), ranked.len());

        let mut result = WordCloudResult {
            width: canvas_w,
            height: canvas_h,
            background: options.background,
            placed,
            mask: options.mask.clone(),
            // A contour only makes sense around a mask silhouette.
            contour: options.mask.is_some().then_some(options.contour).flatten(),
        };
        if result.mask.is_none() {
            crop_to_content(&mut result, self.rasterizer.as_ref());
        }
        Ok(GenerationOutcome::Rendered(result))
    }

    /// Renders the result at the export scale and encodes it as a PNG
    /// download artifact. Deterministic given the same result and scale.
    pub fn render_and_encode(
        &self,
        result: &WordCloudResult,
        scale: f32,
    ) -> Result<DownloadArtifact, GenerationError> {
        let _stage = StageScope::enter("render");
        let pixmap = render_cloud(result, self.rasterizer.as_ref(), scale)?;
        let bytes = encode_png(&pixmap)?;
        cloud_debug!("encoded {} byte png at scale {scale}", bytes.len());
        Ok(DownloadArtifact { bytes })
    }
}

/// Tightens the canvas around the placed words plus a uniform padding,
/// shifting every placement accordingly.
fn crop_to_content(result: &mut WordCloudResult, rasterizer: &dyn GlyphRasterizer) {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    for word in &result.placed {
        let (mw, mh) = rasterizer.measure(&word.word, word.px);
        let (w, h) = if word.vertical { (mh, mw) } else { (mw, mh) };
        min_x = min_x.min(word.x);
        min_y = min_y.min(word.y);
        max_x = max_x.max(word.x + w);
        max_y = max_y.max(word.y + h);
    }
    if min_x > max_x || min_y > max_y {
        return;
    }
    let shift_x = min_x.saturating_sub(CROP_PADDING);
    let shift_y = min_y.saturating_sub(CROP_PADDING);
    for word in &mut result.placed {
        word.x -= shift_x;
        word.y -= shift_y;
    }
    result.width = max_x - shift_x + CROP_PADDING;
    result.height = max_y - shift_y + CROP_PADDING;
}

#[cfg(test)]
mod tests {
    use super::crop_to_content;
    use crate::glyph::{GlyphRasterizer, WordSprite};
    use crate::layout::PlacedWord;
    use crate::render::WordCloudResult;
    use crate::types::Rgba;

    struct TenByTen;

    impl GlyphRasterizer for TenByTen {
        fn measure(&self, _word: &str, _px: f32) -> (u32, u32) {
            (10, 10)
        }

        fn rasterize(&self, word: &str, px: f32) -> WordSprite {
            let (width, height) = self.measure(word, px);
            WordSprite {
                width,
                height,
                coverage: vec![255; 100],
            }
        }
    }

    #[test]
    fn crop_shifts_content_and_pads_uniformly() {
        let mut result = WordCloudResult {
            width: 1200,
            height: 600,
            background: Rgba::rgb(255, 255, 255),
            placed: vec![PlacedWord {
                word: "dog".to_string(),
                px: 10.0,
                x: 500,
                y: 300,
                vertical: false,
                color: Rgba::rgb(0, 0, 0),
            }],
            mask: None,
            contour: None,
        };
        crop_to_content(&mut result, &TenByTen);
        assert_eq!(result.placed[0].x, 8);
        assert_eq!(result.placed[0].y, 8);
        assert_eq!(result.width, 10 + 16);
        assert_eq!(result.height, 10 + 16);
    }
}
