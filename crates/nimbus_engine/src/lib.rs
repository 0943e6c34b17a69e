//! Nimbus engine: the word cloud generation pipeline.
//!
//! Text goes in one end; a PNG byte buffer comes out the other:
//! tokenize -> filter stopwords -> rank frequencies -> place on canvas ->
//! composite -> encode. Every stage is deterministic for a fixed seed.
mod colormap;
mod encode;
mod frequency;
mod generate;
mod glyph;
mod layout;
mod mask;
mod persist;
mod render;
mod stopwords;
mod tokenize;
mod types;

pub use colormap::Colormap;
pub use encode::{encode_png, DownloadArtifact, DOWNLOAD_FILENAME, DOWNLOAD_MIME};
pub use frequency::{rank_frequencies, WordWeight};
pub use generate::{GenerationOutcome, WordCloudEngine};
pub use glyph::{FontRasterizer, GlyphRasterizer, WordSprite};
pub use layout::{place_words, LayoutSettings, PlacedWord};
pub use mask::{ContourStyle, MaskImage};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use render::{render_cloud, WordCloudResult};
pub use stopwords::{build_stopword_set, StopwordSet, BASELINE_STOPWORDS};
pub use tokenize::{Tokenizer, WordTokenizer};
pub use types::{GenerationError, GenerationOptions, Rgba};
