use thiserror::Error;

use crate::colormap::Colormap;
use crate::mask::{ContourStyle, MaskImage};
use crate::stopwords::{build_stopword_set, StopwordSet};

/// Straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses `#RRGGBB`, `#RGB`, or a small set of common color names.
    pub fn parse(spec: &str) -> Result<Self, GenerationError> {
        let spec = spec.trim();
        if let Some(hex) = spec.strip_prefix('#') {
            return match hex.len() {
                6 => {
                    let value = u32::from_str_radix(hex, 16)
                        .map_err(|_| GenerationError::InvalidColor(spec.to_string()))?;
                    Ok(Self::rgb(
                        (value >> 16) as u8,
                        (value >> 8) as u8,
                        value as u8,
                    ))
                }
                3 => {
                    let value = u32::from_str_radix(hex, 16)
                        .map_err(|_| GenerationError::InvalidColor(spec.to_string()))?;
                    let (r, g, b) = ((value >> 8) & 0xF, (value >> 4) & 0xF, value & 0xF);
                    Ok(Self::rgb((r * 17) as u8, (g * 17) as u8, (b * 17) as u8))
                }
                _ => Err(GenerationError::InvalidColor(spec.to_string())),
            };
        }
        match spec.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::rgb(0, 0, 0)),
            "white" => Ok(Self::rgb(255, 255, 255)),
            "red" => Ok(Self::rgb(255, 0, 0)),
            "green" => Ok(Self::rgb(0, 128, 0)),
            "blue" => Ok(Self::rgb(0, 0, 255)),
            "yellow" => Ok(Self::rgb(255, 255, 0)),
            "orange" => Ok(Self::rgb(255, 165, 0)),
            "purple" => Ok(Self::rgb(128, 0, 128)),
            "grey" | "gray" => Ok(Self::rgb(128, 128, 128)),
            _ => Err(GenerationError::InvalidColor(spec.to_string())),
        }
    }
}

/// Validated inputs for one generation. The raw form strings have already
/// been parsed; building this can fail, generating with it cannot soft-fail
/// except for the distinguished empty-result outcome.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub max_words: u32,
    pub background: Rgba,
    pub colormap: Colormap,
    pub stopwords: StopwordSet,
    /// Shape constraint; when present its dimensions replace width/height.
    pub mask: Option<MaskImage>,
    /// Outline around the mask silhouette; ignored without a mask.
    pub contour: Option<ContourStyle>,
    pub width: u32,
    pub height: u32,
    pub min_font_size: f32,
    pub max_font_size: f32,
    pub prefer_horizontal: f32,
    /// Export upscale factor; 300 DPI over the 96 DPI canvas baseline.
    pub scale: f32,
    pub seed: u64,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_words: 100,
            background: Rgba::rgb(255, 255, 255),
            colormap: Colormap::default(),
            stopwords: build_stopword_set(""),
            mask: None,
            contour: None,
            width: 1200,
            height: 600,
            min_font_size: 10.0,
            max_font_size: 240.0,
            prefer_horizontal: 0.9,
            scale: 300.0 / 96.0,
            seed: 0x6e696d62,
        }
    }
}

/// Hard failures of the pipeline. These are never folded into a warning;
/// callers propagate them with `?`.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid color specification: {0:?}")]
    InvalidColor(String),
    #[error("unknown colormap: {0:?}")]
    UnknownColormap(String),
    #[error("no usable font: {0}")]
    Font(String),
    #[error("mask image could not be used: {0}")]
    Mask(String),
    #[error("could not place any words on a {width}x{height} canvas")]
    NoSpace { width: u32, height: u32 },
    #[error("canvas allocation failed for {width}x{height}")]
    Canvas { width: u32, height: u32 },
    #[error("png encoding failed: {0}")]
    Encode(String),
}
