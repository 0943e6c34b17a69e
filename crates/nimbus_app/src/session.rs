//! Bridges the pure core session to the engine: executes effects and maps
//! engine outcomes back into messages.

use std::path::Path;

use cloud_logging::cloud_info;
use nimbus_core::{DownloadArtifact, Effect, GenerationReport, GenerationRequest, Msg};
use nimbus_engine::{
    build_stopword_set, Colormap, ContourStyle, GenerationError, GenerationOptions,
    GenerationOutcome, MaskImage, Rgba, WordCloudEngine,
};

/// Parses the raw form strings of a request into validated engine options.
pub fn build_options(request: &GenerationRequest) -> Result<GenerationOptions, GenerationError> {
    let background = Rgba::parse(&request.background_color)?;
    let colormap = Colormap::from_name(&request.colormap)?;
    let stopwords = build_stopword_set(&request.extra_stopwords);
    let mask = request
        .mask_path
        .as_deref()
        .map(|path| MaskImage::from_file(Path::new(path)))
        .transpose()?;
    let contour = request
        .contour
        .as_ref()
        .map(|settings| {
            Ok(ContourStyle {
                width: settings.width as f32,
                color: Rgba::parse(&settings.color)?,
            })
        })
        .transpose()?;

    Ok(GenerationOptions {
        max_words: request.max_words,
        background,
        colormap,
        stopwords,
        mask,
        contour,
        ..GenerationOptions::default()
    })
}

/// Runs each effect synchronously and returns the messages to feed back.
///
/// Generation warnings become messages; hard `GenerationError`s are
/// deliberately NOT folded into the session and propagate to the caller.
pub fn run_effects(
    engine: &WordCloudEngine,
    effects: Vec<Effect>,
) -> Result<Vec<Msg>, GenerationError> {
    let mut msgs = Vec::with_capacity(effects.len());
    for effect in effects {
        match effect {
            Effect::Generate { request } => {
                cloud_info!(
                    "Generating word cloud ({} chars, up to {} words)... please wait",
                    request.text.len(),
                    request.max_words
                );
                let options = build_options(&request)?;
                let report = match engine.generate(&request.text, &options)? {
                    GenerationOutcome::Rendered(result) => {
                        let artifact = engine.render_and_encode(&result, options.scale)?;
                        GenerationReport::Completed {
                            artifact: DownloadArtifact {
                                bytes: artifact.bytes,
                            },
                        }
                    }
                    GenerationOutcome::EmptyResult => GenerationReport::NoRenderableWords,
                };
                msgs.push(Msg::GenerationFinished(report));
            }
        }
    }
    Ok(msgs)
}
