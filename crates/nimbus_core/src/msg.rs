use crate::state::{ContourSettings, DownloadArtifact};

/// Outcome of one generation, reported back by the host runtime.
///
/// Hard engine failures never appear here; they propagate to the host's
/// top level instead of being folded into session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationReport {
    Completed { artifact: DownloadArtifact },
    NoRenderableWords,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the text input box.
    TextChanged(String),
    /// User moved the max-words slider. Clamped to [10, 500] on apply.
    MaxWordsChanged(u32),
    /// User picked a background color (hex string).
    BackgroundColorChanged(String),
    /// User picked a colormap by name.
    ColormapChanged(String),
    /// User edited the comma-separated extra stopwords field.
    ExtraStopwordsChanged(String),
    /// User selected or cleared a mask image path.
    MaskPathChanged(Option<String>),
    /// User changed the contour settings for a mask-shaped cloud.
    ContourChanged(Option<ContourSettings>),
    /// User clicked Generate.
    GenerateClicked,
    /// Host runtime reports the generation outcome.
    GenerationFinished(GenerationReport),
    /// Fallback for placeholder wiring.
    NoOp,
}
