use crate::view_model::AppViewModel;

/// Fixed download filename, constant regardless of input.
pub const DOWNLOAD_FILENAME: &str = "my_word_cloud.png";
/// Mime type of the download artifact.
pub const DOWNLOAD_MIME: &str = "image/png";

/// Bounds and default for the max-words control.
pub const MAX_WORDS_FLOOR: u32 = 10;
pub const MAX_WORDS_CEILING: u32 = 500;
pub const MAX_WORDS_DEFAULT: u32 = 100;

/// Where the session currently is in one generate interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Generating,
    Rendered,
}

/// Inline, non-fatal notices shown to the user. The session stays
/// retry-ready after either of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyInput,
    NoRenderableWords,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::EmptyInput => "Please enter some text to generate a word cloud.",
            Notice::NoRenderableWords => {
                "The provided text resulted in no words to display after processing \
                 (e.g., all stopwords or too short). Please try different text or \
                 fewer stopwords."
            }
        }
    }
}

/// Contour drawing settings for a mask-shaped cloud.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContourSettings {
    /// Outline width in canvas pixels.
    pub width: u32,
    /// Outline color specification (hex or named).
    pub color: String,
}

/// Snapshot of the form handed to the engine for one generation.
/// Constructed fresh on every generate click; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub text: String,
    pub max_words: u32,
    pub background_color: String,
    pub colormap: String,
    pub extra_stopwords: String,
    pub mask_path: Option<String>,
    pub contour: Option<ContourSettings>,
}

/// PNG bytes produced by a successful generation. Filename and mime type
/// are fixed and not part of the value.
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    text: String,
    max_words: u32,
    background_color: String,
    colormap: String,
    extra_stopwords: String,
    mask_path: Option<String>,
    contour: Option<ContourSettings>,
    phase: Phase,
    notice: Option<Notice>,
    artifact: Option<DownloadArtifact>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            text: String::new(),
            max_words: MAX_WORDS_DEFAULT,
            background_color: "#FFFFFF".to_string(),
            colormap: "viridis".to_string(),
            extra_stopwords: String::new(),
            mask_path: None,
            contour: None,
            phase: Phase::Idle,
            notice: None,
            artifact: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            busy: self.phase == Phase::Generating,
            notice: self.notice,
            max_words: self.max_words,
            colormap: self.colormap.clone(),
            download_offered: self.artifact.is_some(),
            artifact_byte_len: self.artifact.as_ref().map(|a| a.bytes.len()),
            dirty: self.dirty,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn max_words(&self) -> u32 {
        self.max_words
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// The artifact produced by the most recent successful generation, if any.
    pub fn artifact(&self) -> Option<&DownloadArtifact> {
        self.artifact.as_ref()
    }

    /// Returns whether a re-render is needed and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn set_max_words(&mut self, value: u32) {
        self.max_words = value.clamp(MAX_WORDS_FLOOR, MAX_WORDS_CEILING);
    }

    pub(crate) fn set_background_color(&mut self, value: String) {
        self.background_color = value;
    }

    pub(crate) fn set_colormap(&mut self, value: String) {
        self.colormap = value;
    }

    pub(crate) fn set_extra_stopwords(&mut self, value: String) {
        self.extra_stopwords = value;
    }

    pub(crate) fn set_mask_path(&mut self, value: Option<String>) {
        self.mask_path = value;
    }

    pub(crate) fn set_contour(&mut self, value: Option<ContourSettings>) {
        self.contour = value;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn set_notice(&mut self, notice: Option<Notice>) {
        self.notice = notice;
    }

    pub(crate) fn set_artifact(&mut self, artifact: Option<DownloadArtifact>) {
        self.artifact = artifact;
    }

    /// Builds the request snapshot for the current form contents.
    pub(crate) fn request_snapshot(&self) -> GenerationRequest {
        GenerationRequest {
            text: self.text.clone(),
            max_words: self.max_words,
            background_color: self.background_color.clone(),
            colormap: self.colormap.clone(),
            extra_stopwords: self.extra_stopwords.clone(),
            mask_path: self.mask_path.clone(),
            contour: self.contour.clone(),
        }
    }
}
