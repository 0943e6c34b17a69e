use crate::state::{Notice, Phase};

/// Everything the host UI needs to render the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    /// True while a generation is in flight; hosts show a wait indication.
    pub busy: bool,
    pub notice: Option<Notice>,
    pub max_words: u32,
    pub colormap: String,
    /// A download is only offered when this interaction produced an artifact.
    pub download_offered: bool,
    pub artifact_byte_len: Option<usize>,
    pub dirty: bool,
}
