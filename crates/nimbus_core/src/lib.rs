//! Nimbus core: pure session state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{GenerationReport, Msg};
pub use state::{
    AppState, ContourSettings, DownloadArtifact, GenerationRequest, Notice, Phase,
    DOWNLOAD_FILENAME, DOWNLOAD_MIME, MAX_WORDS_CEILING, MAX_WORDS_DEFAULT, MAX_WORDS_FLOOR,
};
pub use update::update;
pub use view_model::AppViewModel;
