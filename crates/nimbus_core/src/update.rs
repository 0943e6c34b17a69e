use crate::{AppState, Effect, GenerationReport, Msg, Notice, Phase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TextChanged(text) => {
            // Editing the text does not invalidate a previously rendered
            // artifact; it is only replaced or cleared by the next generate.
            state.set_text(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::MaxWordsChanged(value) => {
            state.set_max_words(value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::BackgroundColorChanged(value) => {
            state.set_background_color(value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ColormapChanged(value) => {
            state.set_colormap(value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ExtraStopwordsChanged(value) => {
            state.set_extra_stopwords(value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::MaskPathChanged(value) => {
            state.set_mask_path(value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ContourChanged(value) => {
            state.set_contour(value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::GenerateClicked => {
            // Each click is a fresh traversal; a click while a synchronous
            // generation is in flight cannot happen, but guard anyway.
            if state.phase() == Phase::Generating {
                return (state, Vec::new());
            }
            if state.text().trim().is_empty() {
                state.set_notice(Some(Notice::EmptyInput));
                state.set_phase(Phase::Idle);
                state.mark_dirty();
                return (state, Vec::new());
            }
            let request = state.request_snapshot();
            state.set_notice(None);
            state.set_artifact(None);
            state.set_phase(Phase::Generating);
            state.mark_dirty();
            vec![Effect::Generate { request }]
        }
        Msg::GenerationFinished(report) => {
            match report {
                GenerationReport::Completed { artifact } => {
                    state.set_artifact(Some(artifact));
                    state.set_notice(None);
                    state.set_phase(Phase::Rendered);
                }
                GenerationReport::NoRenderableWords => {
                    state.set_artifact(None);
                    state.set_notice(Some(Notice::NoRenderableWords));
                    state.set_phase(Phase::Idle);
                }
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
