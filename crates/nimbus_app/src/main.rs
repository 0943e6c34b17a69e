mod cli;
mod logging;
mod session;

use std::io::Read;

use anyhow::Context;
use clap::Parser;
use cloud_logging::{cloud_info, cloud_warn};
use nimbus_core::{update, AppState, Msg};
use nimbus_engine::{AtomicFileWriter, WordCloudEngine};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    let destination = if args.log_file {
        logging::LogDestination::Both
    } else {
        logging::LogDestination::Terminal
    };
    logging::initialize(destination);

    let text = read_text(&args)?;
    let file_options = match &args.options {
        Some(path) => cli::load_options_file(path)
            .with_context(|| format!("reading options file {}", path.display()))?,
        None => cli::OptionsFile::default(),
    };

    let mut state = AppState::new();
    for msg in cli::form_messages(&args, &file_options, text) {
        state = update(state, msg).0;
    }

    let (mut state, effects) = update(state, Msg::GenerateClicked);

    // Hard engine failures propagate here and abort the run with a trace;
    // warnings come back as messages and leave the session retry-ready.
    if !effects.is_empty() {
        let engine = WordCloudEngine::with_system_font()?;
        for msg in session::run_effects(&engine, effects)? {
            state = update(state, msg).0;
        }
    }

    // One render at the end of the traversal, gated the same way a
    // continuous host gates redraws.
    if state.consume_dirty() {
        if let Some(notice) = state.notice() {
            cloud_warn!("{}", notice.message());
        }
        if let Some(artifact) = state.artifact() {
            let writer = AtomicFileWriter::new(args.output_dir.clone());
            let path = writer
                .write(artifact.filename(), &artifact.bytes)
                .context("writing the word cloud image")?;
            cloud_info!(
                "Wrote {} ({} bytes, {})",
                path.display(),
                artifact.bytes.len(),
                artifact.mime()
            );
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn read_text(args: &cli::Cli) -> anyhow::Result<String> {
    match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading input file {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading text from stdin")?;
            Ok(text)
        }
    }
}
