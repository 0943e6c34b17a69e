use std::path::PathBuf;

use clap::Parser;
use nimbus_core::{ContourSettings, Msg};
use serde::Deserialize;

/// Generate a word cloud PNG from text.
#[derive(Debug, Parser)]
#[command(name = "nimbus", version)]
pub struct Cli {
    /// Text file to read; stdin when omitted.
    pub input: Option<PathBuf>,

    /// Maximum number of words to show (10-500, step of taste).
    #[arg(long)]
    pub max_words: Option<u32>,

    /// Background color, e.g. "#FFFFFF".
    #[arg(long)]
    pub background_color: Option<String>,

    /// Colormap name from the curated list, e.g. "viridis".
    #[arg(long)]
    pub colormap: Option<String>,

    /// Additional stopwords, comma-separated.
    #[arg(long)]
    pub extra_stopwords: Option<String>,

    /// Mask image (PNG); white areas reject words.
    #[arg(long)]
    pub mask: Option<PathBuf>,

    /// Contour width around the mask shape; 0 disables the contour.
    #[arg(long)]
    pub contour_width: Option<u32>,

    /// Contour color; defaults to black.
    #[arg(long)]
    pub contour_color: Option<String>,

    /// Directory the PNG is written to.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// JSON options file; explicit flags override its values.
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Also write logs to ./nimbus.log.
    #[arg(long)]
    pub log_file: bool,
}

/// Optional defaults loaded from `--options`; every field may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsFile {
    pub max_words: Option<u32>,
    pub background_color: Option<String>,
    pub colormap: Option<String>,
    pub extra_stopwords: Option<String>,
    pub mask: Option<PathBuf>,
    pub contour_width: Option<u32>,
    pub contour_color: Option<String>,
}

pub fn load_options_file(path: &std::path::Path) -> anyhow::Result<OptionsFile> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Turns CLI flags and file defaults into the form-edit messages of one
/// session, flags winning over the file. Unset controls keep the core's
/// built-in defaults.
pub fn form_messages(cli: &Cli, file: &OptionsFile, text: String) -> Vec<Msg> {
    let mut msgs = vec![Msg::TextChanged(text)];

    if let Some(value) = cli.max_words.or(file.max_words) {
        msgs.push(Msg::MaxWordsChanged(value));
    }
    if let Some(value) = cli
        .background_color
        .clone()
        .or_else(|| file.background_color.clone())
    {
        msgs.push(Msg::BackgroundColorChanged(value));
    }
    if let Some(value) = cli.colormap.clone().or_else(|| file.colormap.clone()) {
        msgs.push(Msg::ColormapChanged(value));
    }
    if let Some(value) = cli
        .extra_stopwords
        .clone()
        .or_else(|| file.extra_stopwords.clone())
    {
        msgs.push(Msg::ExtraStopwordsChanged(value));
    }
    if let Some(path) = cli.mask.clone().or_else(|| file.mask.clone()) {
        msgs.push(Msg::MaskPathChanged(Some(
            path.to_string_lossy().into_owned(),
        )));
    }
    let contour_width = cli.contour_width.or(file.contour_width).unwrap_or(0);
    if contour_width > 0 {
        let color = cli
            .contour_color
            .clone()
            .or_else(|| file.contour_color.clone())
            .unwrap_or_else(|| "black".to_string());
        msgs.push(Msg::ContourChanged(Some(ContourSettings {
            width: contour_width,
            color,
        })));
    }

    msgs
}

#[cfg(test)]
mod tests {
    use super::{form_messages, Cli, OptionsFile};
    use clap::Parser;
    use nimbus_core::Msg;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("nimbus").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_only_set_the_text() {
        let cli = parse(&[]);
        let msgs = form_messages(&cli, &OptionsFile::default(), "hello".to_string());
        assert_eq!(msgs, vec![Msg::TextChanged("hello".to_string())]);
    }

    #[test]
    fn flags_override_options_file() {
        let cli = parse(&["--max-words", "50", "--colormap", "plasma"]);
        let file = OptionsFile {
            max_words: Some(300),
            colormap: Some("ocean".to_string()),
            extra_stopwords: Some("foo".to_string()),
            ..OptionsFile::default()
        };
        let msgs = form_messages(&cli, &file, String::new());
        assert!(msgs.contains(&Msg::MaxWordsChanged(50)));
        assert!(msgs.contains(&Msg::ColormapChanged("plasma".to_string())));
        // File value survives where no flag was given.
        assert!(msgs.contains(&Msg::ExtraStopwordsChanged("foo".to_string())));
    }

    #[test]
    fn contour_defaults_to_black_and_requires_width() {
        let cli = parse(&["--contour-width", "3"]);
        let msgs = form_messages(&cli, &OptionsFile::default(), String::new());
        let contour = msgs.iter().find_map(|m| match m {
            Msg::ContourChanged(Some(settings)) => Some(settings.clone()),
            _ => None,
        });
        let contour = contour.expect("contour message present");
        assert_eq!(contour.width, 3);
        assert_eq!(contour.color, "black");

        let cli = parse(&["--contour-color", "red"]);
        let msgs = form_messages(&cli, &OptionsFile::default(), String::new());
        assert!(!msgs.iter().any(|m| matches!(m, Msg::ContourChanged(_))));
    }

    #[test]
    fn options_file_round_trips_from_json() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("opts.json");
        std::fs::write(&path, r#"{"max_words": 150, "colormap": "Set2"}"#).unwrap();
        let file = super::load_options_file(&path).unwrap();
        assert_eq!(file.max_words, Some(150));
        assert_eq!(file.colormap.as_deref(), Some("Set2"));
        assert!(file.mask.is_none());
    }
}
