//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use setlist_normalizer_config::OutputFormat;
use setlist_normalizer_engine::PartialParseOptions;

#[derive(Parser)]
#[command(
    name = "setlist-normalizer",
    version,
    about = "Normalize a concert setlist into numbered tracks and encore sections",
    long_about = "Normalize a concert setlist into numbered tracks and encore sections.\n\n\
                  Reads free-form setlist text (full-width characters, ordinal prefixes,\n\
                  bracketed notes) from FILE or stdin. Defaults come from the config file\n\
                  and are overridden by the flags below."
)]
pub struct Cli {
    /// Setlist text file. Reads stdin when omitted or `-`.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Config file to use instead of ~/.config/setlist-normalizer/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file).
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Keep MC, intro and similar lines as tracks.
    #[arg(long)]
    pub include_non_songs: bool,

    /// Count encores without emitting section headers.
    #[arg(long)]
    pub hide_encores: bool,

    /// Compare non-song keywords case-sensitively.
    #[arg(long)]
    pub case_sensitive: bool,

    /// List skipped lines after the text output.
    #[arg(long)]
    pub show_skipped: bool,

    /// Write a config file with the default options and exit.
    #[arg(long)]
    pub init_config: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Options set by flags. Flags only ever turn a default off, so an
    /// absent flag leaves the field unset for lower layers to decide.
    pub fn parse_options(&self) -> PartialParseOptions {
        PartialParseOptions {
            exclude_non_songs: self.include_non_songs.then_some(false),
            keep_encore_markers: self.hide_encores.then_some(false),
            ignore_case: self.case_sensitive.then_some(false),
        }
    }
}
