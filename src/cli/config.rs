// CLI configuration
use clap::{Parser, Subcommand, ValueEnum};

use mp3meta::{ReadOptions, Utf16Mode};

/// mp3meta - MP3 tag reader
#[derive(Parser, Debug)]
#[command(name = "mp3meta")]
#[command(about = "Read title, artist, album and year from MP3 tags", long_about = None)]
#[command(version)]
pub struct Config {
    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Pretty,
    /// Compact JSON
    Json,
    /// Key-value pairs
    KeyValue,
    /// Table format
    Table,
}

/// How UTF-16 text frames are decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Utf16Arg {
    /// Keep the low byte of each character (ASCII only)
    #[default]
    Compat,
    /// Full UTF-16 decoding
    Full,
}

impl From<Utf16Arg> for Utf16Mode {
    fn from(arg: Utf16Arg) -> Self {
        match arg {
            Utf16Arg::Compat => Utf16Mode::Compat,
            Utf16Arg::Full => Utf16Mode::Full,
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read metadata from MP3 file(s)
    Read {
        /// MP3 file path(s) or glob patterns
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,

        /// Metadata fields to display (comma-separated)
        #[arg(long)]
        fields: Option<String>,

        /// Output to file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Strip NUL and space padding from ID3v1 fields
        #[arg(long)]
        trim: bool,

        /// UTF-16 decoding mode
        #[arg(long, value_enum, default_value = "compat")]
        utf16: Utf16Arg,
    },

    /// Detect the tag format of MP3 file(s)
    Detect {
        /// MP3 file path(s) or glob patterns
        #[arg(value_name = "FILE", required = true)]
        files: Vec<String>,
    },
}

/// Build library read options from the `read` flags
pub fn read_options(trim: bool, utf16: Utf16Arg) -> ReadOptions {
    ReadOptions::new()
        .with_trim_padding(trim)
        .with_utf16(utf16.into())
}
