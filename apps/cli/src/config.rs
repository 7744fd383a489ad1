//! Command line and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use dictcard_core::LabelPrefixes;

/// Convert dictionary HTML pages into tab-separated flashcard import rows.
#[derive(Parser, Debug, Clone)]
#[command(name = "dictcard", author, version, about, long_about = None)]
pub struct Config {
    /// Directory holding one HTML page per word.
    #[arg(env = "DICTCARD_INPUT_DIR", default_value = "htmls")]
    pub input_dir: PathBuf,

    /// Extension of the page files to read.
    #[arg(long, env = "DICTCARD_EXTENSION", default_value = "html")]
    pub extension: String,

    /// Characters stripped from the front of related words.
    #[arg(long, default_value_t = 2)]
    pub rel_prefix: usize,

    /// Characters stripped from the front of synonyms.
    #[arg(long, default_value_t = 4)]
    pub syn_prefix: usize,

    /// Characters stripped from the front of opposites.
    #[arg(long, default_value_t = 4)]
    pub opp_prefix: usize,

    /// Log each extracted record.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn prefixes(&self) -> LabelPrefixes {
        LabelPrefixes {
            related: self.rel_prefix,
            synonym: self.syn_prefix,
            opposite: self.opp_prefix,
        }
    }

    /// Log filter used when RUST_LOG is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
