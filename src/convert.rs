//! Convert command - transform an ITT document into an SRT file.

use crate::error::Error;
use crate::itt;
use crate::srt::{self, IndexMode};
use color_eyre::Section;
use eyre::{Context, Result};
use std::path::PathBuf;

/// CLI arguments for the conversion.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to input .itt file
    pub input: PathBuf,

    /// Output SRT path (default: same as input with .srt extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Renumber blocks contiguously from 1 after untimed paragraphs are
    /// dropped (default keeps source positions, which may leave gaps)
    #[arg(long)]
    pub renumber: bool,

    /// Print the first and last subtitle blocks after converting
    #[arg(long)]
    pub preview: bool,
}

/// Resolved configuration for the conversion.
#[derive(Debug)]
pub struct Config {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub index_mode: IndexMode,
    pub preview: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let index_mode = if args.renumber {
            IndexMode::Renumber
        } else {
            IndexMode::Source
        };

        Ok(Self {
            input: args.input,
            output: args.output,
            index_mode,
            preview: args.preview,
        })
    }
}

impl Config {
    /// Resolve the output path: the explicit argument, or the input path
    /// with its extension replaced by `.srt`.
    fn resolved_output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("srt"))
    }
}

pub fn execute(config: Config) -> Result<()> {
    let output = config.resolved_output();

    tracing::info!(
        input = ?config.input.display(),
        output = ?output.display(),
        "converting captions"
    );

    let result = itt::parse_file(&config.input);
    let is_parse_failure = matches!(&result, Err(Error::Parse(_)));

    let result = result
        .wrap_err_with(|| format!("failed to read captions from {:?}", config.input.display()));

    let captions = if is_parse_failure {
        result.suggestion("the input must be an iTunes Timed Text (.itt) document")
    } else {
        result
    }?;

    tracing::info!(captions = captions.len(), "captions extracted");

    let subtitles = srt::to_subtitles(&captions, config.index_mode);

    std::fs::write(&output, srt::render(&subtitles))
        .wrap_err_with(|| format!("failed to write srt: {:?}", output.display()))?;

    println!("✅ Converted to: {}", output.display());

    if config.preview {
        print!("{}", srt::preview_subtitles(&subtitles, 3, 3));
    }

    Ok(())
}
