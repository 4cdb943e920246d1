//! CLI argument definitions using clap.

use clap::Parser;
use eyre::Result;

use crate::convert;

#[derive(Debug, Parser)]
#[command(name = "itt2srt")]
#[command(about = "Convert iTunes Timed Text (.itt) subtitles to SubRip (.srt)")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub convert: convert::Args,
}

/// Execute the parsed CLI - separated for testing.
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    convert::execute(cli.convert.try_into()?)
}
