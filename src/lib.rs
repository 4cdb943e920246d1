//! Convert iTunes Timed Text (.itt) subtitles to SubRip (.srt).
//!
//! The conversion is a single pass over a TTML document: extract the
//! caption paragraphs, rewrite the timestamp separators, and render
//! numbered SRT blocks.
//!
//! # Quick Start
//!
//! ```no_run
//! use itt2srt::itt;
//! use itt2srt::srt::{self, IndexMode};
//! use std::path::Path;
//!
//! # fn main() -> itt2srt::error::Result<()> {
//! let captions = itt::parse_file(Path::new("episode.itt"))?;
//! let subtitles = srt::to_subtitles(&captions, IndexMode::Source);
//! print!("{}", srt::render(&subtitles));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod convert;
pub mod error;
pub mod itt;
pub mod srt;
