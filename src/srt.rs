//! SRT subtitle rendering.
//!
//! Converts extracted captions into SubRip blocks: sequence index, a
//! `begin --> end` timing line with comma separators, the caption text,
//! and a blank separator line.

use crate::itt::Caption;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Index numbering for output blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndexMode {
    /// Keep each caption's source document position; paragraphs dropped
    /// for missing timing leave gaps in the numbering
    #[default]
    Source,
    /// Renumber contiguously from 1 after untimed paragraphs are dropped
    Renumber,
}

/// One SRT subtitle block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subtitle {
    /// Sequence index shown to players
    pub index: usize,
    /// Begin timestamp (`HH:MM:SS,mmm`)
    pub begin: String,
    /// End timestamp (`HH:MM:SS,mmm`)
    pub end: String,
    /// Caption text
    pub text: String,
}

impl Subtitle {
    /// Create a subtitle block.
    pub fn new(
        index: usize,
        begin: impl Into<String>,
        end: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            index,
            begin: begin.into(),
            end: end.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Subtitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{} --> {}\n{}", self.index, self.begin, self.end, self.text)
    }
}

/// Convert captions to SRT subtitles.
pub fn to_subtitles(captions: &[Caption], mode: IndexMode) -> Vec<Subtitle> {
    captions
        .iter()
        .zip(1..)
        .map(|(caption, sequence)| create_subtitle(caption, sequence, mode))
        .collect()
}

/// Create a subtitle from a caption.
fn create_subtitle(caption: &Caption, sequence: usize, mode: IndexMode) -> Subtitle {
    let index = match mode {
        IndexMode::Source => caption.position,
        IndexMode::Renumber => sequence,
    };

    Subtitle::new(
        index,
        srt_timestamp(&caption.begin),
        srt_timestamp(&caption.end),
        caption.text.clone(),
    )
}

/// Rewrite an ITT timestamp separator for SRT.
///
/// Replaces every `.` directly preceding a digit run with `,`, so
/// `00:00:01.000` becomes `00:00:01,000`. The rewrite is purely textual:
/// timestamps without such a `.` (already comma-separated, or SMPTE
/// `HH:MM:SS:FF`) pass through unchanged.
pub fn srt_timestamp(timestamp: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\.(\d+)").unwrap());

    re.replace_all(timestamp, ",$1").into_owned()
}

/// Render subtitles as complete SRT file content.
///
/// Every block ends with a blank separator line; no subtitles render to
/// the empty string.
pub fn render(subtitles: &[Subtitle]) -> String {
    subtitles.iter().map(|s| format!("{s}\n\n")).collect()
}

/// Format subtitles for display.
pub fn display_subtitles(subtitles: &[Subtitle]) -> String {
    subtitles
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Display preview of subtitles (first and last entries).
pub fn preview_subtitles(subtitles: &[Subtitle], head_count: usize, tail_count: usize) -> String {
    let total = subtitles.len();

    if total <= head_count + tail_count {
        display_subtitles(subtitles)
    } else {
        let mut out = Vec::new();
        out.extend(subtitles[0..head_count].iter().map(|s| s.to_string()));
        out.push("...".to_string());
        out.extend(
            subtitles[(total - tail_count)..total]
                .iter()
                .map(|s| s.to_string()),
        );
        out.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_captions_to_subtitles() {
        let captions = vec![
            Caption::new(1, "00:00:01.000", "00:00:02.500", "Hello world."),
            Caption::new(2, "00:00:03.000", "00:00:04.000", "How are you?"),
        ];

        let subtitles = to_subtitles(&captions, IndexMode::Source);

        assert_eq!(
            subtitles,
            vec![
                Subtitle::new(1, "00:00:01,000", "00:00:02,500", "Hello world."),
                Subtitle::new(2, "00:00:03,000", "00:00:04,000", "How are you?"),
            ]
        );
    }

    #[test]
    fn source_mode_preserves_position_gaps() {
        let captions = vec![
            Caption::new(1, "00:00:01.000", "00:00:02.000", "First"),
            Caption::new(3, "00:00:05.000", "00:00:06.000", "Third"),
        ];

        let subtitles = to_subtitles(&captions, IndexMode::Source);

        assert_eq!(subtitles[0].index, 1);
        assert_eq!(subtitles[1].index, 3);
    }

    #[test]
    fn renumber_mode_closes_gaps() {
        let captions = vec![
            Caption::new(2, "00:00:01.000", "00:00:02.000", "First"),
            Caption::new(5, "00:00:05.000", "00:00:06.000", "Second"),
        ];

        let subtitles = to_subtitles(&captions, IndexMode::Renumber);

        assert_eq!(subtitles[0].index, 1);
        assert_eq!(subtitles[1].index, 2);
    }

    #[test]
    fn handles_empty_captions() {
        let captions: Vec<Caption> = vec![];
        let subtitles = to_subtitles(&captions, IndexMode::Source);
        assert!(subtitles.is_empty());
    }

    #[test]
    fn rewrites_decimal_separator() {
        assert_eq!(srt_timestamp("00:00:01.000"), "00:00:01,000");
        assert_eq!(srt_timestamp("01:23:45.678"), "01:23:45,678");
    }

    #[test]
    fn leaves_comma_timestamps_unchanged() {
        assert_eq!(srt_timestamp("00:00:01,000"), "00:00:01,000");
    }

    #[test]
    fn leaves_frame_timestamps_unchanged() {
        assert_eq!(srt_timestamp("00:00:01:15"), "00:00:01:15");
    }

    #[test]
    fn rewrites_offset_style_seconds() {
        assert_eq!(srt_timestamp("3.84s"), "3,84s");
    }

    #[test]
    fn renders_blocks_with_blank_separators() {
        let subtitles = vec![
            Subtitle::new(1, "00:00:00,000", "00:00:03,500", "First subtitle"),
            Subtitle::new(2, "00:00:04,000", "00:00:07,500", "Second subtitle"),
        ];

        let expected = "1\n00:00:00,000 --> 00:00:03,500\nFirst subtitle\n\n\
                        2\n00:00:04,000 --> 00:00:07,500\nSecond subtitle\n\n";
        assert_eq!(render(&subtitles), expected);
    }

    #[test]
    fn renders_no_subtitles_to_empty_string() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn preview_shows_all_when_short() {
        let subtitles = vec![
            Subtitle::new(1, "00:00:01,000", "00:00:02,000", "One"),
            Subtitle::new(2, "00:00:03,000", "00:00:04,000", "Two"),
        ];

        let preview = preview_subtitles(&subtitles, 3, 3);

        assert_eq!(preview, display_subtitles(&subtitles));
    }

    #[test]
    fn preview_elides_middle_entries() {
        let subtitles: Vec<Subtitle> = (1..=10)
            .map(|i| Subtitle::new(i, "00:00:01,000", "00:00:02,000", format!("Line {i}")))
            .collect();

        let preview = preview_subtitles(&subtitles, 2, 2);

        assert!(preview.contains("Line 1"));
        assert!(preview.contains("Line 2"));
        assert!(preview.contains("..."));
        assert!(preview.contains("Line 9"));
        assert!(preview.contains("Line 10"));
        assert!(!preview.contains("Line 5"));
    }
}
