//! WebVTT (`.vtt`) emission: identical body to SRT save for the header, the
//! `.` millis separator, and the absence of index lines.

use crate::config::SubtitleConfig;
use crate::time::format_timestamp;

use super::cues::SubtitleCue;
use super::srt::wrap_text;

pub fn emit_vtt(cues: &[SubtitleCue], config: &SubtitleConfig) -> String {
    let mut out = String::from("WEBVTT\n\n");

    for cue in cues {
        out.push_str(&format_timestamp(cue.start, '.'));
        out.push_str(" --> ");
        out.push_str(&format_timestamp(cue.end, '.'));
        out.push('\n');

        for line in wrap_text(&cue.text, config.srt_max_line_chars, config.srt_max_lines) {
            out.push_str(&line);
            out.push('\n');
        }

        out.push('\n');
    }

    out
}
