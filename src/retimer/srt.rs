//! SubRip (`.srt`) emission.

use crate::config::SubtitleConfig;
use crate::time::format_timestamp;

use super::cues::SubtitleCue;

/// Greedy word-wrap: packs words onto a line while it still fits within
/// `max_chars`, stopping after `max_lines` lines. Any remaining words are
/// dropped (overflow is truncated, not carried to extra lines), and a
/// single word longer than `max_chars` is truncated to fit.
pub fn wrap_text(text: &str, max_chars: usize, max_lines: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if lines.len() >= max_lines {
            break;
        }

        if current.is_empty() {
            current = truncate_chars(word, max_chars);
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            if lines.len() >= max_lines {
                break;
            }
            current = truncate_chars(word, max_chars);
        }
    }

    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
    }

    lines
}

fn truncate_chars(word: &str, max_chars: usize) -> String {
    word.chars().take(max_chars).collect()
}

/// Renders cues as strict SubRip: 1-based index, `HH:MM:SS,mmm --> ...`,
/// wrapped text, blank line between cues, trailing newline. LF line endings
/// are the canonical form for bit comparison.
pub fn emit_srt(cues: &[SubtitleCue], config: &SubtitleConfig) -> String {
    let mut out = String::new();

    for cue in cues {
        out.push_str(&cue.index.to_string());
        out.push('\n');
        out.push_str(&format_timestamp(cue.start, ','));
        out.push_str(" --> ");
        out.push_str(&format_timestamp(cue.end, ','));
        out.push('\n');

        for line in wrap_text(&cue.text, config.srt_max_line_chars, config.srt_max_lines) {
            out.push_str(&line);
            out.push('\n');
        }

        out.push('\n');
    }

    out
}
