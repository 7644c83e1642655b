//! Text normalization, paragraph segmentation and excerpt extraction

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::Paragraph;

/// Maximum length of an excerpt, in characters, ellipsis included
pub const EXCERPT_MAX_CHARS: usize = 280;

const ELLIPSIS: &str = "...";

lazy_static! {
    static ref LINE_ENDING: Regex = Regex::new(r"\r+\n").unwrap();
    static ref EXTRA_BLANK_LINES: Regex = Regex::new(r"\n{3,}").unwrap();
    static ref HORIZONTAL_RUNS: Regex = Regex::new(r"[ \t]{2,}").unwrap();

    /// A blank line, possibly holding whitespace, separates paragraphs
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").unwrap();
}

/// Normalize raw decision text before evaluation
///
/// Converts CRLF line endings, collapses three or more newlines into a single
/// blank line, collapses runs of spaces and tabs, and trims the result.
/// Applying it twice yields the same text.
pub fn normalize(text: &str) -> String {
    let text = LINE_ENDING.replace_all(text, "\n");
    let text = EXTRA_BLANK_LINES.replace_all(&text, "\n\n");
    let text = HORIZONTAL_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}

/// Split normalized text into ordered paragraphs
///
/// Blocks that are empty after trimming are dropped and do not consume an
/// ordinal.
pub fn segment_paragraphs(text: &str) -> Vec<Paragraph> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .enumerate()
        .map(|(i, block)| Paragraph {
            ordinal: i + 1,
            text: block.to_string(),
        })
        .collect()
}

/// Bounded single-line excerpt of a paragraph for display in findings
pub fn excerpt(text: &str) -> String {
    let line = text.trim().replace('\n', " ");
    if line.chars().count() <= EXCERPT_MAX_CHARS {
        return line;
    }

    let keep = EXCERPT_MAX_CHARS - ELLIPSIS.len();
    let mut cut: String = line.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}
