//! Formatting of generated recipe text into renderable blocks.
//!
//! Recipe text coming back from the model is loosely markdown-shaped: bold
//! section headers, numbered steps, bullet lists and inline `**bold**` runs.
//! [`format`] turns it into one [`TextBlock`] per line. It never fails;
//! malformed markup degrades to plain text.

mod block;
mod inline;
mod rules;

pub use block::{to_markup, to_plain_text, InlineSpan, InlineSpans, TextBlock};
pub use inline::parse_inline;
pub use rules::{parse_key_value, LineRule};

/// Formats raw text into one block per `\n`-separated line, in input order.
///
/// # Example
/// ```
/// use pantry_keeper::formatter::{format, TextBlock};
///
/// let blocks = format("**Ingredients:**\n- 2 eggs");
/// assert_eq!(blocks.len(), 2);
/// assert!(matches!(blocks[0], TextBlock::SectionHeader { .. }));
/// ```
pub fn format(raw_text: &str) -> Vec<TextBlock> {
    raw_text.split('\n').map(classify_line).collect()
}

/// Classifies a single line after trimming surrounding whitespace.
pub fn classify_line(line: &str) -> TextBlock {
    let trimmed = line.trim();
    LineRule::PRECEDENCE
        .iter()
        .find_map(|rule| rule.apply(trimmed))
        .unwrap_or_else(|| TextBlock::PlainLine {
            content: parse_inline(trimmed),
        })
}
