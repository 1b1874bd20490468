use super::block::TextBlock;
use super::inline::{parse_inline, BOLD_MARKER};

const KEY_VALUE_SEPARATOR: &str = ":**";
const BULLET_MARKERS: [char; 3] = ['-', '*', '•'];
// `\s` in the list-item pattern: ASCII whitespace only, so U+3000 and NBSP are content.
const ITEM_SEPARATORS: [char; 6] = [' ', '\t', '\n', '\x0B', '\x0C', '\r'];

/// A single line classification rule.
///
/// Rules are tried in [`LineRule::PRECEDENCE`] order against a trimmed line and
/// the first one that applies decides the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    Blank,
    SectionHeader,
    BoldLine,
    /// Shadowed by `SectionHeader`, which tests the same condition first.
    /// Kept in place so the order stays explicit; use [`parse_key_value`] to
    /// split such lines directly.
    KeyValue,
    NumberedItem,
    BulletItem,
    PlainLine,
}

impl LineRule {
    pub const PRECEDENCE: [LineRule; 7] = [
        LineRule::Blank,
        LineRule::SectionHeader,
        LineRule::BoldLine,
        LineRule::KeyValue,
        LineRule::NumberedItem,
        LineRule::BulletItem,
        LineRule::PlainLine,
    ];

    /// Builds the block for `line` if this rule matches it.
    ///
    /// `line` is expected to be trimmed already.
    pub fn apply(self, line: &str) -> Option<TextBlock> {
        match self {
            LineRule::Blank => line.is_empty().then_some(TextBlock::Blank),
            LineRule::SectionHeader => is_bold_key_line(line).then(|| TextBlock::SectionHeader {
                text: strip_header_markers(line).to_string(),
            }),
            LineRule::BoldLine => (line.starts_with(BOLD_MARKER) && line.ends_with(BOLD_MARKER))
                .then(|| TextBlock::BoldLine {
                    text: strip_surrounding_markers(line).to_string(),
                }),
            LineRule::KeyValue => is_bold_key_line(line).then(|| parse_key_value(line)),
            LineRule::NumberedItem => {
                split_numbered(line).map(|(number, rest)| TextBlock::NumberedItem {
                    number: number.to_string(),
                    content: parse_inline(rest),
                })
            }
            LineRule::BulletItem => {
                line.strip_prefix(&BULLET_MARKERS[..])
                    .map(|rest| TextBlock::BulletItem {
                        content: parse_inline(rest.trim()),
                    })
            }
            LineRule::PlainLine => Some(TextBlock::PlainLine {
                content: parse_inline(line),
            }),
        }
    }
}

/// Splits a `**Key:** value` line into a [`TextBlock::KeyValue`].
///
/// The split happens at the first `:**`. Lines without that separator fall back
/// to a [`TextBlock::PlainLine`].
pub fn parse_key_value(line: &str) -> TextBlock {
    match line.split_once(KEY_VALUE_SEPARATOR) {
        Some((key, value)) => {
            let key = key.strip_prefix(BOLD_MARKER).unwrap_or(key);
            let value = value.strip_suffix(BOLD_MARKER).unwrap_or(value).trim();
            TextBlock::KeyValue {
                key: key.to_string(),
                value: value.to_string(),
            }
        }
        None => TextBlock::PlainLine {
            content: parse_inline(line),
        },
    }
}

fn is_bold_key_line(line: &str) -> bool {
    line.starts_with(BOLD_MARKER) && line.contains(KEY_VALUE_SEPARATOR)
}

// One leading marker, then one trailing marker when there is one left.
fn strip_header_markers(line: &str) -> &str {
    let inner = line.strip_prefix(BOLD_MARKER).unwrap_or(line);
    inner.strip_suffix(BOLD_MARKER).unwrap_or(inner)
}

// Both markers or neither: `**` and `***` are too short to hold a pair.
fn strip_surrounding_markers(line: &str) -> &str {
    line.strip_prefix(BOLD_MARKER)
        .and_then(|inner| inner.strip_suffix(BOLD_MARKER))
        .unwrap_or(line)
}

/// Matches `^\d+\.\s+(.*)$`, returning the digits and the remainder.
fn split_numbered(line: &str) -> Option<(&str, &str)> {
    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return None;
    }

    let after_dot = line[digits_end..].strip_prefix('.')?;
    let content = after_dot.trim_start_matches(&ITEM_SEPARATORS[..]);
    if content.len() == after_dot.len() {
        return None;
    }

    Some((&line[..digits_end], content))
}
