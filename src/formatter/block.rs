use serde::Serialize;

/// A run of text that is either bold or regular.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineSpan {
    pub text: String,
    pub bold: bool,
}

impl InlineSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        InlineSpan {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        InlineSpan {
            text: text.into(),
            bold: true,
        }
    }
}

/// Ordered fragments of a single line, split on `**` pairs.
pub type InlineSpans = Vec<InlineSpan>;

/// One rendered row of formatted recipe text.
///
/// A document is an ordered `Vec<TextBlock>` with exactly one block per input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextBlock {
    /// Empty line, rendered as vertical spacing
    Blank,
    /// Header such as `**Ingredients & Seasonings:**`
    SectionHeader { text: String },
    /// Line wrapped entirely in bold markers
    BoldLine { text: String },
    /// `**Dish Name:** Pasta`
    KeyValue { key: String, value: String },
    /// `1. Boil water`
    NumberedItem { number: String, content: InlineSpans },
    /// `- Salt`, `* Salt` or `• Salt`
    BulletItem { content: InlineSpans },
    /// Anything else, with inline bold preserved
    PlainLine { content: InlineSpans },
}

impl TextBlock {
    /// Inline content for the variants that carry spans.
    pub fn spans(&self) -> Option<&[InlineSpan]> {
        match self {
            TextBlock::NumberedItem { content, .. }
            | TextBlock::BulletItem { content }
            | TextBlock::PlainLine { content } => Some(content),
            _ => None,
        }
    }
}

/// Rebuilds the source markup of a span sequence by re-wrapping bold spans in `**`.
pub fn to_markup(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|span| {
            if span.bold {
                format!("**{}**", span.text)
            } else {
                span.text.clone()
            }
        })
        .collect()
}

/// Concatenates span text with all bold markers dropped.
pub fn to_plain_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}
