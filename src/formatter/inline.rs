use super::block::{InlineSpan, InlineSpans};

pub(crate) const BOLD_MARKER: &str = "**";

/// Splits a line into plain and bold spans on paired `**` markers.
///
/// An opening marker without a closing partner is kept as literal text, together
/// with everything after it. Empty plain runs are dropped; empty bold runs
/// (from `****`) are kept so that the markup can be rebuilt exactly.
pub fn parse_inline(text: &str) -> InlineSpans {
    let mut spans = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        let Some(open) = remaining.find(BOLD_MARKER) else {
            spans.push(InlineSpan::plain(remaining));
            break;
        };

        if open > 0 {
            spans.push(InlineSpan::plain(&remaining[..open]));
        }

        let after_open = &remaining[open + BOLD_MARKER.len()..];
        let Some(close) = after_open.find(BOLD_MARKER) else {
            spans.push(InlineSpan::plain(&remaining[open..]));
            break;
        };

        spans.push(InlineSpan::bold(&after_open[..close]));
        remaining = &after_open[close + BOLD_MARKER.len()..];
    }

    spans
}
