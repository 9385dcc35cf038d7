use crate::{
    context::{Context, WhitespacePolicy},
    stage::Stage,
    unicode::{is_latin_context, is_whitespace},
};

/// Collapse whitespace runs and strip the string's edges.
///
/// A whitespace run is any maximal sequence of `White_Space=Yes` codepoints:
/// ASCII space, tab and line breaks, NBSP, the ideographic space U+3000, the
/// U+2000..=U+200A spaces and so on.
///
/// | Position of the run | `Collapse`        | `Strip`                                   |
/// |---------------------|-------------------|-------------------------------------------|
/// | leading / trailing  | removed           | removed                                   |
/// | internal            | one U+0020        | one U+0020 between two Latin codepoints,  |
/// |                     |                   | removed otherwise                         |
///
/// `"a  　b"` → `"a b"` under both policies; `"南アルプスの　天然水"` →
/// `"南アルプスの天然水"` under `Strip`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizeWhitespace;

impl NormalizeWhitespace {
    /// Whether an internal run between `prev` and `next` survives as a space.
    #[inline(always)]
    fn keeps_gap(prev: char, next: char, policy: WhitespacePolicy) -> bool {
        match policy {
            WhitespacePolicy::Collapse => true,
            WhitespacePolicy::Strip => is_latin_context(prev) && is_latin_context(next),
        }
    }
}

impl Stage for NormalizeWhitespace {
    fn name(&self) -> &'static str {
        "normalize_whitespace"
    }

    fn needs_apply(&self, text: &[char], ctx: &Context) -> bool {
        let (Some(&first), Some(&last)) = (text.first(), text.last()) else {
            return false;
        };
        if is_whitespace(first) || is_whitespace(last) {
            return true;
        }

        let policy = ctx.whitespace_policy();
        // Edges are non-whitespace here, so every run has neighbours on both sides.
        for (i, &c) in text.iter().enumerate() {
            if !is_whitespace(c) {
                continue;
            }
            if c != ' ' {
                return true;
            }
            let prev = text[i - 1];
            let next = text[i + 1];
            if is_whitespace(prev) || is_whitespace(next) {
                return true;
            }
            if !Self::keeps_gap(prev, next, policy) {
                return true;
            }
        }
        false
    }

    fn apply(&self, text: &[char], out: &mut Vec<char>, ctx: &Context) {
        let policy = ctx.whitespace_policy();
        out.reserve(text.len());
        let mut pending = false;
        for &c in text {
            if is_whitespace(c) {
                pending = true;
                continue;
            }
            if pending {
                pending = false;
                // Nothing emitted yet → leading run, dropped.
                if let Some(&prev) = out.last() {
                    if Self::keeps_gap(prev, c, policy) {
                        out.push(' ');
                    }
                }
            }
            out.push(c);
        }
        // A trailing run is never flushed.
    }
}
