use crate::{
    context::Context,
    stage::Stage,
    unicode::{compose_voicing, convert_width},
};

/// Unifies character width for Japanese text.
///
/// - Full-width letters and digits → ASCII (`Ａ１` → `A1`), unless
///   `preserve_latin_width` is set
/// - Full-width symbols → ASCII (`！` → `!`, `～` → `~`), always
/// - Half-width katakana → full-width (`ｱ` → `ア`, `ｰ` → `ー`, `｢` → `「`)
/// - Kana followed by a voicing mark → one precomposed codepoint
///   (`ｶﾞ` → `ガ`, `ﾊﾟ` → `パ`, `か\u{3099}` → `が`)
/// - A voicing mark with nothing to compose with → spacing `゛` / `゜`
///
/// Whitespace is left alone; `U+3000` is handled by the whitespace stage.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnifyWidth;

impl Stage for UnifyWidth {
    fn name(&self) -> &'static str {
        "unify_width"
    }

    #[inline]
    fn needs_apply(&self, text: &[char], ctx: &Context) -> bool {
        // Composition always consumes a voicing mark, which converts on its own.
        let preserve = ctx.preserve_latin_width();
        text.iter().any(|&c| convert_width(c, preserve) != c)
    }

    fn apply(&self, text: &[char], out: &mut Vec<char>, ctx: &Context) {
        let preserve = ctx.preserve_latin_width();
        out.reserve(text.len());
        let mut i = 0;
        while i < text.len() {
            let c = convert_width(text[i], preserve);
            if let Some(voiced) = text.get(i + 1).and_then(|&mark| compose_voicing(c, mark)) {
                out.push(voiced);
                i += 2;
                continue;
            }
            out.push(c);
            i += 1;
        }
    }
}
