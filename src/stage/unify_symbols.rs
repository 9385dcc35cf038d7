use crate::{
    context::Context,
    stage::Stage,
    unicode::{SymbolClass, is_kana, symbol_class},
};

/// Rewrite dash, prolonged-sound, tilde and quote variants to one canonical
/// codepoint per class.
///
/// | Variants                                         | Canonical |
/// |--------------------------------------------------|-----------|
/// | `˗ ֊ ‐ ‑ ‒ – ⁃ ⁻ ₋ − ﹣ －`                          | `-`       |
/// | `ｰ`, and `— ― ─ ━` directly after kana            | `ー`      |
/// | `— ― ─ ━` anywhere else                           | `-`       |
/// | `∼ ∾ 〜 〰 ～`                                      | `~`       |
/// | `“ ” „ ‟ ″ 〝 〞 〟 ＂`                              | `"`       |
/// | `‘ ’ ‚ ‛ ′ ＇`                                     | `'`       |
/// | `（ ） ［ ］ ｛ ｝ ｢ ｣ ｟ ｠`                        | `( ) [ ] { } 「 」 ⦅ ⦆` |
///
/// "After kana" is judged on the already-rewritten output, so a chain of long
/// dashes following kana all become `ー`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnifySymbols;

#[inline(always)]
fn unify(c: char, prev: Option<char>) -> char {
    symbol_class(c, prev.is_some_and(is_kana)).map_or(c, SymbolClass::canonical)
}

impl Stage for UnifySymbols {
    fn name(&self) -> &'static str {
        "unify_symbols"
    }

    fn needs_apply(&self, text: &[char], _ctx: &Context) -> bool {
        let mut prev = None;
        for &c in text {
            let unified = unify(c, prev);
            if unified != c {
                return true;
            }
            prev = Some(unified);
        }
        false
    }

    fn apply(&self, text: &[char], out: &mut Vec<char>, _ctx: &Context) {
        out.reserve(text.len());
        for &c in text {
            let unified = unify(c, out.last().copied());
            out.push(unified);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    fn run(text: &str) -> String {
        UnifySymbols
            .process_str(Cow::Borrowed(text), &Context::default())
            .into_owned()
    }

    #[test]
    fn hyphen_variants_become_hyphen_minus() {
        assert_eq!(run("˗֊‐‑‒–⁃⁻₋−﹣"), "-----------");
    }

    #[test]
    fn long_dashes_follow_kana_context() {
        assert_eq!(run("スーパ——"), "スーパーー");
        assert_eq!(run("ラ━メン"), "ラーメン");
        assert_eq!(run("A—B"), "A-B");
        assert_eq!(run("—カ"), "-カ");
    }

    #[test]
    fn chain_of_long_dashes_after_kana_stays_prolonged() {
        assert_eq!(run("ア―─━"), "アーーー");
    }

    #[test]
    fn tilde_variants() {
        assert_eq!(run("∼∾〜〰～~"), "~~~~~~");
    }

    #[test]
    fn quote_variants() {
        assert_eq!(run("“a” „b‟ 〝c〟"), "\"a\" \"b\" \"c\"");
        assert_eq!(run("‘a’ ‚b‛"), "'a' 'b'");
    }

    #[test]
    fn bracket_width_variants() {
        assert_eq!(run("（ａ）［ｂ］"), "(ａ)[ｂ]");
        assert_eq!(run("｢引用｣"), "「引用」");
    }

    #[test]
    fn other_punctuation_untouched() {
        assert_eq!(run("「こんにちは」、世界。"), "「こんにちは」、世界。");
        assert_eq!(run("!?."), "!?.");
    }
}
