use crate::{
    context::Context,
    stage::Stage,
    unicode::{SymbolClass, is_kana, symbol_class},
};

/// Cap runs of prolonged-sound marks and repeated punctuation.
///
/// A run is a maximal sequence of codepoints in the same [`SymbolClass`]:
/// prolonged-sound marks, dashes, tildes, opening or closing quotes, one side
/// of a bracket pair, or one of `!`, `?`, `.` repeated. A run longer than
/// `repeat_threshold` keeps only its first `repeat_threshold` codepoints;
/// shorter or equal runs are left alone. This is length capping, not
/// deduplication.
///
/// Opening and closing forms are separate classes, so `“犬”“猫”` keeps both
/// quotations and `((a))` is capped on each side alike. Direction-less quotes
/// (`"`, `'`) are never capped.
///
/// Runs are detected by class, not by codepoint, so `A‐—−` is one dash run of
/// three and `すご—ーー` is one prolonged-mark run of three. The symbol stage
/// later rewrites each kept codepoint to the class's canonical form.
///
/// `"すごーーーーい"` → `"すごーーい"` with the default threshold of 2.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollapseRepeats;

/// Run-length accumulator for one left-to-right scan.
struct RunCounter {
    threshold: usize,
    class: Option<SymbolClass>,
    len: usize,
    prev: Option<char>,
}

impl RunCounter {
    fn new(threshold: usize) -> Self {
        Self {
            threshold,
            class: None,
            len: 0,
            prev: None,
        }
    }

    /// Feed the next codepoint; returns whether it is kept.
    #[inline]
    fn admit(&mut self, c: char) -> bool {
        let after_kana =
            self.class == Some(SymbolClass::ProlongedMark) || self.prev.is_some_and(is_kana);
        let class = symbol_class(c, after_kana);
        if class.is_some() && class == self.class {
            self.len += 1;
        } else {
            self.class = class;
            self.len = 1;
        }
        self.prev = Some(c);
        match class {
            Some(class) if class.is_capped() => self.len <= self.threshold,
            _ => true,
        }
    }
}

impl Stage for CollapseRepeats {
    fn name(&self) -> &'static str {
        "collapse_repeats"
    }

    fn needs_apply(&self, text: &[char], ctx: &Context) -> bool {
        let mut runs = RunCounter::new(ctx.repeat_threshold());
        text.iter().any(|&c| !runs.admit(c))
    }

    fn apply(&self, text: &[char], out: &mut Vec<char>, ctx: &Context) {
        let mut runs = RunCounter::new(ctx.repeat_threshold());
        out.extend(text.iter().copied().filter(|&c| runs.admit(c)));
    }
}
