//! Per-codepoint classification.
//!
//! Everything in this module is a pure function of a single codepoint (plus, for
//! [`symbol_class`], one bit of already-resolved left context). The stages never
//! look at anything else when deciding what a codepoint is.

pub mod data;

use data::{HALFWIDTH_KANA, HALFWIDTH_KANA_START, SEMI_VOICED, VOICED, WIDTH_VARIANTS};

/// Offset between the full-width ASCII block (U+FF01..=U+FF5E) and ASCII.
pub const FULLWIDTH_ASCII_OFFSET: u32 = 0xFEE0;

/// Category of a single codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    HalfwidthDigit,
    FullwidthDigit,
    HalfwidthLatin,
    FullwidthLatin,
    HalfwidthKatakana,
    FullwidthKatakana,
    Hiragana,
    /// `ー` and its half-width form `ｰ`.
    ProlongedMark,
    /// Dakuten / handakuten, combining (U+3099, U+309A), spacing (U+309B,
    /// U+309C) or half-width (U+FF9E, U+FF9F).
    VoicingMark,
    /// ASCII symbols and general punctuation.
    Punctuation,
    /// Full-width symbols: the non-alphanumeric part of U+FF01..=U+FF5E plus
    /// the full-width sign block.
    FullwidthPunctuation,
    /// Half-width CJK punctuation (U+FF61..=U+FF65) and half-width forms.
    HalfwidthPunctuation,
    Whitespace,
    Other,
}

/// Classify a codepoint. Total: unknown codepoints are [`CharClass::Other`].
#[inline]
pub fn classify(c: char) -> CharClass {
    use CharClass::*;
    match c as u32 {
        0x0030..=0x0039 => HalfwidthDigit,
        0x0041..=0x005A | 0x0061..=0x007A => HalfwidthLatin,
        0x0021..=0x007E => Punctuation,
        0xFF10..=0xFF19 => FullwidthDigit,
        0xFF21..=0xFF3A | 0xFF41..=0xFF5A => FullwidthLatin,
        0xFF01..=0xFF60 | 0xFFE0..=0xFFE6 => FullwidthPunctuation,
        0xFF61..=0xFF65 | 0xFFE8..=0xFFEE => HalfwidthPunctuation,
        0x30FC | 0xFF70 => ProlongedMark,
        0x3099..=0x309C | 0xFF9E | 0xFF9F => VoicingMark,
        0xFF66..=0xFF9D => HalfwidthKatakana,
        0x3041..=0x3096 | 0x309D..=0x309F => Hiragana,
        0x30A1..=0x30FA | 0x30FD..=0x30FF | 0x31F0..=0x31FF => FullwidthKatakana,
        _ if c.is_whitespace() => Whitespace,
        0x00A1..=0x00BF
        | 0x02D7
        | 0x058A
        | 0x2010..=0x2027
        | 0x2030..=0x205E
        | 0x207B
        | 0x208B
        | 0x2212
        | 0x223C
        | 0x223E
        | 0x2500
        | 0x2501
        | 0x3001..=0x3003
        | 0x3008..=0x3011
        | 0x3014..=0x301F
        | 0x3030
        | 0x30A0
        | 0x30FB
        | 0xFE63 => Punctuation,
        _ => Other,
    }
}

#[inline(always)]
pub fn is_whitespace(c: char) -> bool {
    classify(c) == CharClass::Whitespace
}

/// Hiragana, katakana of either width, or a prolonged-sound mark.
#[inline]
pub fn is_kana(c: char) -> bool {
    matches!(
        classify(c),
        CharClass::Hiragana
            | CharClass::FullwidthKatakana
            | CharClass::HalfwidthKatakana
            | CharClass::ProlongedMark
    )
}

/// Codepoints that keep a separating space next to them under
/// [`WhitespacePolicy::Strip`](crate::WhitespacePolicy::Strip): Basic Latin
/// through Latin Extended-B, and full-width letters and digits.
#[inline]
pub fn is_latin_context(c: char) -> bool {
    match classify(c) {
        CharClass::FullwidthLatin | CharClass::FullwidthDigit => true,
        CharClass::Whitespace => false,
        _ => (c as u32) <= 0x024F && !c.is_control(),
    }
}

/// Width-converted form of a single codepoint, ignoring composition.
///
/// Full-width letters and digits are kept as-is when `preserve_latin` is set;
/// full-width symbols always narrow.
#[inline]
pub fn convert_width(c: char, preserve_latin: bool) -> char {
    let cp = c as u32;
    match classify(c) {
        CharClass::FullwidthLatin | CharClass::FullwidthDigit if preserve_latin => c,
        CharClass::FullwidthLatin | CharClass::FullwidthDigit | CharClass::FullwidthPunctuation
            if cp <= 0xFF5E =>
        {
            char::from_u32(cp - FULLWIDTH_ASCII_OFFSET).unwrap_or(c)
        }
        CharClass::HalfwidthKatakana
        | CharClass::HalfwidthPunctuation
        | CharClass::ProlongedMark
        | CharClass::VoicingMark
            if (HALFWIDTH_KANA_START..=0xFF9F).contains(&cp) =>
        {
            HALFWIDTH_KANA[(cp - HALFWIDTH_KANA_START) as usize]
        }
        CharClass::VoicingMark => match c {
            '\u{3099}' => '゛',
            '\u{309A}' => '゜',
            _ => c,
        },
        CharClass::FullwidthPunctuation | CharClass::HalfwidthPunctuation => {
            WIDTH_VARIANTS.get(&c).copied().unwrap_or(c)
        }
        _ => c,
    }
}

/// Compose a full-width kana with a following voicing mark, if such a
/// precomposed codepoint exists.
#[inline]
pub fn compose_voicing(base: char, mark: char) -> Option<char> {
    let table = match mark {
        '\u{FF9E}' | '\u{3099}' => &VOICED,
        '\u{FF9F}' | '\u{309A}' => &SEMI_VOICED,
        _ => return None,
    };
    table.get(&base).copied()
}

/// Which side of a quotation a quote mark sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteSide {
    Opening,
    Closing,
    /// ASCII, prime and full-width quotes carry no direction.
    Neutral,
}

/// Equivalence classes shared by repeat capping and symbol unification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolClass {
    ProlongedMark,
    Dash,
    Tilde,
    DoubleQuote(QuoteSide),
    SingleQuote(QuoteSide),
    /// One side of a bracket pair, keyed by its half-width or CJK form.
    Bracket(char),
    /// `!`, `?` or `.`; runs only form from the identical codepoint.
    Repeatable(char),
}

impl SymbolClass {
    /// The single codepoint every member of the class is rewritten to.
    #[inline]
    pub const fn canonical(self) -> char {
        match self {
            SymbolClass::ProlongedMark => 'ー',
            SymbolClass::Dash => '-',
            SymbolClass::Tilde => '~',
            SymbolClass::DoubleQuote(_) => '"',
            SymbolClass::SingleQuote(_) => '\'',
            SymbolClass::Bracket(c) | SymbolClass::Repeatable(c) => c,
        }
    }

    /// Whether runs of this class are shortened to the repeat threshold.
    ///
    /// Neutral quotes are not: `”“` between two quotations unifies to `""`,
    /// which must survive a second pass untouched.
    #[inline]
    pub const fn is_capped(self) -> bool {
        !matches!(
            self,
            SymbolClass::DoubleQuote(QuoteSide::Neutral)
                | SymbolClass::SingleQuote(QuoteSide::Neutral)
        )
    }
}

/// Symbol class of `c`.
///
/// `after_kana` tells whether the codepoint directly before `c` is kana or was
/// itself resolved to [`SymbolClass::ProlongedMark`]. Long dashes (`—`, `―`,
/// `─`, `━`) written after kana are prolonged-sound marks, anywhere else they
/// are dashes.
#[inline]
pub fn symbol_class(c: char, after_kana: bool) -> Option<SymbolClass> {
    use QuoteSide::*;
    let class = match c {
        'ー' | 'ｰ' => SymbolClass::ProlongedMark,
        '\u{2014}' | '\u{2015}' | '\u{2500}' | '\u{2501}' => {
            if after_kana {
                SymbolClass::ProlongedMark
            } else {
                SymbolClass::Dash
            }
        }
        '-' | '\u{02D7}' | '\u{058A}' | '\u{2010}'..='\u{2013}' | '\u{2043}' | '\u{207B}'
        | '\u{208B}' | '\u{2212}' | '\u{FE63}' | '\u{FF0D}' => SymbolClass::Dash,
        '~' | '\u{223C}' | '\u{223E}' | '\u{301C}' | '\u{3030}' | '\u{FF5E}' => SymbolClass::Tilde,
        '\u{201C}' | '\u{201E}' | '\u{201F}' | '\u{301D}' => SymbolClass::DoubleQuote(Opening),
        '\u{201D}' | '\u{301E}' | '\u{301F}' => SymbolClass::DoubleQuote(Closing),
        '"' | '\u{2033}' | '\u{FF02}' => SymbolClass::DoubleQuote(Neutral),
        '\u{2018}' | '\u{201A}' | '\u{201B}' => SymbolClass::SingleQuote(Opening),
        '\u{2019}' => SymbolClass::SingleQuote(Closing),
        '\'' | '\u{2032}' | '\u{FF07}' => SymbolClass::SingleQuote(Neutral),
        '(' | '（' => SymbolClass::Bracket('('),
        ')' | '）' => SymbolClass::Bracket(')'),
        '[' | '［' => SymbolClass::Bracket('['),
        ']' | '］' => SymbolClass::Bracket(']'),
        '{' | '｛' => SymbolClass::Bracket('{'),
        '}' | '｝' => SymbolClass::Bracket('}'),
        '「' | '｢' => SymbolClass::Bracket('「'),
        '」' | '｣' => SymbolClass::Bracket('」'),
        '⦅' | '｟' => SymbolClass::Bracket('⦅'),
        '⦆' | '｠' => SymbolClass::Bracket('⦆'),
        '『' | '』' | '【' | '】' | '〔' | '〕' | '〈' | '〉' | '《' | '》' | '〖' | '〗' | '〘'
        | '〙' => SymbolClass::Bracket(c),
        '!' | '?' | '.' => SymbolClass::Repeatable(c),
        _ => return None,
    };
    Some(class)
}
