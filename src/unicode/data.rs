//! Static conversion tables. Everything here is compile-time data: no table is
//! built or mutated at run time.

use phf::{Map, phf_map};

/// First codepoint of the half-width katakana block covered by [`HALFWIDTH_KANA`].
pub const HALFWIDTH_KANA_START: u32 = 0xFF61;

/// Full-width targets for U+FF61..=U+FF9F, indexed by `cp - HALFWIDTH_KANA_START`.
///
/// The two trailing entries are the standalone spacing voicing marks used when a
/// half-width mark has nothing to compose with.
pub static HALFWIDTH_KANA: [char; 63] = [
    '。', '「', '」', '、', '・', // U+FF61..=U+FF65
    'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ッ', // U+FF66..=U+FF6F
    'ー', // U+FF70
    'ア', 'イ', 'ウ', 'エ', 'オ', //
    'カ', 'キ', 'ク', 'ケ', 'コ', //
    'サ', 'シ', 'ス', 'セ', 'ソ', //
    'タ', 'チ', 'ツ', 'テ', 'ト', //
    'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', //
    'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', //
    'マ', 'ミ', 'ム', 'メ', 'モ', //
    'ヤ', 'ユ', 'ヨ', //
    'ラ', 'リ', 'ル', 'レ', 'ロ', //
    'ワ', 'ン', // U+FF9C..=U+FF9D
    '゛', '゜', // U+FF9E..=U+FF9F
];

/// Width variants outside the arithmetic U+FF01..=U+FF5E block and the
/// half-width katakana block.
pub static WIDTH_VARIANTS: Map<char, char> = phf_map! {
    '｟' => '⦅',
    '｠' => '⦆',
    '￠' => '¢',
    '￡' => '£',
    '￢' => '¬',
    '￣' => '¯',
    '￤' => '¦',
    '￥' => '¥',
    '￦' => '₩',
    '￨' => '│',
    '￩' => '←',
    '￪' => '↑',
    '￫' => '→',
    '￬' => '↓',
    '￭' => '■',
    '￮' => '○',
};

/// Full-width kana → voiced (dakuten) form.
pub static VOICED: Map<char, char> = phf_map! {
    'う' => 'ゔ',
    'か' => 'が', 'き' => 'ぎ', 'く' => 'ぐ', 'け' => 'げ', 'こ' => 'ご',
    'さ' => 'ざ', 'し' => 'じ', 'す' => 'ず', 'せ' => 'ぜ', 'そ' => 'ぞ',
    'た' => 'だ', 'ち' => 'ぢ', 'つ' => 'づ', 'て' => 'で', 'と' => 'ど',
    'は' => 'ば', 'ひ' => 'び', 'ふ' => 'ぶ', 'へ' => 'べ', 'ほ' => 'ぼ',
    'ゝ' => 'ゞ',
    'ウ' => 'ヴ',
    'カ' => 'ガ', 'キ' => 'ギ', 'ク' => 'グ', 'ケ' => 'ゲ', 'コ' => 'ゴ',
    'サ' => 'ザ', 'シ' => 'ジ', 'ス' => 'ズ', 'セ' => 'ゼ', 'ソ' => 'ゾ',
    'タ' => 'ダ', 'チ' => 'ヂ', 'ツ' => 'ヅ', 'テ' => 'デ', 'ト' => 'ド',
    'ハ' => 'バ', 'ヒ' => 'ビ', 'フ' => 'ブ', 'ヘ' => 'ベ', 'ホ' => 'ボ',
    'ワ' => 'ヷ', 'ヰ' => 'ヸ', 'ヱ' => 'ヹ', 'ヲ' => 'ヺ',
    'ヽ' => 'ヾ',
};

/// Full-width kana → semi-voiced (handakuten) form.
pub static SEMI_VOICED: Map<char, char> = phf_map! {
    'は' => 'ぱ', 'ひ' => 'ぴ', 'ふ' => 'ぷ', 'へ' => 'ぺ', 'ほ' => 'ぽ',
    'ハ' => 'パ', 'ヒ' => 'ピ', 'フ' => 'プ', 'ヘ' => 'ペ', 'ホ' => 'ポ',
};
