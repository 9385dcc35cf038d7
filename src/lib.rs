pub mod context;
pub mod normalizer;
pub mod process;
pub mod stage;
pub mod unicode;

#[cfg(test)]
mod testing;

pub use context::{ConfigError, Context, DEFAULT_REPEAT_THRESHOLD, Options, WhitespacePolicy};
pub use normalizer::{Normalizer, NormalizerBuilder, normalize, normalize_with};
pub use stage::Stage;
pub use stage::collapse_repeats::CollapseRepeats;
pub use stage::normalize_whitespace::NormalizeWhitespace;
pub use stage::unify_symbols::UnifySymbols;
pub use stage::unify_width::UnifyWidth;
pub use unicode::{CharClass, QuoteSide, SymbolClass, classify};
