// src/context.rs
// Validated per-call configuration handed to every stage. Tiny and Copy.

use std::num::NonZeroUsize;
use thiserror::Error;

/// Default cap for runs of prolonged-sound marks and repeated punctuation.
pub const DEFAULT_REPEAT_THRESHOLD: usize = 2;

const DEFAULT_THRESHOLD: NonZeroUsize = match NonZeroUsize::new(DEFAULT_REPEAT_THRESHOLD) {
    Some(n) => n,
    None => panic!("default repeat threshold must be positive"),
};

/// Rejected configuration. Raised before any text is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("repeat_threshold must be a positive integer, got {0}")]
    InvalidRepeatThreshold(usize),
}

/// What happens to a whitespace run between two non-space codepoints.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhitespacePolicy {
    /// Every internal run becomes a single U+0020.
    #[default]
    Collapse,
    /// Internal runs are removed unless both neighbours are Latin-script, in
    /// which case they become a single U+0020.
    Strip,
}

/// Caller-facing normalization options.
///
/// Plain data; nothing is checked until it is turned into a [`Context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Longest run of prolonged-sound marks or repeatable punctuation kept.
    pub repeat_threshold: usize,
    /// Keep full-width Latin letters and digits as they are.
    pub preserve_latin_width: bool,
    pub whitespace_policy: WhitespacePolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            repeat_threshold: DEFAULT_REPEAT_THRESHOLD,
            preserve_latin_width: false,
            whitespace_policy: WhitespacePolicy::Collapse,
        }
    }
}

/// Runtime context passed to every normalization stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    repeat_threshold: NonZeroUsize,
    preserve_latin_width: bool,
    whitespace_policy: WhitespacePolicy,
}

impl Default for Context {
    #[inline]
    fn default() -> Self {
        Self {
            repeat_threshold: DEFAULT_THRESHOLD,
            preserve_latin_width: false,
            whitespace_policy: WhitespacePolicy::Collapse,
        }
    }
}

impl Context {
    /// Validate `options`.
    pub fn new(options: &Options) -> Result<Self, ConfigError> {
        let repeat_threshold = NonZeroUsize::new(options.repeat_threshold)
            .ok_or(ConfigError::InvalidRepeatThreshold(options.repeat_threshold))?;
        Ok(Self {
            repeat_threshold,
            preserve_latin_width: options.preserve_latin_width,
            whitespace_policy: options.whitespace_policy,
        })
    }

    #[inline(always)]
    pub fn repeat_threshold(&self) -> usize {
        self.repeat_threshold.get()
    }

    #[inline(always)]
    pub fn preserve_latin_width(&self) -> bool {
        self.preserve_latin_width
    }

    #[inline(always)]
    pub fn whitespace_policy(&self) -> WhitespacePolicy {
        self.whitespace_policy
    }

    /// The options this context was built from.
    pub fn options(&self) -> Options {
        Options {
            repeat_threshold: self.repeat_threshold(),
            preserve_latin_width: self.preserve_latin_width,
            whitespace_policy: self.whitespace_policy,
        }
    }
}

impl TryFrom<Options> for Context {
    type Error = ConfigError;

    fn try_from(options: Options) -> Result<Self, Self::Error> {
        Self::new(&options)
    }
}
