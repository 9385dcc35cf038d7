use crate::{
    context::{ConfigError, Context, Options, WhitespacePolicy},
    process::{ChainedProcess, CodepointStream, EmptyProcess, Process},
    stage::{
        collapse_repeats::CollapseRepeats, normalize_whitespace::NormalizeWhitespace,
        unify_symbols::UnifySymbols, unify_width::UnifyWidth,
    },
};
use std::borrow::Cow;
use tracing::debug;

/// Width → whitespace → repeats → symbols. Later stages see the output of
/// earlier ones and nothing else.
type Pipeline = ChainedProcess<
    UnifySymbols,
    ChainedProcess<
        CollapseRepeats,
        ChainedProcess<NormalizeWhitespace, ChainedProcess<UnifyWidth, EmptyProcess>>,
    >,
>;

fn pipeline() -> Pipeline {
    EmptyProcess
        .then(UnifyWidth)
        .then(NormalizeWhitespace)
        .then(CollapseRepeats)
        .then(UnifySymbols)
}

/// Japanese text normalizer with validated options.
///
/// Cheap to build, immutable, and `Send + Sync`: share one across threads.
///
/// ```
/// use neologdn::Normalizer;
///
/// let normalizer = Normalizer::builder().repeat_threshold(1).build()?;
/// assert_eq!(normalizer.normalize("ﾊﾝｶｸｶﾅ　すごーーーい！！"), "ハンカクカナ すごーい!");
/// # Ok::<(), neologdn::ConfigError>(())
/// ```
pub struct Normalizer {
    ctx: Context,
    pipeline: Pipeline,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::with_context(Context::default())
    }
}

impl Normalizer {
    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::default()
    }

    pub fn new(options: &Options) -> Result<Self, ConfigError> {
        Ok(Self::with_context(Context::new(options)?))
    }

    pub fn with_context(ctx: Context) -> Self {
        debug!(
            repeat_threshold = ctx.repeat_threshold(),
            preserve_latin_width = ctx.preserve_latin_width(),
            whitespace_policy = ?ctx.whitespace_policy(),
            "normalizer configured"
        );
        Self {
            ctx,
            pipeline: pipeline(),
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Normalize `text`. Returns the input unchanged (borrowed) when no stage
    /// has anything to do.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.is_empty() {
            return Cow::Borrowed(text);
        }
        let mut stream = CodepointStream::decode(text);
        if self.pipeline.process(&mut stream, &self.ctx) {
            Cow::Owned(stream.encode())
        } else {
            Cow::Borrowed(text)
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizerBuilder {
    options: Options,
}

impl NormalizerBuilder {
    pub fn repeat_threshold(mut self, repeat_threshold: usize) -> Self {
        self.options.repeat_threshold = repeat_threshold;
        self
    }

    pub fn preserve_latin_width(mut self, preserve: bool) -> Self {
        self.options.preserve_latin_width = preserve;
        self
    }

    pub fn whitespace_policy(mut self, policy: WhitespacePolicy) -> Self {
        self.options.whitespace_policy = policy;
        self
    }

    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Result<Normalizer, ConfigError> {
        Normalizer::new(&self.options)
    }
}

/// Normalize `text` with the default options.
pub fn normalize(text: &str) -> String {
    Normalizer::default().normalize(text).into_owned()
}

/// Normalize `text` with `options`, rejecting invalid options before touching
/// the text.
pub fn normalize_with(text: &str, options: &Options) -> Result<String, ConfigError> {
    let normalizer = Normalizer::new(options)?;
    Ok(normalizer.normalize(text).into_owned())
}
