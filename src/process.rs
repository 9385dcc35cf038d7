//! Process abstraction.
//! A `ChainedProcess` is monomorphised: the compiler knows the concrete type of
//! every stage, so the fixed pipeline compiles down to a straight sequence of
//! passes over one double-buffered codepoint stream.
use crate::{context::Context, stage::Stage};
use tracing::trace;

/// The codepoints of one invocation plus a scratch buffer the next stage writes
/// into. Owned by a single call; dropped when the call returns.
#[derive(Debug, Default)]
pub struct CodepointStream {
    current: Vec<char>,
    scratch: Vec<char>,
}

impl CodepointStream {
    pub fn decode(text: &str) -> Self {
        Self {
            current: text.chars().collect(),
            scratch: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[char] {
        &self.current
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Run `stage` over the stream, replacing its contents with the output.
    pub fn rewrite<S: Stage + ?Sized>(&mut self, stage: &S, ctx: &Context) {
        self.scratch.clear();
        stage.apply(&self.current, &mut self.scratch, ctx);
        std::mem::swap(&mut self.current, &mut self.scratch);
    }

    pub fn encode(&self) -> String {
        self.current.iter().collect()
    }
}

pub trait Process: Send + Sync {
    /// Run every stage in order. Returns `true` if any stage rewrote the stream.
    fn process(&self, stream: &mut CodepointStream, ctx: &Context) -> bool;

    /// Append `stage` after everything already in this process.
    fn then<S: Stage>(self, stage: S) -> ChainedProcess<S, Self>
    where
        Self: Sized,
    {
        ChainedProcess {
            stage,
            previous: self,
        }
    }
}

pub struct EmptyProcess;

impl Process for EmptyProcess {
    #[inline(always)]
    fn process(&self, _stream: &mut CodepointStream, _ctx: &Context) -> bool {
        false
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process(&self, stream: &mut CodepointStream, ctx: &Context) -> bool {
        let changed = self.previous.process(stream, ctx);
        if !self.stage.needs_apply(stream.as_slice(), ctx) {
            return changed;
        }
        let before = stream.len();
        stream.rewrite(&self.stage, ctx);
        trace!(
            stage = self.stage.name(),
            before,
            after = stream.len(),
            "stage rewrote stream"
        );
        true
    }
}
