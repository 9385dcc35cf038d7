//! Core normalization stage abstraction.
//!
//! A stage is one left-to-right pass over the codepoint stream. It reads the
//! input slice with at most one codepoint of lookahead or lookbehind and writes
//! its result into an output buffer owned by the caller, so a pipeline can
//! ping-pong between two buffers instead of re-encoding text between passes.
//!
//! Every stage has a fast pre-check, [`Stage::needs_apply`], that must agree
//! exactly with [`Stage::apply`]: it returns `true` iff `apply` would produce a
//! different stream. Pipelines rely on this to skip stages and to hand back the
//! caller's text untouched (`Cow::Borrowed`) when nothing changed.

pub mod collapse_repeats;
pub mod normalize_whitespace;
pub mod unify_symbols;
pub mod unify_width;

use crate::context::Context;
use std::borrow::Cow;

/// A single normalization pass.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Returns `true` iff [`Stage::apply`] would change `text`.
    fn needs_apply(&self, text: &[char], ctx: &Context) -> bool;

    /// Rewrite `text` into `out`. `out` is empty on entry.
    fn apply(&self, text: &[char], out: &mut Vec<char>, ctx: &Context);

    /// Run this stage alone over a string.
    ///
    /// Zero-copy when the stage has nothing to do.
    fn process_str<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        let chars: Vec<char> = text.chars().collect();
        if !self.needs_apply(&chars, ctx) {
            return text;
        }
        let mut out = Vec::with_capacity(chars.len());
        self.apply(&chars, &mut out, ctx);
        Cow::Owned(out.into_iter().collect())
    }
}
