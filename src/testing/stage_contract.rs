use crate::{
    context::{Context, Options, WhitespacePolicy},
    stage::Stage,
};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " ﾃｽﾄ ", "テスト", "", "すごーーーい！！！"]
    }

    /// Samples that must pass through unchanged and without allocation in
    /// every context.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "test123", "abc def", ""]
    }

    /// Input/output pairs checked under the default context.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Contexts every contract is checked under.
pub fn contexts() -> Vec<Context> {
    let variants = [
        Options::default(),
        Options {
            repeat_threshold: 1,
            ..Options::default()
        },
        Options {
            repeat_threshold: 3,
            ..Options::default()
        },
        Options {
            preserve_latin_width: true,
            ..Options::default()
        },
        Options {
            whitespace_policy: WhitespacePolicy::Strip,
            ..Options::default()
        },
    ];
    variants
        .iter()
        .map(|options| Context::new(options).expect("test options are valid"))
        .collect()
}

/// Assert that a stage satisfies the universal stage contracts:
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_accurate` → correctly predicts whether apply() changes text
/// 4. `handles_empty_string_and_ascii` → graceful on edge cases
/// 5. `no_panic_on_mixed_scripts` → survives mixed real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for ctx in contexts() {
        for &input in S::samples() {
            let chars: Vec<char> = input.chars().collect();
            let text = stage.process_str(Cow::Borrowed(input), &ctx);
            if !stage.needs_apply(&chars, &ctx) {
                assert_eq!(input as *const str, text.as_ref() as *const str);
            }

            // Second pass must never allocate again
            let old_ptr = text.as_ref() as *const str;
            let again = stage.process_str(Cow::Borrowed(text.as_ref()), &ctx);
            assert_eq!(
                old_ptr,
                again.as_ref() as *const str,
                "zero-copy violated on second pass of `{}` ({ctx:?}, input: `{input}`)",
                stage.name()
            );
        }

        for &pass_through in S::should_pass_through() {
            let text = stage.process_str(Cow::Borrowed(pass_through), &ctx);
            assert_eq!(text.as_ref(), pass_through);
            assert_eq!(
                pass_through as *const str,
                text.as_ref() as *const str,
                "zero-copy violated on pass-through sample ({ctx:?}, input: `{pass_through}`)"
            );
        }
    }

    let ctx = Context::default();
    for &(input, expected) in S::should_transform() {
        let text = stage.process_str(Cow::Borrowed(input), &ctx);
        assert_eq!(text.as_ref(), expected, "`{}` on `{input}`", stage.name());
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    for ctx in contexts() {
        let transformed = S::should_transform().iter().map(|&(input, _)| input);
        for input in S::samples().iter().copied().chain(transformed) {
            let once = stage.process_str(Cow::Borrowed(input), &ctx).into_owned();
            let twice = stage.process_str(Cow::Borrowed(once.as_str()), &ctx);
            assert_eq!(
                once,
                twice.as_ref(),
                "`{}` not idempotent ({ctx:?}) on `{input}`",
                stage.name()
            );
        }
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    let must_not_touch = ["", "hello", "world123", "abc def"];
    for ctx in contexts() {
        let transformed = S::should_transform().iter().map(|&(input, _)| input);
        for input in S::samples()
            .iter()
            .copied()
            .chain(transformed)
            .chain(must_not_touch)
        {
            check_accuracy(&stage, input, &ctx);
        }
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str, ctx: &Context) {
    let chars: Vec<char> = input.chars().collect();
    let predicted = stage.needs_apply(&chars, ctx);
    let mut out = Vec::new();
    stage.apply(&chars, &mut out, ctx);
    let actually_changes = out != chars;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` ({ctx:?}) on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {:?})",
        stage.name(),
        out.iter().collect::<String>()
    );
}

pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: S) {
    let ctx = Context::default();
    let result_empty = stage.process_str(Cow::Borrowed(""), &ctx);
    assert_eq!(result_empty.as_ref(), "");

    let ascii = "hello world 123 #@%";
    let result_ascii = stage.process_str(Cow::Borrowed(ascii), &ctx);
    assert_eq!(result_ascii.as_ref(), ascii);
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    for ctx in contexts() {
        let _ = stage.process_str(
            Cow::Borrowed("Hello 世界 ﾃｽﾄﾞ ｶﾞｷﾞ　русский ーー—— 〜〜 😀\u{3099}"),
            &ctx,
        );
    }
}
