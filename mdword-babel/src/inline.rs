//! Inline markup stripping for paragraph text.
//!
//! Emphasis and code-span delimiters are removed, not translated into styled
//! runs. Each pass is a lazy regular expression rewrite and the passes run in a
//! fixed order, every pass seeing the output of the one before. Interactions
//! between overlapping markers depend on that order, so `***x***` comes out as
//! `x` only because the double-asterisk pass runs before the single one.

use once_cell::sync::Lazy;
use regex::Regex;

static STRONG_ASTERISK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid strong asterisk regex"));
static STRONG_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__(.+?)__").expect("valid strong underscore regex"));
static EMPHASIS_ASTERISK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("valid emphasis asterisk regex"));
static EMPHASIS_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_(.+?)_").expect("valid emphasis underscore regex"));
static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.+?)`").expect("valid code regex"));

/// One substitution pass of the inline chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlinePass {
    StrongAsterisk,
    StrongUnderscore,
    EmphasisAsterisk,
    EmphasisUnderscore,
    CodeSpan,
}

/// Application order of the chain.
pub const RULES: [InlinePass; 5] = [
    InlinePass::StrongAsterisk,
    InlinePass::StrongUnderscore,
    InlinePass::EmphasisAsterisk,
    InlinePass::EmphasisUnderscore,
    InlinePass::CodeSpan,
];

impl InlinePass {
    fn pattern(self) -> &'static Regex {
        match self {
            InlinePass::StrongAsterisk => &STRONG_ASTERISK,
            InlinePass::StrongUnderscore => &STRONG_UNDERSCORE,
            InlinePass::EmphasisAsterisk => &EMPHASIS_ASTERISK,
            InlinePass::EmphasisUnderscore => &EMPHASIS_UNDERSCORE,
            InlinePass::CodeSpan => &CODE_SPAN,
        }
    }

    /// Whether this pass would rewrite anything in `text`.
    pub fn matches(self, text: &str) -> bool {
        self.pattern().is_match(text)
    }
}

/// Replace every non-overlapping span delimited by `rule` with its inner text.
pub fn apply_pass(rule: InlinePass, text: &str) -> String {
    rule.pattern().replace_all(text, "${1}").into_owned()
}

/// Run the whole chain over `text`.
pub fn strip_inline_markup(text: &str) -> String {
    RULES
        .iter()
        .fold(text.to_string(), |acc, &rule| apply_pass(rule, &acc))
}
