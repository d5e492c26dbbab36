// WHY: one facade owning the compiled protected-span matcher and the per-instance
// configuration, so differently-configured segmenters coexist across threads

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::debug;

pub mod char_class;
pub mod desegment;
pub mod normalize;
pub mod scanner;

// Re-export core types
pub use char_class::{classify, CharClass};
pub use desegment::{desegment_text, desegment_text_into};
pub use normalize::{normalize_text, normalize_text_into};
pub use scanner::{Token, TokenKind};

/// Construction-time configuration fixed for the lifetime of a [`Segmenter`].
#[derive(Debug, Clone, Copy)]
pub struct SegmenterConfig {
    /// Annotate dashes with `@` markers recording the original spacing, making
    /// segmentation reversible around dashes. Off by default.
    pub protected_dash_split: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            protected_dash_split: false,
        }
    }
}

/// Language-agnostic text normalizer, segmenter, and desegmenter.
///
/// All operations are pure per-call, take and return owned strings (or reuse a
/// caller buffer via the `_into` variants), and hold no mutable state, so one
/// instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: SegmenterConfig,
    protect_matcher: Regex,
}

impl Segmenter {
    /// Create a segmenter with the given configuration.
    pub fn new(config: SegmenterConfig) -> Result<Self> {
        // A pair of U+001F unit separators shields the span between them from
        // segmentation; pairing is per adjacent pair, never across spans
        let protect_matcher = Regex::new(r"\x1F[^\x1F]*\x1F")?;
        Ok(Self {
            config,
            protect_matcher,
        })
    }

    /// Create a segmenter with the default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(SegmenterConfig::default())
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Normalize text: NFKC over word-like runs, NFC elsewhere. Total; never fails.
    pub fn normalize(&self, text: &str) -> String {
        normalize_text(text)
    }

    /// Normalize into a supplied buffer (zero allocation on reuse).
    pub fn normalize_into(&self, text: &str, buffer: &mut String) {
        normalize_text_into(text, buffer);
    }

    /// Segment text into whitespace-joined tokens. Does not normalize; callers
    /// wanting identical output to [`Self::normalize_and_segment`] must pass
    /// already-normalized text.
    pub fn segment(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        self.segment_into(text, &mut result);
        result
    }

    /// Segment into a supplied buffer (zero allocation on reuse).
    pub fn segment_into(&self, text: &str, buffer: &mut String) {
        buffer.clear();
        let tokens = self.tokenize(text);
        debug!(tokens = tokens.len(), "segmented input");
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                buffer.push(' ');
            }
            buffer.push_str(&token.text);
        }
    }

    /// Normalize, then segment. Equivalent to `segment(normalize(text))`.
    pub fn normalize_and_segment(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        self.normalize_and_segment_into(text, &mut result);
        result
    }

    /// Normalize-and-segment into a supplied buffer.
    pub fn normalize_and_segment_into(&self, text: &str, buffer: &mut String) {
        let normalized = normalize_text(text);
        self.segment_into(&normalized, buffer);
    }

    /// Heuristically reconstruct unsegmented English text from segmenter output.
    pub fn desegment(&self, text: &str) -> String {
        desegment_text(text)
    }

    /// Desegment into a supplied buffer.
    pub fn desegment_into(&self, text: &str, buffer: &mut String) {
        desegment_text_into(text, buffer);
    }

    /// Produce the token sequence for `text`. [`Self::segment`] is this joined
    /// with single spaces. Protected spans are honored: material between a pair
    /// of U+001F separators passes through as one opaque token with the
    /// separators removed.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        for m in self.protect_matcher.find_iter(text) {
            tokens.extend(scanner::scan(
                &text[pos..m.start()],
                self.config.protected_dash_split,
            ));
            // U+001F is one byte in UTF-8, so the span body starts one byte in
            let body = &text[m.start() + 1..m.end() - 1];
            if !body.is_empty() {
                tokens.push(Token {
                    text: body.to_string(),
                    kind: TokenKind::Word,
                });
            }
            pos = m.end();
        }
        tokens.extend(scanner::scan(
            &text[pos..],
            self.config.protected_dash_split,
        ));
        tokens
    }
}
