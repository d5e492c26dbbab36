// WHY: standalone normalization logic with buffer-reuse variants for batch processing
// Word-like runs get compatibility folding; punctuation and separators keep their
// canonical form so visually distinct separators are never merged.

use unicode_normalization::UnicodeNormalization;

use super::char_class::{classify, CharClass};

/// Normalize text: NFKC over maximal runs of word-like code points, NFC everywhere
/// else. Runs are concatenated back in order, so the output differs from the input
/// only by normalization. Idempotent; empty input maps to empty output.
pub fn normalize_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_text_into(text, &mut result);
    result
}

/// Normalize into a supplied buffer to avoid allocation in per-line loops.
pub fn normalize_text_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut run = String::new();
    let mut run_is_wordlike = false;

    for c in text.chars() {
        let wordlike = is_wordlike(c);
        if wordlike != run_is_wordlike && !run.is_empty() {
            flush_run(&run, run_is_wordlike, buffer);
            run.clear();
        }
        run_is_wordlike = wordlike;
        run.push(c);
    }
    if !run.is_empty() {
        flush_run(&run, run_is_wordlike, buffer);
    }
}

/// Word characters and logographic code points fold under NFKC (fullwidth forms,
/// ligatures, halfwidth kana); everything else keeps canonical composition only.
fn is_wordlike(c: char) -> bool {
    matches!(classify(c), CharClass::Word | CharClass::LogographicWord)
}

fn flush_run(run: &str, wordlike: bool, buffer: &mut String) {
    if wordlike {
        buffer.extend(run.nfkc());
    } else {
        buffer.extend(run.nfc());
    }
}
