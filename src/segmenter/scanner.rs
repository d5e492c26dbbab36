// WHY: single-pass state machine so every boundary decision is local to one
// (state, class) transition and the merge exceptions stay testable in isolation

use super::char_class::{classify, is_decimal_digit, is_run_extender, CharClass};

/// Kind of an emitted token, derived from the dominant class of its source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Letters, digits, marks, including retained contraction apostrophes
    Word,
    /// Single punctuation or preserved control/unassigned code point
    Punct,
    /// Dash carrying `@` protection markers
    DashMarker,
    /// Unbroken run of logographic-script code points
    LogographicRun,
}

/// One output token. Tokens are produced left to right; the segmented string is
/// the token texts joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

/// Scanner states. Transitions are keyed by (state, CharClass).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Start,
    InWord,
    InWhitespace,
    InLogographic,
    AtApostrophe,
    AtDash,
    AtPunct,
}

/// Scan classified code points into tokens. Input is expected to be normalized
/// when fidelity with `normalize_and_segment` matters; the scan itself accepts
/// any string and never fails.
pub(crate) fn scan(text: &str, protected_dash_split: bool) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut state = ScanState::Start;

    for i in 0..chars.len() {
        let c = chars[i];
        match classify(c) {
            CharClass::Whitespace => {
                flush_run(&mut tokens, &mut run, state);
                state = ScanState::InWhitespace;
            }
            CharClass::Word => {
                if state == ScanState::InLogographic && is_run_extender(c) {
                    // Combining marks and modifiers ride the logographic run
                    run.push(c);
                } else {
                    if !matches!(state, ScanState::InWord | ScanState::AtApostrophe) {
                        flush_run(&mut tokens, &mut run, state);
                    }
                    run.push(c);
                    state = ScanState::InWord;
                }
            }
            CharClass::LogographicWord => {
                if state != ScanState::InLogographic {
                    flush_run(&mut tokens, &mut run, state);
                }
                run.push(c);
                state = ScanState::InLogographic;
            }
            CharClass::Apostrophe => {
                // An apostrophe glues a contraction together only between word
                // characters ("It's", "don't"); anywhere else it stands alone.
                let continues_word = state == ScanState::InWord
                    && next_class_is(&chars, i, CharClass::Word);
                if continues_word {
                    run.push(c);
                    state = ScanState::AtApostrophe;
                } else {
                    flush_run(&mut tokens, &mut run, state);
                    push_single(&mut tokens, c);
                    state = ScanState::AtPunct;
                }
            }
            CharClass::Dash => {
                flush_run(&mut tokens, &mut run, state);
                tokens.push(dash_token(&chars, i, protected_dash_split));
                state = ScanState::AtDash;
            }
            CharClass::Punctuation => {
                // '.' and ',' between decimal digits stay inside the number token
                let joins_number = state == ScanState::InWord
                    && matches!(c, '.' | ',')
                    && run.chars().last().map(is_decimal_digit).unwrap_or(false)
                    && chars.get(i + 1).copied().map(is_decimal_digit).unwrap_or(false);
                if joins_number {
                    run.push(c);
                } else {
                    flush_run(&mut tokens, &mut run, state);
                    push_single(&mut tokens, c);
                    state = ScanState::AtPunct;
                }
            }
            CharClass::Other => {
                // Unassigned/control code points force a boundary but are never
                // dropped; each one survives as its own token
                flush_run(&mut tokens, &mut run, state);
                push_single(&mut tokens, c);
                state = ScanState::AtPunct;
            }
        }
    }
    flush_run(&mut tokens, &mut run, state);
    tokens
}

fn flush_run(tokens: &mut Vec<Token>, run: &mut String, state: ScanState) {
    if run.is_empty() {
        return;
    }
    let kind = if state == ScanState::InLogographic {
        TokenKind::LogographicRun
    } else {
        TokenKind::Word
    };
    tokens.push(Token {
        text: std::mem::take(run),
        kind,
    });
}

fn push_single(tokens: &mut Vec<Token>, c: char) {
    tokens.push(Token {
        text: c.to_string(),
        kind: TokenKind::Punct,
    });
}

fn next_class_is(chars: &[char], i: usize, class: CharClass) -> bool {
    chars.get(i + 1).map(|&n| classify(n) == class).unwrap_or(false)
}

/// Encode one dash occurrence. With protection on, a `@` marker is attached on
/// each side whose neighboring character exists and is not whitespace, so the
/// original spacing can be reconstructed. At the string edges no marker is
/// emitted for the missing side.
fn dash_token(chars: &[char], i: usize, protected: bool) -> Token {
    let c = chars[i];
    if !protected {
        return Token {
            text: c.to_string(),
            kind: TokenKind::Punct,
        };
    }
    let attached_before = i
        .checked_sub(1)
        .map(|p| classify(chars[p]) != CharClass::Whitespace)
        .unwrap_or(false);
    let attached_after = chars
        .get(i + 1)
        .map(|&n| classify(n) != CharClass::Whitespace)
        .unwrap_or(false);
    if !attached_before && !attached_after {
        return Token {
            text: c.to_string(),
            kind: TokenKind::Punct,
        };
    }
    let mut text = String::with_capacity(6);
    if attached_before {
        text.push('@');
    }
    text.push(c);
    if attached_after {
        text.push('@');
    }
    Token {
        text,
        kind: TokenKind::DashMarker,
    }
}
