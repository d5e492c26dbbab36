// WHY: desegmentation is a heuristic walk, not an inverse state machine; each token
// picks an attachment role and the pending-space flag carries the decision forward

use super::char_class::{
    attaches_to_both, attaches_to_following, attaches_to_previous, is_dash, is_number,
};

/// How a token joins the text being rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenRole {
    /// Closing punctuation: no space before, space after
    AttachLeft,
    /// Opening punctuation and currency: space before, none after
    AttachRight,
    /// Separators that bind on both sides (| / \)
    AttachBoth,
    /// Decoded protected dash; the markers say which sides close up
    ProtectedDash { left: bool, dash: char, right: bool },
    /// Straight apostrophe with stateful pairing
    StraightApostrophe,
    /// Straight double quote with stateful pairing
    StraightQuote,
    /// Everything else: spaces on both sides
    Plain,
}

/// Reconstruct a plausible unsegmented sentence from whitespace-separated tokens.
///
/// English-oriented best effort: sentence punctuation reattaches, bracket and
/// quote pairs close up, and protected dashes (`@-@`, `-@`, `@-`) restore the
/// spacing their markers encode. Input that itself contained `@` next to a dash
/// is indistinguishable from the markers and may be joined too tightly.
pub fn desegment_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    desegment_text_into(text, &mut result);
    result
}

/// Desegment into a supplied buffer to avoid allocation in per-line loops.
pub fn desegment_text_into(text: &str, buffer: &mut String) {
    buffer.clear();

    let mut prepend_space = false;
    let mut in_apostrophe = false;
    let mut in_quote = false;
    let mut prev_token = "";

    for token in text.split_whitespace() {
        match token_role(token) {
            TokenRole::AttachRight => {
                if prepend_space {
                    buffer.push(' ');
                }
                buffer.push_str(token);
                prepend_space = false;
            }
            TokenRole::AttachLeft => {
                buffer.push_str(token);
                prepend_space = true;
            }
            TokenRole::AttachBoth => {
                buffer.push_str(token);
                prepend_space = false;
            }
            TokenRole::ProtectedDash { left, dash, right } => {
                if !left && prepend_space {
                    buffer.push(' ');
                }
                buffer.push(dash);
                prepend_space = !right;
            }
            TokenRole::StraightApostrophe => {
                if prev_token.ends_with('s') {
                    // Possessive after plural: "birds '" -> "birds'"
                    buffer.push('\'');
                    prepend_space = true;
                } else if in_apostrophe {
                    buffer.push('\'');
                    prepend_space = true;
                    in_apostrophe = false;
                } else {
                    if prepend_space {
                        buffer.push(' ');
                    }
                    buffer.push('\'');
                    prepend_space = false;
                    in_apostrophe = true;
                }
            }
            TokenRole::StraightQuote => {
                let after_number = prev_token.chars().last().map(is_number).unwrap_or(false);
                if after_number {
                    // Inch/second marks: 5 " -> 5"
                    buffer.push('"');
                    prepend_space = true;
                } else if in_quote {
                    buffer.push('"');
                    prepend_space = true;
                    in_quote = false;
                } else {
                    if prepend_space {
                        buffer.push(' ');
                    }
                    buffer.push('"');
                    prepend_space = false;
                    in_quote = true;
                }
            }
            TokenRole::Plain => {
                if prepend_space {
                    buffer.push(' ');
                }
                buffer.push_str(token);
                prepend_space = true;
            }
        }
        prev_token = token;
    }
}

fn token_role(token: &str) -> TokenRole {
    if let Some(role) = parse_protected_dash(token) {
        return role;
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            if c == '\'' {
                TokenRole::StraightApostrophe
            } else if c == '"' {
                TokenRole::StraightQuote
            } else if attaches_to_following(c) {
                TokenRole::AttachRight
            } else if attaches_to_previous(c) {
                TokenRole::AttachLeft
            } else if attaches_to_both(c) {
                TokenRole::AttachBoth
            } else {
                TokenRole::Plain
            }
        }
        _ => TokenRole::Plain,
    }
}

/// Match `{@?}<dash>{@?}` with at least one marker, for any Dash-property glyph.
/// A bare dash token is not protected and falls through to the plain rule.
fn parse_protected_dash(token: &str) -> Option<TokenRole> {
    let chars: Vec<char> = token.chars().collect();
    match chars.as_slice() {
        ['@', d, '@'] if is_dash(*d) => Some(TokenRole::ProtectedDash {
            left: true,
            dash: *d,
            right: true,
        }),
        ['@', d] if is_dash(*d) => Some(TokenRole::ProtectedDash {
            left: true,
            dash: *d,
            right: false,
        }),
        [d, '@'] if is_dash(*d) => Some(TokenRole::ProtectedDash {
            left: false,
            dash: *d,
            right: true,
        }),
        _ => None,
    }
}
