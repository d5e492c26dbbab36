// WHY: single classification function shared by normalizer, scanner, and desegmenter
// so every code point is bucketed exactly once and the components cannot disagree

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};
use unicode_script::{Script, UnicodeScript};

/// Semantic bucket for a single code point.
///
/// Every code point maps to exactly one class. Dash and apostrophe take priority
/// over generic punctuation; logographic scripts take priority over generic letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Letters, combining marks, decimal numbers, letter numbers
    Word,
    /// Unicode White_Space
    Whitespace,
    /// Remaining punctuation and symbol categories
    Punctuation,
    /// Unicode Dash property (hyphen-minus and all dash variants)
    Dash,
    /// Straight and curly quote marks used as contraction markers
    Apostrophe,
    /// Code points of scripts without whitespace-delimited words
    LogographicWord,
    /// Control, format, unassigned, everything else
    Other,
}

/// Scripts whose words are not delimited by whitespace. Runs of these code points
/// pass through segmentation as a single token with no internal splitting.
const LOGOGRAPHIC_SCRIPTS: &[Script] = &[
    Script::Han,
    Script::Hiragana,
    Script::Katakana,
    Script::Thai,
    Script::Khmer,
    Script::Lao,
    Script::Myanmar,
];

/// Classify one code point. Total over all of Unicode; never fails.
pub fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        return CharClass::Whitespace;
    }
    if is_apostrophe(c) {
        return CharClass::Apostrophe;
    }
    if is_dash(c) {
        return CharClass::Dash;
    }
    if LOGOGRAPHIC_SCRIPTS.contains(&c.script()) {
        return CharClass::LogographicWord;
    }
    match c.general_category_group() {
        GeneralCategoryGroup::Letter | GeneralCategoryGroup::Mark => CharClass::Word,
        GeneralCategoryGroup::Number => match c.general_category() {
            GeneralCategory::DecimalNumber | GeneralCategory::LetterNumber => CharClass::Word,
            // Fractions, superscripts, and other No code points stay out of words
            _ => CharClass::Other,
        },
        GeneralCategoryGroup::Punctuation | GeneralCategoryGroup::Symbol => CharClass::Punctuation,
        _ => CharClass::Other,
    }
}

/// Apostrophe-like quote marks that can glue contractions into one token.
pub fn is_apostrophe(c: char) -> bool {
    matches!(c, '\u{0027}' | '\u{2018}' | '\u{2019}')
}

/// Unicode Dash property (PropList.txt). Not exposed by the property crates,
/// so the set is carried as a range table.
pub fn is_dash(c: char) -> bool {
    matches!(
        c as u32,
        0x002D          // HYPHEN-MINUS
        | 0x058A        // ARMENIAN HYPHEN
        | 0x05BE        // HEBREW PUNCTUATION MAQAF
        | 0x1400        // CANADIAN SYLLABICS HYPHEN
        | 0x1806        // MONGOLIAN TODO SOFT HYPHEN
        | 0x2010..=0x2015 // HYPHEN through HORIZONTAL BAR
        | 0x2053        // SWUNG DASH
        | 0x207B        // SUPERSCRIPT MINUS
        | 0x208B        // SUBSCRIPT MINUS
        | 0x2212        // MINUS SIGN
        | 0x2E17        // DOUBLE OBLIQUE HYPHEN
        | 0x2E1A        // HYPHEN WITH DIAERESIS
        | 0x2E3A        // TWO-EM DASH
        | 0x2E3B        // THREE-EM DASH
        | 0x2E40        // DOUBLE HYPHEN
        | 0x2E5D        // OBLIQUE HYPHEN
        | 0x301C        // WAVE DASH
        | 0x3030        // WAVY DASH
        | 0x30A0        // KATAKANA-HIRAGANA DOUBLE HYPHEN
        | 0xFE31        // PRESENTATION FORM FOR VERTICAL EM DASH
        | 0xFE32        // PRESENTATION FORM FOR VERTICAL EN DASH
        | 0xFE58        // SMALL EM DASH
        | 0xFE63        // SMALL HYPHEN-MINUS
        | 0xFF0D        // FULLWIDTH HYPHEN-MINUS
        | 0x10EAD       // YEZIDI HYPHENATION MARK
    )
}

/// Decimal digit (Nd). Used by the numeric-separator retention rule.
pub(crate) fn is_decimal_digit(c: char) -> bool {
    c.general_category() == GeneralCategory::DecimalNumber
}

/// Any Number category (Nd, Nl, No). The desegmenter uses this for the
/// inch-mark rule after measurements.
pub(crate) fn is_number(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Number
}

/// Marks and modifiers that extend an in-progress logographic run instead of
/// forcing a boundary (combining marks, modifier letters, modifier symbols).
pub(crate) fn is_run_extender(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Mark
        || matches!(
            c.general_category(),
            GeneralCategory::ModifierLetter | GeneralCategory::ModifierSymbol
        )
}

/// Punctuation that attaches to the previous token when desegmenting:
/// closing/final quotes and brackets plus standard sentence punctuation.
pub(crate) fn attaches_to_previous(c: char) -> bool {
    matches!(
        c.general_category(),
        GeneralCategory::FinalPunctuation | GeneralCategory::ClosePunctuation
    ) || matches!(c, ',' | '.' | '?' | '!' | ':' | ';' | '%')
}

/// Punctuation that attaches to the following token when desegmenting:
/// currency symbols, opening/initial quotes and brackets, inverted marks.
pub(crate) fn attaches_to_following(c: char) -> bool {
    matches!(
        c.general_category(),
        GeneralCategory::CurrencySymbol
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::OpenPunctuation
    ) || matches!(c, '\u{00BF}' | '\u{00A1}')
}

/// Separators that attach on both sides when desegmenting.
pub(crate) fn attaches_to_both(c: char) -> bool {
    matches!(c, '|' | '/' | '\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_classification() {
        for c in ['a', 'Z', 'é', 'ß', 'א', '7', '٣', '\u{0301}', 'Ⅻ'] {
            assert_eq!(classify(c), CharClass::Word, "expected Word for {c:?}");
        }
    }

    #[test]
    fn test_whitespace_classification() {
        for c in [' ', '\t', '\n', '\u{00A0}', '\u{3000}'] {
            assert_eq!(classify(c), CharClass::Whitespace, "expected Whitespace for {c:?}");
        }
    }

    #[test]
    fn test_dash_variants_share_one_class() {
        for c in ['-', '\u{2010}', '\u{2013}', '\u{2014}', '\u{2212}', '\u{FF0D}'] {
            assert_eq!(classify(c), CharClass::Dash, "expected Dash for {c:?}");
        }
    }

    #[test]
    fn test_apostrophe_priority_over_punctuation() {
        assert_eq!(classify('\''), CharClass::Apostrophe);
        assert_eq!(classify('\u{2018}'), CharClass::Apostrophe);
        assert_eq!(classify('\u{2019}'), CharClass::Apostrophe);
        // Double quotes stay ordinary punctuation
        assert_eq!(classify('"'), CharClass::Punctuation);
    }

    #[test]
    fn test_logographic_scripts() {
        for c in ['日', '語', 'ひ', 'カ', 'ไ', 'ท', 'ກ', 'ម'] {
            assert_eq!(classify(c), CharClass::LogographicWord, "expected LogographicWord for {c:?}");
        }
        // Hangul has inter-word spacing and is segmented like any alphabetic script
        assert_eq!(classify('한'), CharClass::Word);
    }

    #[test]
    fn test_ideographic_punctuation_splits() {
        // CJK punctuation is script-Common, so it lands in Punctuation, not LogographicWord
        assert_eq!(classify('、'), CharClass::Punctuation);
        assert_eq!(classify('。'), CharClass::Punctuation);
    }

    #[test]
    fn test_other_classification() {
        assert_eq!(classify('\u{0000}'), CharClass::Other);
        assert_eq!(classify('\u{001F}'), CharClass::Other);
        assert_eq!(classify('\u{200D}'), CharClass::Other);
        // Fractions and superscripts are not word characters
        assert_eq!(classify('½'), CharClass::Other);
        assert_eq!(classify('²'), CharClass::Other);
    }

    #[test]
    fn test_at_sign_is_ordinary_punctuation() {
        assert_eq!(classify('@'), CharClass::Punctuation);
    }

    #[test]
    fn test_attach_sets() {
        for c in ['.', ',', '?', '!', ':', ';', '%', ')', ']', '\u{201D}', '\u{2019}'] {
            assert!(attaches_to_previous(c), "expected attach-to-previous for {c:?}");
        }
        for c in ['$', '€', '(', '[', '\u{201C}', '¿', '¡'] {
            assert!(attaches_to_following(c), "expected attach-to-following for {c:?}");
        }
        for c in ['|', '/', '\\'] {
            assert!(attaches_to_both(c), "expected attach-to-both for {c:?}");
        }
        assert!(!attaches_to_previous('-'));
        assert!(!attaches_to_following('"'));
    }
}
