// End-to-end coverage of the public segmentation API
// WHY: these pin the documented output shapes so scanner refactors cannot drift

use unitok::{Segmenter, SegmenterConfig};

fn protected() -> Segmenter {
    Segmenter::new(SegmenterConfig {
        protected_dash_split: true,
    })
    .expect("segmenter construction should succeed")
}

fn plain() -> Segmenter {
    Segmenter::with_defaults().expect("segmenter construction should succeed")
}

#[test]
fn test_hello_world_boundaries() {
    let segmenter = protected();
    assert_eq!(segmenter.segment("Hello World!"), "Hello World !");
}

#[test]
fn test_contraction_and_protected_dash_sentence() {
    let segmenter = protected();
    assert_eq!(
        segmenter.segment("It's 2.5-3 miles away."),
        "It's 2.5 @-@ 3 miles away ."
    );
}

#[test]
fn test_all_four_dash_spacings() {
    let segmenter = protected();
    assert_eq!(
        segmenter.segment("a-b a -b a- b a - b"),
        "a @-@ b a -@ b a @- b a - b"
    );
}

#[test]
fn test_dash_round_trip_exact() {
    let segmenter = protected();
    for original in ["a-b", "a -b", "a- b", "a - b", "It's 2.5-3 miles away."] {
        let segmented = segmenter.segment(original);
        assert_eq!(
            segmenter.desegment(&segmented),
            original,
            "round trip failed for {original:?}"
        );
    }
}

#[test]
fn test_disabled_protection_emits_no_markers() {
    let segmenter = plain();
    let inputs = [
        "a-b a -b a- b a - b",
        "well-known up-to-date 2.5-3",
        "It's a long\u{2014}dash sentence.",
    ];
    for input in inputs {
        let segmented = segmenter.segment(input);
        assert!(
            !segmented.contains('@'),
            "unexpected marker in {segmented:?}"
        );
    }
}

#[test]
fn test_normalize_idempotence() {
    let segmenter = plain();
    let inputs = [
        "Hello World!",
        "ﬁne ｶﾀｶﾅ Ｈｅｌｌｏ ！",
        "Cafe\u{0301} au lait",
        "日本語のテスト",
        "",
    ];
    for input in inputs {
        let once = segmenter.normalize(input);
        assert_eq!(segmenter.normalize(&once), once, "not idempotent for {input:?}");
    }
}

#[test]
fn test_segment_output_whitespace_shape() {
    let segmenter = plain();
    let inputs = [
        "  leading and trailing  ",
        "internal \t\t runs\n collapse",
        "Ｈｅｌｌｏ, 世界!  It's 2.5-3.",
    ];
    for input in inputs {
        let segmented = segmenter.normalize_and_segment(input);
        assert_eq!(segmented.trim(), segmented, "untrimmed output for {input:?}");
        assert!(
            !segmented.contains("  "),
            "double space in {segmented:?}"
        );
    }
}

#[test]
fn test_logographic_input_stays_single_token() {
    let segmenter = plain();
    for input in ["日本語", "ひらがなとカタカナ", "ภาษาไทย"] {
        let segmented = segmenter.normalize_and_segment(input);
        assert_eq!(
            segmented.split_whitespace().count(),
            1,
            "logographic run split: {segmented:?}"
        );
    }
}

#[test]
fn test_contraction_stays_single_token() {
    let segmenter = plain();
    let segmented = segmenter.segment("It's");
    assert_eq!(segmented, "It's");
    assert_eq!(segmented.split_whitespace().count(), 1);
}

#[test]
fn test_boundaries_only_added_never_merged() {
    let segmenter = plain();
    let inputs = [
        "one two three",
        "Hello, 世界! It's 2.5-3.",
        "a-b c/d (e)",
    ];
    for input in inputs {
        let normalized = segmenter.normalize(input);
        let segmented = segmenter.segment(&normalized);
        assert!(
            segmented.split_whitespace().count() >= normalized.split_whitespace().count(),
            "token count shrank for {input:?}"
        );
    }
}

#[test]
fn test_mixed_script_sentence() {
    let segmenter = plain();
    assert_eq!(
        segmenter.normalize_and_segment("I read 日本語 daily."),
        "I read 日本語 daily ."
    );
    assert_eq!(
        segmenter.normalize_and_segment("漢字abc123"),
        "漢字 abc123"
    );
}

#[test]
fn test_desegment_english_sentence() {
    let segmenter = plain();
    assert_eq!(
        segmenter.desegment("He said \" wait \" , then left ."),
        "He said \"wait\", then left."
    );
}

#[test]
fn test_totality_over_odd_inputs() {
    let segmenter = protected();
    // Control characters, unassigned planes, lone markers: nothing panics,
    // nothing is dropped
    for input in ["", "   ", "\u{0000}", "a\u{0007}b", "\u{10FFFF}", "@-@"] {
        let _ = segmenter.normalize(input);
        let _ = segmenter.segment(input);
        let _ = segmenter.normalize_and_segment(input);
        let _ = segmenter.desegment(input);
    }
}

#[test]
fn test_instances_with_different_configs_coexist() {
    let protected = protected();
    let plain = plain();
    assert_eq!(protected.segment("a-b"), "a @-@ b");
    assert_eq!(plain.segment("a-b"), "a - b");
    // The first instance is unaffected by the second's configuration
    assert_eq!(protected.segment("a-b"), "a @-@ b");
}
