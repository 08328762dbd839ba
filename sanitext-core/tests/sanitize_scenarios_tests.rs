// sanitext-core/tests/sanitize_scenarios_tests.rs
//! End-to-end behaviour of the public API: the documented scenarios plus the
//! idempotence, closure, cancellation and determinism properties.

use async_trait::async_trait;
use sanitext_core::{
    build_allowed_set, decision_channel, detect, resolve_closest, sanitize, sanitize_non_interactive,
    AllowedSet, CharacterInfo, Decision, DecisionOrder, DecisionProvider, SanitizeOptions, Sanitizer,
};

/// Replies with the same decision every time and counts the questions.
struct CountingDecider {
    decision: Decision,
    calls: usize,
}

#[async_trait]
impl DecisionProvider for CountingDecider {
    async fn decide(&mut self, _info: &CharacterInfo) -> Decision {
        self.calls += 1;
        self.decision.clone()
    }
}

/// Cancels on the n-th question (1-based), removes before that.
struct CancelAt {
    at: usize,
    calls: usize,
}

#[async_trait]
impl DecisionProvider for CancelAt {
    async fn decide(&mut self, _info: &CharacterInfo) -> Decision {
        self.calls += 1;
        if self.calls == self.at {
            Decision::Cancel
        } else {
            Decision::Remove
        }
    }
}

const MIXED_SAMPLES: &[&str] = &[
    "H\u{00E9}llo",
    "\u{201C}quoted\u{201D} and \u{2018}single\u{2019}",
    "zero\u{200B}width\u{FEFF}and\u{202E}bidi",
    "\u{FF21}\u{FF22}\u{FF23} \u{FB01}le \u{2460}",
    "\u{0440}\u{0430}\u{0443}pal \u{1F600}\u{1F525} \u{4E2D}\u{6587}",
    "tabs\tand\r\nnewlines \u{00A0}\u{2003}\u{3000}",
    "",
];

#[test]
fn idempotence_on_clean_text() {
    let set = AllowedSet::default();
    let clean = "The quick brown fox {jumps} over ~the~ lazy dog.\r\n\t0123456789";
    assert!(detect(clean, &set).is_empty());
    assert_eq!(sanitize_non_interactive(clean, &set), clean);
}

#[test]
fn closure_after_non_interactive_sanitize() {
    for allow_emoji in [false, true] {
        let set = build_allowed_set(allow_emoji, "\u{00E9}".chars());
        for sample in MIXED_SAMPLES {
            let out = sanitize_non_interactive(sample, &set);
            assert!(
                out.chars().all(|c| set.contains(c)),
                "escaped characters in {:?} -> {:?}",
                sample,
                out
            );
            // A second pass has nothing left to do.
            assert!(detect(&out, &set).is_empty());
        }
    }
}

#[tokio::test]
async fn cancellation_invariance_at_every_position() {
    let set = AllowedSet::default();
    let text = "\u{2014}a\u{00E9}b\u{1F600}c\u{200B}";
    for at in 1..=4 {
        let mut decider = CancelAt { at, calls: 0 };
        let out = sanitize(text, &set, true, Some(&mut decider)).await;
        assert_eq!(out, text);
        assert_eq!(decider.calls, at);
    }
}

#[test]
fn determinism_of_resolver_and_detector() {
    let set = build_allowed_set(true, "".chars());
    for sample in MIXED_SAMPLES {
        assert_eq!(detect(sample, &set), detect(sample, &set));
        for c in sample.chars() {
            assert_eq!(resolve_closest(c, &set), resolve_closest(c, &set));
        }
    }
}

#[test]
fn hex_formatting_examples() {
    assert_eq!(CharacterInfo::new('A').hex_code, "U+0041");
    assert_eq!(CharacterInfo::new('\u{1F600}').hex_code, "U+1F600");
}

#[test]
fn scenario_accented_letter_resolves_to_base() {
    let set = build_allowed_set(false, "".chars());
    assert_eq!(sanitize_non_interactive("H\u{00E9}llo", &set), "Hello");
}

#[test]
fn scenario_curly_quote_becomes_straight() {
    let set = AllowedSet::default();
    assert_eq!(sanitize_non_interactive("say \u{201D}hi", &set), "say \"hi");
}

#[test]
fn scenario_emoji_removed_when_not_allowed() {
    let set = build_allowed_set(false, "".chars());
    assert_eq!(resolve_closest('\u{1F600}', &set), "");
    assert_eq!(sanitize_non_interactive("\u{1F600}", &set), "");
}

#[test]
fn scenario_emoji_kept_when_allowed() {
    let set = build_allowed_set(true, "".chars());
    assert!(detect("\u{1F600}", &set).is_empty());
    assert_eq!(sanitize_non_interactive("\u{1F600}", &set), "\u{1F600}");
}

#[tokio::test]
async fn scenario_replace_applies_to_every_occurrence() {
    let set = AllowedSet::default();
    let mut decider = CountingDecider { decision: Decision::Replace("?".to_string()), calls: 0 };
    let out = sanitize("x\u{2022}y\u{2022}z\u{2022}", &set, true, Some(&mut decider)).await;
    assert_eq!(out, "x?y?z?");
    assert_eq!(decider.calls, 1);
}

#[tokio::test]
async fn keep_is_the_authorized_escape_from_closure() {
    let set = AllowedSet::default();
    let mut decider = CountingDecider { decision: Decision::Keep, calls: 0 };
    let out = sanitize("na\u{00EF}ve", &set, true, Some(&mut decider)).await;
    assert_eq!(out, "na\u{00EF}ve");
}

#[tokio::test]
async fn sanitizer_uses_options() {
    let options = SanitizeOptions {
        allow_emoji: true,
        allow_chars: "\u{00E9}".to_string(),
        ..Default::default()
    };
    let sanitizer = Sanitizer::new(options);
    let text = "caf\u{00E9} \u{2615} \u{2014}";
    assert_eq!(sanitizer.detect(text).len(), 1);

    let outcome = sanitizer.sanitize_with_report(text, None).await;
    assert_eq!(outcome.output, "caf\u{00E9} \u{2615} -");
    assert!(outcome.changed());
    assert_eq!(outcome.replacements.len(), 1);
}

#[tokio::test]
async fn interactive_order_is_configurable() {
    let text = "\u{FF01}\u{1F600}";
    for (order, expected_first) in [
        (DecisionOrder::CodePoint, '\u{FF01}'),
        (DecisionOrder::Utf16, '\u{1F600}'),
    ] {
        let options = SanitizeOptions { interactive: true, decision_order: Some(order), ..Default::default() };
        let sanitizer = Sanitizer::new(options);
        let (mut decider, mut requests) = decision_channel();

        let responder = tokio::spawn(async move {
            let mut asked = Vec::new();
            while let Some(request) = requests.next().await {
                asked.push(request.info.char);
                request.respond(Decision::Remove);
            }
            asked
        });

        let out = sanitizer.sanitize(text, Some(&mut decider)).await;
        assert_eq!(out, "");
        drop(decider);
        let asked = responder.await.unwrap();
        assert_eq!(asked[0], expected_first);
        assert_eq!(asked.len(), 2);
    }
}
