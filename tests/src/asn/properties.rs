#![cfg(test)]
use proptest::prelude::*;
use proptest::sample::Index;
use recon_core::classify::{self, Classification, Classifier, TokenKind};

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{5}",
        "[0-9]{5}[a-z,-]{1,4}",
        "[0-9]{1,4}",
        "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}/[0-9]{1,3}",
        "[A-Za-z:,()-]{1,8}",
    ]
}

/// Token streams with plenty of repeats, drawn from a small pool.
fn stream() -> impl Strategy<Value = Vec<String>> {
    (
        prop::collection::vec(token(), 1..12),
        prop::collection::vec(any::<Index>(), 0..64),
    )
        .prop_map(|(pool, picks)| picks.iter().map(|i| i.get(&pool).clone()).collect())
}

fn first_index(tokens: &[String], value: &str) -> usize {
    tokens
        .iter()
        .position(|t| t == value)
        .expect("every recorded value comes from the input")
}

fn assert_first_seen_order(tokens: &[String], recorded: &[String]) {
    let positions: Vec<usize> = recorded.iter().map(|v| first_index(tokens, v)).collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "out of order: {recorded:?} at {positions:?}"
    );
}

proptest! {
    #[test]
    fn lists_are_disjoint(tokens in stream()) {
        let out = classify::classify(&tokens);
        for asn in out.asns() {
            prop_assert!(!out.ip_ranges().contains(asn));
        }
    }

    #[test]
    fn lists_have_no_duplicates(tokens in stream()) {
        let out = classify::classify(&tokens);
        let mut asns = out.asns().to_vec();
        asns.sort();
        asns.dedup();
        prop_assert_eq!(asns.len(), out.asns().len());

        let mut ranges = out.ip_ranges().to_vec();
        ranges.sort();
        ranges.dedup();
        prop_assert_eq!(ranges.len(), out.ip_ranges().len());
    }

    #[test]
    fn lists_follow_first_occurrence(tokens in stream()) {
        let out = classify::classify(&tokens);
        assert_first_seen_order(&tokens, out.asns());
        assert_first_seen_order(&tokens, out.ip_ranges());
    }

    #[test]
    fn reclassifying_results_is_stable(tokens in stream()) {
        let out = classify::classify(&tokens);
        let again = classify::classify(out.asns().iter().chain(out.ip_ranges()));
        prop_assert_eq!(again, out);
    }

    #[test]
    fn every_matching_token_is_recorded(tokens in stream()) {
        let classifier = Classifier::default();
        let out = classifier.classify(&tokens);
        for token in &tokens {
            match classifier.kind(token) {
                TokenKind::Asn => prop_assert!(out.asns().contains(token)),
                TokenKind::IpRange => prop_assert!(out.ip_ranges().contains(token)),
                TokenKind::Unmatched => {
                    prop_assert!(!out.asns().contains(token));
                    prop_assert!(!out.ip_ranges().contains(token));
                }
            }
        }
    }

    #[test]
    fn streaming_equals_batch(tokens in stream()) {
        let classifier = Classifier::default();
        let mut streamed = Classification::new();
        for token in &tokens {
            classifier.record(&mut streamed, token);
        }
        prop_assert_eq!(streamed, classifier.classify(&tokens));
    }
}
