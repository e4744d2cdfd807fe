//! Wildcard matching end-to-end: the seed scenarios plus randomized
//! soundness/completeness against a reference acceptor.

use rand::{rngs::StdRng, Rng, SeedableRng};
use vint_trie::PatternTrie;

#[test]
fn stock_scenario() {
    let mut trie = PatternTrie::new();
    trie.insert("stock.nasdaq.aapl", 1, "aapl-monitor").unwrap();
    trie.insert("stock.*.aapl", 103, "any-exchange-aapl").unwrap();
    trie.insert("stock.#", 104, "all-stocks").unwrap();

    let mut ids = trie.match_ids("stock.nasdaq.aapl");
    ids.sort_unstable();
    assert_eq!(ids, [1, 103, 104]);

    assert_eq!(trie.match_ids("stock.nyse.goog"), [104]);
    // # matches zero segments.
    assert_eq!(trie.match_ids("stock"), [104]);
}

#[test]
fn log_scenario() {
    let mut trie = PatternTrie::new();
    trie.insert("log.*.error", 30, "service-errors").unwrap();
    trie.insert("log.#", 31, "all-logs").unwrap();
    trie.insert("log.auth.#", 32, "auth-logs").unwrap();
    trie.insert("log.*.*.critical", 33, "critical").unwrap();

    let mut ids = trie.match_ids("log.auth.error");
    ids.sort_unstable();
    assert_eq!(ids, [30, 31, 32]);

    let mut ids = trie.match_ids("log.api.db.critical");
    ids.sort_unstable();
    assert_eq!(ids, [31, 33]);
}

#[test]
fn each_subscriber_appears_once() {
    let mut trie = PatternTrie::new();
    // Multiple hash paths that accept the same input must not duplicate.
    trie.insert("a.#", 1, "one").unwrap();
    trie.insert("a.#.b", 1, "one-again").unwrap();
    trie.insert("#", 1, "one-everywhere").unwrap();
    assert_eq!(trie.match_ids("a.b"), [1]);
}

// ---------------------------------------------------------------------------
// Randomized soundness + completeness against a reference acceptor
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
enum Seg {
    Literal(String),
    Star,
    Hash,
}

fn accepts(pattern: &[Seg], input: &[&str]) -> bool {
    match pattern.split_first() {
        None => input.is_empty(),
        Some((Seg::Literal(text), rest)) => {
            input.first().copied() == Some(text.as_str()) && accepts(rest, &input[1..])
        }
        Some((Seg::Star, rest)) => !input.is_empty() && accepts(rest, &input[1..]),
        Some((Seg::Hash, rest)) => (0..=input.len()).any(|k| accepts(rest, &input[k..])),
    }
}

fn random_pattern(rng: &mut StdRng) -> (String, Vec<Seg>) {
    let words = ["a", "b", "c"];
    let len = rng.gen_range(1..=4);
    let mut text_parts = Vec::new();
    let mut segs = Vec::new();
    for _ in 0..len {
        match rng.gen_range(0..4) {
            0 => {
                text_parts.push("*".to_owned());
                segs.push(Seg::Star);
            }
            1 => {
                text_parts.push("#".to_owned());
                segs.push(Seg::Hash);
            }
            _ => {
                let w = words[rng.gen_range(0..words.len())];
                text_parts.push(w.to_owned());
                segs.push(Seg::Literal(w.to_owned()));
            }
        }
    }
    (text_parts.join("."), segs)
}

fn random_input(rng: &mut StdRng) -> String {
    let words = ["a", "b", "c"];
    let len = rng.gen_range(0..=4);
    (0..len)
        .map(|_| words[rng.gen_range(0..words.len())])
        .collect::<Vec<_>>()
        .join(".")
}

#[test]
fn matches_agree_with_reference_acceptor() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for round in 0..40 {
        let mut trie = PatternTrie::new();
        let mut patterns = Vec::new();
        for id in 0..20u32 {
            let (text, segs) = random_pattern(&mut rng);
            // Duplicate pattern texts collapse onto one terminal; that is
            // fine, the reference below dedups by id the same way.
            trie.insert(&text, id, "sub").unwrap();
            patterns.push((id, segs));
        }

        for _ in 0..50 {
            let input = random_input(&mut rng);
            let input_segments: Vec<&str> =
                if input.is_empty() { Vec::new() } else { input.split('.').collect() };

            let mut expected: Vec<u32> = patterns
                .iter()
                .filter(|(_, segs)| accepts(segs, &input_segments))
                .map(|(id, _)| *id)
                .collect();
            expected.sort_unstable();
            expected.dedup();

            let mut got = trie.match_ids(&input);
            got.sort_unstable();

            assert_eq!(got, expected, "round {round}, input {input:?}");
        }
    }
}
