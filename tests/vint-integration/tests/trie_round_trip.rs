//! Serialize → deserialize produces a trie with identical match behavior.

use rand::{rngs::StdRng, Rng, SeedableRng};
use vint_trie::{deserialize, serialize, serialized_len, PatternTrie};

fn build_sample() -> PatternTrie {
    let mut trie = PatternTrie::new();
    for (pattern, id, name) in [
        ("stock.nasdaq.aapl", 1u32, "aapl"),
        ("stock.nasdaq.goog", 2, "goog"),
        ("stock.*.aapl", 103, "any-exchange"),
        ("stock.#", 104, "all-stocks"),
        ("log.error.#", 201, "error-logger"),
        ("log.*.critical", 202, "critical-alerts"),
        ("event.#", 301, "all-events"),
    ] {
        trie.insert(pattern, id, name).unwrap();
    }
    trie
}

#[test]
fn identical_match_results_after_reload() {
    let trie = build_sample();
    let bytes = serialize(&trie);
    let (loaded, consumed) = deserialize(&bytes).unwrap();
    assert_eq!(consumed, bytes.len());

    let inputs = [
        "stock.nasdaq.aapl",
        "stock.nyse.aapl",
        "stock",
        "log.error.database",
        "log.auth.critical",
        "event.user.login",
        "no.match.here",
        "",
    ];
    for input in inputs {
        assert_eq!(
            loaded.match_ids(input),
            trie.match_ids(input),
            "input {input:?}"
        );
    }
    assert_eq!(loaded.list_patterns(), trie.list_patterns());
    assert_eq!(loaded.stats(), trie.stats());
}

#[test]
fn mutation_after_reload_behaves_like_original() {
    let trie = build_sample();
    let (mut loaded, _) = deserialize(&serialize(&trie)).unwrap();

    loaded.remove_pattern("stock.#").unwrap();
    assert!(loaded.match_ids("stock.anything.at.all").is_empty());
    loaded.insert("stock.#", 500, "replacement").unwrap();
    assert_eq!(loaded.match_ids("stock.x"), [500]);
}

#[test]
fn double_round_trip_is_stable() {
    let trie = build_sample();
    let first = serialize(&trie);
    let (loaded, _) = deserialize(&first).unwrap();
    let second = serialize(&loaded);
    assert_eq!(first, second);
}

#[test]
fn randomized_tries_round_trip() {
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    let words = ["svc", "db", "auth", "io"];

    for _ in 0..25 {
        let mut trie = PatternTrie::new();
        for id in 1..=30u32 {
            let len = rng.gen_range(1..=5);
            let pattern = (0..len)
                .map(|_| match rng.gen_range(0..5) {
                    0 => "*",
                    1 => "#",
                    n => words[n % words.len()],
                })
                .collect::<Vec<_>>()
                .join(".");
            trie.insert(&pattern, id, "subscriber").unwrap();
        }

        let bytes = serialize(&trie);
        assert_eq!(bytes.len(), serialized_len(&trie));
        let (loaded, _) = deserialize(&bytes).unwrap();

        assert_eq!(loaded.pattern_count(), trie.pattern_count());
        assert_eq!(loaded.node_count(), trie.node_count());
        assert_eq!(loaded.subscriber_count(), trie.subscriber_count());

        for _ in 0..40 {
            let len = rng.gen_range(0..=5);
            let input = (0..len)
                .map(|_| words[rng.gen_range(0..words.len())])
                .collect::<Vec<_>>()
                .join(".");
            assert_eq!(loaded.match_ids(&input), trie.match_ids(&input));
        }
    }
}
