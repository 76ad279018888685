//! Generative properties checked against reference implementations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sylph::{DamerauLevenshtein, EditDistance, SpellConfig, SpellEngine, Verbosity};

/// Reference Damerau-Levenshtein (adjacent transposition) over the full
/// matrix. Slow but obviously correct.
fn oracle_damerau(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0usize; len2 + 1]; len1 + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);
            let mut dist = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
            if i > 1
                && j > 1
                && s1_chars[i - 1] == s2_chars[j - 2]
                && s1_chars[i - 2] == s2_chars[j - 1]
            {
                dist = dist.min(matrix[i - 2][j - 2] + cost);
            }
            matrix[i][j] = dist;
        }
    }

    matrix[len1][len2]
}

/// Plain Levenshtein, used as an upper bound for the transposition-aware
/// distance.
fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr = vec![0usize; s2_chars.len() + 1];

    for (i, &a) in s1_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &b) in s2_chars.iter().enumerate() {
            let cost = usize::from(a != b);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[s2_chars.len()]
}

fn random_word(rng: &mut StdRng, alphabet: &[char], max_len: usize) -> String {
    let len = rng.gen_range(1..=max_len);
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

const ASCII: &[char] = &['a', 'b', 'c', 'd'];
const MIXED: &[char] = &['a', 'b', 'é', 'я', 'ß'];

#[test]
fn test_distance_identity_and_symmetry() {
    let dl = DamerauLevenshtein::new();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..300 {
        let alphabet = if rng.gen_bool(0.5) { ASCII } else { MIXED };
        let a = random_word(&mut rng, alphabet, 8);
        let b = random_word(&mut rng, alphabet, 8);

        assert_eq!(dl.distance(&a, &a), 0, "identity for {a}");
        assert_eq!(dl.distance(&a, &b), dl.distance(&b, &a), "{a} vs {b}");
    }
}

#[test]
fn test_distance_matches_full_matrix_oracle() {
    let dl = DamerauLevenshtein::new();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let alphabet = if rng.gen_bool(0.5) { ASCII } else { MIXED };
        let a = random_word(&mut rng, alphabet, 10);
        let b = random_word(&mut rng, alphabet, 10);
        assert_eq!(
            dl.distance(&a, &b),
            oracle_damerau(&a, &b),
            "{a} vs {b}"
        );
    }
}

#[test]
fn test_distance_bounds() {
    let dl = DamerauLevenshtein::new();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..300 {
        let a = random_word(&mut rng, ASCII, 10);
        let b = random_word(&mut rng, ASCII, 10);
        let d = dl.distance(&a, &b);
        let len_a = a.chars().count();
        let len_b = b.chars().count();

        assert!(d >= len_a.abs_diff(len_b), "{a} vs {b}");
        assert!(d <= len_a.max(len_b), "{a} vs {b}");
        // Allowing transpositions never costs more than plain Levenshtein.
        assert!(d <= oracle_levenshtein(&a, &b), "{a} vs {b}");
    }
}

#[test]
fn test_bounded_agrees_with_exact() {
    let dl = DamerauLevenshtein::new();
    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..300 {
        let alphabet = if rng.gen_bool(0.5) { ASCII } else { MIXED };
        let a = random_word(&mut rng, alphabet, 10);
        let b = random_word(&mut rng, alphabet, 10);
        let d = dl.distance(&a, &b);

        for k in 0..=5 {
            let bounded = dl.distance_within(&a, &b, k);
            if d <= k {
                assert_eq!(bounded, Some(d), "{a} vs {b} at k={k}");
            } else {
                assert_eq!(bounded, None, "{a} vs {b} at k={k}");
            }
        }
    }
}

#[test]
fn test_adjacent_transposition_is_one_edit() {
    let dl = DamerauLevenshtein::new();
    assert_eq!(dl.distance("ab", "ba"), 1);

    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..100 {
        let word = random_word(&mut rng, &['a', 'b', 'c', 'd', 'e', 'f'], 8);
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < 2 {
            continue;
        }
        let at = rng.gen_range(0..chars.len() - 1);
        if chars[at] == chars[at + 1] {
            continue;
        }
        let mut swapped = chars.clone();
        swapped.swap(at, at + 1);
        let swapped: String = swapped.into_iter().collect();
        assert_eq!(dl.distance(&word, &swapped), 1, "{word} vs {swapped}");
    }
}

fn random_dictionary(rng: &mut StdRng, size: usize) -> Vec<String> {
    let mut terms: Vec<String> = (0..size * 2)
        .map(|_| random_word(rng, ASCII, 6))
        .collect();
    terms.sort();
    terms.dedup();
    terms.truncate(size);
    terms
}

#[test]
fn test_all_lookup_matches_brute_force_oracle() {
    let mut rng = StdRng::seed_from_u64(23);

    for _ in 0..20 {
        let terms = random_dictionary(&mut rng, 30);
        let mut engine = SpellEngine::new(SpellConfig::default()).unwrap();
        for term in &terms {
            // Equal counts keep the frequency tiebreak out of the picture.
            engine.add_term(term, 10);
        }

        for _ in 0..20 {
            let query = random_word(&mut rng, ASCII, 7);
            for k in 1..=2usize {
                let mut got: Vec<(String, usize)> = engine
                    .lookup(&query, Verbosity::All, k)
                    .unwrap()
                    .into_iter()
                    .map(|s| (s.term, s.distance))
                    .collect();
                got.sort();

                let mut expected: Vec<(String, usize)> = terms
                    .iter()
                    .filter_map(|t| {
                        let d = oracle_damerau(&query, t);
                        (d <= k).then(|| (t.clone(), d))
                    })
                    .collect();
                expected.sort();

                assert_eq!(got, expected, "query {query} at k={k}");
            }
        }
    }
}

#[test]
fn test_exact_term_at_distance_zero() {
    let mut rng = StdRng::seed_from_u64(29);
    let terms = random_dictionary(&mut rng, 40);
    let mut engine = SpellEngine::new(SpellConfig::default()).unwrap();
    for (i, term) in terms.iter().enumerate() {
        engine.add_term(term, 10 + i as u32);
    }

    for term in &terms {
        let suggestions = engine.lookup(term, Verbosity::All, 0).unwrap();
        assert_eq!(suggestions.len(), 1, "term {term}");
        assert_eq!(&suggestions[0].term, term);
        assert_eq!(suggestions[0].distance, 0);
        assert_eq!(Some(suggestions[0].count), engine.frequency(term));
    }
}

#[test]
fn test_verbosity_shapes() {
    let mut rng = StdRng::seed_from_u64(31);
    let terms = random_dictionary(&mut rng, 40);
    let mut engine = SpellEngine::new(SpellConfig::default()).unwrap();
    for term in &terms {
        // Counts at or above the frequency threshold keep exact matches
        // final under Top and Closest, which is what gives those verbosities
        // their single-tier shape.
        engine.add_term(term, rng.gen_range(1000..5000));
    }

    for _ in 0..50 {
        let query = random_word(&mut rng, ASCII, 7);

        let top = engine.lookup(&query, Verbosity::Top, 2).unwrap();
        assert!(top.len() <= 1, "query {query}");

        let closest = engine.lookup(&query, Verbosity::Closest, 2).unwrap();
        if let Some(first) = closest.first() {
            assert!(
                closest.iter().all(|s| s.distance == first.distance),
                "query {query}"
            );
        }

        let all = engine.lookup(&query, Verbosity::All, 2).unwrap();
        for pair in all.windows(2) {
            assert!(
                pair[0].distance < pair[1].distance
                    || (pair[0].distance == pair[1].distance && pair[0].count >= pair[1].count),
                "query {query}"
            );
        }
    }
}

#[test]
fn test_dictionary_order_independence() {
    let mut rng = StdRng::seed_from_u64(37);
    let terms = random_dictionary(&mut rng, 30);
    let entries: Vec<(String, u32)> = terms
        .into_iter()
        .map(|t| {
            let count = rng.gen_range(1..100);
            (t, count)
        })
        .collect();

    let queries: Vec<String> = (0..30).map(|_| random_word(&mut rng, ASCII, 7)).collect();

    let mut baseline: Option<Vec<Vec<(usize, u32, String)>>> = None;
    for round in 0..3 {
        let mut shuffled = entries.clone();
        // Fisher-Yates with the shared rng; each round sees a different order.
        for i in (1..shuffled.len()).rev() {
            let j = rng.gen_range(0..=i);
            shuffled.swap(i, j);
        }

        let mut engine = SpellEngine::new(SpellConfig::default()).unwrap();
        for (term, count) in &shuffled {
            engine.add_term(term, *count);
        }

        let results: Vec<Vec<(usize, u32, String)>> = queries
            .iter()
            .map(|q| {
                let mut items: Vec<(usize, u32, String)> = engine
                    .lookup(q, Verbosity::All, 2)
                    .unwrap()
                    .into_iter()
                    .map(|s| (s.distance, s.count, s.term))
                    .collect();
                // Ties on (distance, count) have no specified order; compare
                // under a total key.
                items.sort();
                items
            })
            .collect();

        match &baseline {
            None => baseline = Some(results),
            Some(expected) => assert_eq!(expected, &results, "round {round}"),
        }
    }
}
