//! Delete-variant enumeration.
//!
//! Every dictionary term contributes the set of strings reachable by removing
//! up to `max_edits` code points from its prefix. Queries enumerate the same
//! way, so a shared variant proves the pair is worth verifying.

use ahash::AHashSet;

/// All distinct strings reachable by deleting at most `max_edits` code points
/// from the first `prefix_length` code points of `key`.
///
/// The truncated key itself is always included; the empty string is included
/// iff the original key is no longer than `max_edits` code points. Deletion
/// positions only move forward, so each variant is generated once per path.
pub fn delete_variants(key: &str, max_edits: usize, prefix_length: usize) -> AHashSet<String> {
    let mut variants = AHashSet::new();
    let chars: Vec<char> = key.chars().collect();

    if chars.len() <= max_edits {
        variants.insert(String::new());
    }

    let prefix = if chars.len() > prefix_length {
        &chars[..prefix_length]
    } else {
        &chars[..]
    };
    variants.insert(prefix.iter().collect());

    push_deletes(prefix, 0, 0, max_edits, &mut variants);
    variants
}

fn push_deletes(
    word: &[char],
    depth: usize,
    start: usize,
    max_edits: usize,
    out: &mut AHashSet<String>,
) {
    let depth = depth + 1;
    for i in start..word.len() {
        let mut deleted: Vec<char> = Vec::with_capacity(word.len() - 1);
        deleted.extend_from_slice(&word[..i]);
        deleted.extend_from_slice(&word[i + 1..]);
        out.insert(deleted.iter().collect());
        if depth < max_edits {
            push_deletes(&deleted, depth, i, max_edits, out);
        }
    }
}
