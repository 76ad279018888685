//! Delete-variant index.
//!
//! Maps every delete-variant to the ids of the terms that produce it. The
//! bulk of the index is a single packed postings array addressed by
//! `(offset, len)` ranges, built once after a dictionary load; terms added
//! afterwards land in a per-variant append tail so the packed layout never
//! has to shift.

use ahash::AHashMap;
use rayon::prelude::*;

use crate::edits::delete_variants;

/// Location of one variant's posting run inside the packed array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PostingRange {
    offset: u32,
    len: u32,
}

/// Read-only view of the postings for one variant: the packed run built at
/// load time plus any ids appended since.
#[derive(Debug, Clone, Copy)]
pub struct Postings<'a> {
    packed: &'a [u32],
    tail: &'a [u32],
}

impl<'a> Postings<'a> {
    /// Iterate over all term ids under this variant.
    pub fn iter(self) -> impl Iterator<Item = u32> + 'a {
        self.packed.iter().chain(self.tail).copied()
    }

    /// Total number of ids.
    pub fn len(&self) -> usize {
        self.packed.len() + self.tail.len()
    }

    /// Whether the variant has no postings at all.
    pub fn is_empty(&self) -> bool {
        self.packed.is_empty() && self.tail.is_empty()
    }
}

/// Index from delete-variant to the term ids that generate it.
#[derive(Debug, Default)]
pub struct DeleteIndex {
    ranges: AHashMap<String, PostingRange>,
    packed: Vec<u32>,
    tail: AHashMap<String, Vec<u32>>,
}

impl DeleteIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        DeleteIndex::default()
    }

    /// (Re)build the packed index over every term in `terms`, id = position.
    ///
    /// Terms are partitioned into shards by `id % shard_count`; each shard
    /// enumerates its variants into a local map in parallel, and the shard
    /// maps are then concatenated into the packed array under this single
    /// owner. Any previous contents, including the append tail, are
    /// replaced.
    pub fn build(&mut self, terms: &[String], max_edits: usize, prefix_length: usize) {
        self.ranges.clear();
        self.packed.clear();
        self.tail.clear();

        let shard_count = num_cpus::get().max(1);
        let shards: Vec<AHashMap<String, Vec<u32>>> = (0..shard_count)
            .into_par_iter()
            .map(|shard| {
                let mut local: AHashMap<String, Vec<u32>> = AHashMap::new();
                let mut id = shard;
                while id < terms.len() {
                    for variant in delete_variants(&terms[id], max_edits, prefix_length) {
                        local.entry(variant).or_default().push(id as u32);
                    }
                    id += shard_count;
                }
                local
            })
            .collect();

        let mut combined: AHashMap<String, Vec<u32>> = AHashMap::new();
        for shard in shards {
            for (variant, ids) in shard {
                combined.entry(variant).or_default().extend(ids);
            }
        }

        self.ranges.reserve(combined.len());
        for (variant, ids) in combined {
            let offset = self.packed.len() as u32;
            self.packed.extend_from_slice(&ids);
            self.ranges.insert(
                variant,
                PostingRange {
                    offset,
                    len: ids.len() as u32,
                },
            );
        }
    }

    /// Register a single term added after the packed index was built. Its
    /// variants go to the append tail.
    pub fn insert_term(&mut self, id: u32, term: &str, max_edits: usize, prefix_length: usize) {
        for variant in delete_variants(term, max_edits, prefix_length) {
            self.tail.entry(variant).or_default().push(id);
        }
    }

    /// Postings under `variant`. Constant-time, no allocation.
    pub fn postings(&self, variant: &str) -> Postings<'_> {
        let packed = match self.ranges.get(variant) {
            Some(range) => {
                let start = range.offset as usize;
                &self.packed[start..start + range.len as usize]
            }
            None => &[],
        };
        let tail = self.tail.get(variant).map_or(&[][..], Vec::as_slice);
        Postings { packed, tail }
    }

    /// Number of distinct variants in the index.
    pub fn variant_count(&self) -> usize {
        let tail_only = self
            .tail
            .keys()
            .filter(|variant| !self.ranges.contains_key(*variant))
            .count();
        self.ranges.len() + tail_only
    }
}
