//! # Sylph
//!
//! A fast symmetric-delete spelling correction library for Rust, inspired by
//! SymSpell.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Near-constant-time candidate lookup via a precomputed delete-variant index
//! - Bounded Damerau-Levenshtein verification with an ASCII fast path
//! - Frequency-aware ranking that can rescue typos of common words
//! - Parallel index construction for bulk dictionary loads
//!
//! ## Example
//!
//! ```
//! use sylph::{SpellConfig, SpellEngine, Verbosity};
//!
//! let mut engine = SpellEngine::new(SpellConfig::default()).unwrap();
//! engine.add_term("hello", 500);
//! engine.add_term("help", 400);
//!
//! let suggestions = engine.lookup("helo", Verbosity::Top, 2).unwrap();
//! assert_eq!(suggestions[0].term, "hello");
//! ```

pub mod config;
pub mod dictionary;
pub mod distance;
pub mod edits;
pub mod engine;
pub mod error;
pub mod index;
pub mod lookup;

pub use config::SpellConfig;
pub use distance::{DamerauLevenshtein, EditDistance};
pub use engine::SpellEngine;
pub use error::{Result, SylphError};
pub use lookup::{Suggestion, Verbosity};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
