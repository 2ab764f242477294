//! Taxonomy and ordering core for the Plaza admin console.
//!
//! The crate owns the three pieces of the console with real invariants:
//! deterministic slug derivation from `(category, title)` pairs, the reverse
//! slug -> category mapping used on every grouped render, and swap-based
//! manual sequencing of category siblings. Storage, transport, and
//! authentication live behind the repository traits in
//! [`domain::content::repository`] and are supplied by the embedder;
//! [`infrastructure::repositories::InMemoryContentStore`] is the reference
//! adapter.

pub mod application;
pub mod domain;
pub mod infrastructure;
