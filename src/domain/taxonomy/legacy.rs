//! Static prefix table for identifiers minted before the current taxonomy.
//!
//! Early listings used short ad-hoc prefixes with no namespace tag. The
//! table maps each of them to the canonical category name; a slug whose
//! legacy category no longer exists in the live taxonomy still resolves to
//! the Uncategorized sentinel rather than erroring.

pub(crate) const LEGACY_PREFIXES: &[(&str, &str)] = &[
    ("biz", "Professional Services"),
    ("eats", "Food & Dining"),
    ("fixit", "Home Services"),
    ("yard", "Landscaping"),
    ("talk", "General Discussion"),
];
