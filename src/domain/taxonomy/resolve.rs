//! Reverse mapping from a slug back to its category.
//!
//! Called on every render of a grouped listing, so it is pure and performs
//! no I/O: the taxonomy snapshot carries everything needed. Resolution never
//! fails; anything unrecognizable lands on the Uncategorized sentinel.

use crate::domain::content::value_objects::{ContentKind, Slug};
use crate::domain::taxonomy::descriptor::CategoryDescriptor;
use crate::domain::taxonomy::legacy::LEGACY_PREFIXES;
use crate::domain::taxonomy::snapshot::Taxonomy;

impl Taxonomy {
    /// Resolve the category a slug belongs to.
    ///
    /// Strips the kind tag, then tries known prefixes longest-first (compound
    /// prefixes before the single-segment prefix that shadows them), then the
    /// legacy table, then the sentinel.
    pub fn resolve_category(&self, kind: ContentKind, slug: &Slug) -> &CategoryDescriptor {
        let Some(rest) = slug
            .as_str()
            .strip_prefix(kind.tag())
            .and_then(|remainder| remainder.strip_prefix('-'))
        else {
            // Pre-namespace identifiers carry no kind tag at all.
            return self.resolve_legacy(slug.as_str());
        };

        if let Some((descriptor, _)) = self.match_prefix(rest) {
            return descriptor;
        }
        self.resolve_legacy(rest)
    }

    fn resolve_legacy(&self, rest: &str) -> &CategoryDescriptor {
        for (legacy_prefix, category_name) in LEGACY_PREFIXES {
            let matches = rest == *legacy_prefix
                || rest
                    .strip_prefix(legacy_prefix)
                    .is_some_and(|remainder| remainder.starts_with('-'));
            if matches {
                if let Some(descriptor) = self.find_by_name(category_name) {
                    return descriptor;
                }
            }
        }
        CategoryDescriptor::uncategorized()
    }
}
