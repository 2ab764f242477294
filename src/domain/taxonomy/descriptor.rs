use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use std::sync::OnceLock;

/// One category in a taxonomy: a human-readable label plus the lowercase
/// prefix its item slugs carry. The prefix is stable once items reference
/// it; renaming it requires migrating every dependent slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDescriptor {
    name: String,
    slug_prefix: String,
}

impl CategoryDescriptor {
    pub fn new(name: impl Into<String>, slug_prefix: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let slug_prefix = slug_prefix.into();
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "category name cannot be empty".into(),
            ));
        }
        if !is_valid_prefix(&slug_prefix) {
            return Err(DomainError::Validation(format!(
                "invalid slug prefix '{slug_prefix}': expected lowercase hyphen-joined segments"
            )));
        }
        Ok(Self { name, slug_prefix })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug_prefix(&self) -> &str {
        &self.slug_prefix
    }

    /// Compound prefixes span more than one hyphen-joined segment and must
    /// be matched whole: `home-services-plumber` belongs to `home-services`,
    /// not to a hypothetical `home` category with a `services-plumber` item.
    pub fn is_compound(&self) -> bool {
        self.slug_prefix.contains('-')
    }

    pub fn prefix_segments(&self) -> impl Iterator<Item = &str> {
        self.slug_prefix.split('-')
    }

    /// Sentinel returned when a slug resolves to no known category. Never an
    /// error: resolution is a display aid on hot render paths.
    pub fn uncategorized() -> &'static Self {
        static SENTINEL: OnceLock<CategoryDescriptor> = OnceLock::new();
        SENTINEL.get_or_init(|| Self {
            name: "Uncategorized".into(),
            slug_prefix: "uncategorized".into(),
        })
    }
}

impl fmt::Display for CategoryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// The fixed set of multi-segment prefixes in a taxonomy, kept longest-first
/// so whole-prefix matching always wins over a shorter prefix that happens
/// to share its first segment.
#[derive(Debug, Clone, Default)]
pub struct CompoundPrefixSet {
    prefixes: Vec<String>,
}

impl CompoundPrefixSet {
    pub(crate) fn from_descriptors(descriptors: &[CategoryDescriptor]) -> Self {
        let mut prefixes: Vec<String> = descriptors
            .iter()
            .filter(|descriptor| descriptor.is_compound())
            .map(|descriptor| descriptor.slug_prefix.clone())
            .collect();
        prefixes.sort_by(|a, b| {
            segment_count(b)
                .cmp(&segment_count(a))
                .then_with(|| b.len().cmp(&a.len()))
                .then_with(|| a.cmp(b))
        });
        Self { prefixes }
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.prefixes.iter().any(|known| known == prefix)
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Longest-first iteration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }
}

fn segment_count(prefix: &str) -> usize {
    prefix.split('-').count()
}
