// src/application/ports/util.rs

/// Normalizes free text to a lowercase, hyphen-separated token sequence:
/// characters outside `[a-z0-9-]` stripped, repeated hyphens collapsed,
/// leading and trailing hyphens trimmed.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
