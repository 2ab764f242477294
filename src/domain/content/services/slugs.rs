use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::content::repository::ContentReadStore;
use crate::domain::content::value_objects::{ContentKind, ItemId, Slug};
use crate::domain::errors::DomainResult;
use crate::domain::taxonomy::{CategoryDescriptor, Taxonomy};

/// Substituted when a title normalizes to nothing, or prefix de-duplication
/// consumes it entirely. A category-only slug would be ambiguous with the
/// category itself, so derivation always emits *some* suffix.
pub const PLACEHOLDER_SUFFIX: &str = "untitled";

/// Deterministic slug derivation. Pure: no I/O, no ambient state — the
/// taxonomy snapshot and kind tag arrive as arguments.
pub struct SlugDeriver {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugDeriver {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Derive `<kind-tag>-<category-prefix>-<suffix>`.
    ///
    /// The suffix basis is the parsed suffix of `existing` when one is
    /// supplied and recognizable (edit path: the human-meaningful identifier
    /// survives category moves), otherwise the normalized title. Leading
    /// basis segments that duplicate any segment of the category prefix are
    /// dropped, so "Home Plumbing" under `home-services` never yields
    /// `home-services-home-plumbing`.
    pub fn derive(
        &self,
        taxonomy: &Taxonomy,
        kind: ContentKind,
        category: &CategoryDescriptor,
        title: &str,
        existing: Option<&Slug>,
    ) -> DomainResult<Slug> {
        let basis = existing
            .and_then(|slug| parse_suffix(taxonomy, kind, slug))
            .unwrap_or_else(|| self.generator.slugify(title));
        let deduped = strip_prefix_segments(&basis, category);
        let suffix = if deduped.is_empty() {
            PLACEHOLDER_SUFFIX
        } else {
            deduped
        };
        Slug::new(format!(
            "{}-{}-{suffix}",
            kind.tag(),
            category.slug_prefix()
        ))
    }
}

/// The portion of a slug after its kind tag and category prefix, when both
/// are recognizable against the supplied taxonomy.
fn parse_suffix(taxonomy: &Taxonomy, kind: ContentKind, slug: &Slug) -> Option<String> {
    let rest = slug
        .as_str()
        .strip_prefix(kind.tag())?
        .strip_prefix('-')?;
    let (_, suffix) = taxonomy.match_prefix(rest)?;
    if suffix.is_empty() {
        None
    } else {
        Some(suffix.to_owned())
    }
}

/// Drop leading segments of `basis` that appear among the category prefix's
/// own segments, repeatedly: compound prefixes contribute every segment.
fn strip_prefix_segments<'a>(basis: &'a str, category: &CategoryDescriptor) -> &'a str {
    let mut rest = basis;
    loop {
        match rest.split_once('-') {
            Some((head, tail)) => {
                if category.prefix_segments().any(|segment| segment == head) {
                    rest = tail;
                } else {
                    return rest;
                }
            }
            None => {
                if category.prefix_segments().any(|segment| segment == rest) {
                    return "";
                }
                return rest;
            }
        }
    }
}

/// Layers a uniqueness pass over pure derivation: the store is probed by
/// slug and a numeric counter appended while the candidate is taken by a
/// different item.
pub struct SlugService {
    read_store: Arc<dyn ContentReadStore>,
    deriver: SlugDeriver,
}

impl SlugService {
    pub fn new(read_store: Arc<dyn ContentReadStore>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_store,
            deriver: SlugDeriver::new(generator),
        }
    }

    pub fn deriver(&self) -> &SlugDeriver {
        &self.deriver
    }

    pub async fn generate_unique_slug(
        &self,
        taxonomy: &Taxonomy,
        kind: ContentKind,
        category: &CategoryDescriptor,
        title: &str,
        existing: Option<&Slug>,
        ignore_id: Option<&ItemId>,
    ) -> DomainResult<Slug> {
        let base = self
            .deriver
            .derive(taxonomy, kind, category, title, existing)?;

        let mut candidate = base.clone();
        let mut counter = 1u64;

        loop {
            match self.read_store.find_by_slug(&candidate).await? {
                Some(holder) if ignore_id.is_some_and(|id| *id == holder.id) => {
                    return Ok(candidate);
                }
                Some(_) => {
                    candidate = Slug::new(format!("{}-{counter}", base.as_str()))?;
                    counter += 1;
                }
                None => return Ok(candidate),
            }
        }
    }
}
