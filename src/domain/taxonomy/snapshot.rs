use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::taxonomy::descriptor::{CategoryDescriptor, CompoundPrefixSet};

/// An immutable, validated snapshot of the category list.
///
/// The console reads categories from a mutable external source; call sites
/// take a snapshot as an explicit argument instead of consulting ambient
/// state, so derivation and resolution stay deterministic for the duration
/// of a request.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    descriptors: Vec<CategoryDescriptor>,
    compound: CompoundPrefixSet,
}

impl Taxonomy {
    pub fn new(descriptors: Vec<CategoryDescriptor>) -> DomainResult<Self> {
        for (position, descriptor) in descriptors.iter().enumerate() {
            for other in &descriptors[position + 1..] {
                if descriptor.name() == other.name() {
                    return Err(DomainError::Conflict(format!(
                        "duplicate category name '{}'",
                        descriptor.name()
                    )));
                }
                if descriptor.slug_prefix() == other.slug_prefix() {
                    return Err(DomainError::Conflict(format!(
                        "duplicate slug prefix '{}'",
                        descriptor.slug_prefix()
                    )));
                }
            }
        }

        let compound = CompoundPrefixSet::from_descriptors(&descriptors);
        Ok(Self {
            descriptors,
            compound,
        })
    }

    pub fn descriptors(&self) -> &[CategoryDescriptor] {
        &self.descriptors
    }

    pub fn compound_prefixes(&self) -> &CompoundPrefixSet {
        &self.compound
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CategoryDescriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.name() == name)
    }

    pub fn find_by_prefix(&self, slug_prefix: &str) -> Option<&CategoryDescriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.slug_prefix() == slug_prefix)
    }

    /// Match `rest` (a slug with its kind tag already stripped) against the
    /// known prefixes: compound prefixes whole and longest first, so `home`
    /// never claims a `home-services-*` identifier, then the single-segment
    /// prefixes, which cannot be ambiguous among themselves. Returns the
    /// descriptor and the remainder after the prefix and its trailing
    /// hyphen.
    pub(crate) fn match_prefix<'t, 's>(
        &'t self,
        rest: &'s str,
    ) -> Option<(&'t CategoryDescriptor, &'s str)> {
        for prefix in self.compound.iter() {
            if let Some(suffix) = strip_prefix_token(rest, prefix) {
                if let Some(descriptor) = self.find_by_prefix(prefix) {
                    return Some((descriptor, suffix));
                }
            }
        }
        for descriptor in &self.descriptors {
            if descriptor.is_compound() {
                continue;
            }
            if let Some(suffix) = strip_prefix_token(rest, descriptor.slug_prefix()) {
                return Some((descriptor, suffix));
            }
        }
        None
    }
}

/// `rest` minus `prefix` and the hyphen that must follow it.
fn strip_prefix_token<'s>(rest: &'s str, prefix: &str) -> Option<&'s str> {
    rest.strip_prefix(prefix)
        .and_then(|remainder| remainder.strip_prefix('-'))
}
