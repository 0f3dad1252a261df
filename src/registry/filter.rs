//! Site filter: include/exclude rules applied to the registry before
//! dispatch.

use std::collections::HashSet;

use crate::error_handling::TracerError;
use crate::registry::{Category, Registry};

/// Include/exclude rules by domain name or category.
///
/// Domain matching is case-insensitive; category names are resolved
/// case-insensitively against the canonical set.
#[derive(Debug, Clone, Default)]
pub struct FilterRules {
    /// Domains to remove from the registry
    pub exclude_domains: Vec<String>,
    /// When non-empty, only these domains survive (after exclusion)
    pub only_domains: Vec<String>,
    /// Category names to remove from the registry
    pub exclude_categories: Vec<String>,
    /// When non-empty, only these categories survive (after exclusion)
    pub only_categories: Vec<String>,
}

impl FilterRules {
    /// True when no rule is set, i.e. the filter is the identity.
    pub fn is_empty(&self) -> bool {
        self.exclude_domains.is_empty()
            && self.only_domains.is_empty()
            && self.exclude_categories.is_empty()
            && self.only_categories.is_empty()
    }
}

/// Applies the rules to the registry, returning the reduced registry.
///
/// Exclusion runs before inclusion: every definition whose domain or
/// category is excluded is removed first, then, if any include rule is set,
/// only definitions matching an include rule are retained. Order is stable
/// (registry order minus removed entries).
///
/// # Errors
///
/// `TracerError::UnknownCategory` if any category name in the rules does
/// not resolve. Resolution happens up front, so a bad name is reported even
/// when the corresponding rule would not have removed anything.
pub fn apply(registry: &Registry, rules: &FilterRules) -> Result<Registry, TracerError> {
    let exclude_categories = resolve_categories(&rules.exclude_categories)?;
    let only_categories = resolve_categories(&rules.only_categories)?;

    if rules.is_empty() {
        return Ok(registry.clone());
    }

    let exclude_domains = lowercase_set(&rules.exclude_domains);
    let only_domains = lowercase_set(&rules.only_domains);

    let mut sites: Vec<_> = registry.iter().cloned().collect();

    if !exclude_domains.is_empty() || !exclude_categories.is_empty() {
        sites.retain(|site| {
            !exclude_domains.contains(&site.domain.to_lowercase())
                && !exclude_categories.contains(&site.category)
        });
    }

    if !only_domains.is_empty() || !only_categories.is_empty() {
        sites.retain(|site| {
            only_domains.contains(&site.domain.to_lowercase())
                || only_categories.contains(&site.category)
        });
    }

    Ok(Registry::from_shared(sites))
}

fn resolve_categories(names: &[String]) -> Result<HashSet<Category>, TracerError> {
    names.iter().map(|name| Category::resolve(name)).collect()
}

fn lowercase_set(domains: &[String]) -> HashSet<String> {
    domains.iter().map(|d| d.to_lowercase()).collect()
}
